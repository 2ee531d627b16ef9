use std::time::Duration;

use mailsift_engine::{
    fetch_page, FailureKind, FetchSettings, Fetcher, PageFetch, ReqwestFetcher,
    BROWSER_USER_AGENT,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_with(settings: FetchSettings) -> ReqwestFetcher {
    ReqwestFetcher::new(settings).expect("client builds")
}

#[tokio::test]
async fn fetcher_returns_body_and_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>hola@bar.example</p>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings::default());
    let url = format!("{}/contact", server.uri());

    let output = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(output.metadata.original_url, url);
    assert_eq!(output.metadata.final_url, output.metadata.original_url);
    assert!(output
        .metadata
        .content_type
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(output.bytes, b"<p>hola@bar.example</p>");
    assert_eq!(output.metadata.byte_len, 23);
}

#[tokio::test]
async fn fetcher_sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ua"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings::default());
    let url = format!("{}/ua", server.uri());
    fetcher.fetch(&url).await.expect("fetch ok");

    // The UA contains commas, so compare the raw header rather than a matcher.
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|value| value.to_str().ok());
    assert_eq!(user_agent, Some(BROWSER_USER_AGENT));
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = fetcher_with(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = fetcher_with(settings);
    let url = format!("{}/large", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_unparseable_url() {
    let fetcher = fetcher_with(FetchSettings::default());
    let err = fetcher.fetch("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetch_page_turns_failures_into_warnings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings::default());
    let url = format!("{}/broken", server.uri());

    match fetch_page(&fetcher, &url).await {
        PageFetch::Failed(warning) => {
            assert_eq!(warning.url, url);
            assert!(warning.message.contains("503"), "{}", warning.message);
        }
        other => panic!("expected a failed fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_page_reports_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blank"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings::default());
    let url = format!("{}/blank", server.uri());

    assert_eq!(fetch_page(&fetcher, &url).await, PageFetch::Empty);
}
