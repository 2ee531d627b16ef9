use mailsift_logging::sift_debug;
use url::Url;

/// Social-media hosts that never publish a business's own contact page.
pub const DENIED_DOMAINS: &[&str] = &["facebook.com", "twitter.com", "instagram.com"];

/// Screens candidate website URLs before they are fetched.
///
/// A URL is rejected when its authority (userinfo, host and port) *contains* a
/// denied domain, so `notfacebook.com` and `facebook.com@example.org` are
/// rejected along with `www.facebook.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFilter {
    denied: Vec<String>,
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self {
            denied: DENIED_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl UrlFilter {
    /// Default denylist plus `extra` domains (trimmed, lower-cased, blanks dropped).
    pub fn with_extra_domains<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for domain in extra {
            let domain = domain.as_ref().trim().to_ascii_lowercase();
            if !domain.is_empty() && !filter.denied.contains(&domain) {
                filter.denied.push(domain);
            }
        }
        filter
    }

    pub fn denied_domains(&self) -> &[String] {
        &self.denied
    }

    pub fn is_valid(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if parsed.scheme().is_empty() {
            return false;
        }
        match parsed.host_str() {
            Some(host) if !host.is_empty() => {}
            _ => return false,
        }
        let authority = authority(&parsed);
        !self
            .denied
            .iter()
            .any(|domain| authority.contains(domain.as_str()))
    }
}

/// `user:password@host:port`, the part of the URL the denylist is matched against.
fn authority(url: &Url) -> String {
    let mut authority = String::new();
    if !url.username().is_empty() || url.password().is_some() {
        authority.push_str(url.username());
        if let Some(password) = url.password() {
            authority.push(':');
            authority.push_str(password);
        }
        authority.push('@');
    }
    authority.push_str(url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        authority.push(':');
        authority.push_str(&port.to_string());
    }
    authority
}

/// Checks `url` against the default denylist.
pub fn is_valid(url: &str) -> bool {
    UrlFilter::default().is_valid(url)
}

/// Keeps the candidates that pass `filter`, trimmed, in input order.
pub fn screen_candidates<I, S>(filter: &UrlFilter, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref().trim();
            if candidate.is_empty() {
                return None;
            }
            if filter.is_valid(candidate) {
                Some(candidate.to_string())
            } else {
                sift_debug!("Skipping candidate url={}", candidate);
                None
            }
        })
        .collect()
}

/// One candidate per line; blank lines and `#` comments are skipped.
pub fn parse_candidate_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToOwned::to_owned)
        .collect()
}
