use mailsift_engine::decode_page;
use pretty_assertions::assert_eq;

#[test]
fn decode_respects_charset_header() {
    let bytes = b"caf\xe9 info@caf\xe9-sol.es";
    let decoded = decode_page(bytes, Some("text/html; Charset=\"ISO-8859-1\""));
    assert_eq!(decoded.text, "café info@café-sol.es");
    assert!(
        decoded.encoding_label.eq_ignore_ascii_case("ISO-8859-1")
            || decoded.encoding_label.eq_ignore_ascii_case("windows-1252")
    );
    assert!(!decoded.lossy);
}

#[test]
fn decode_handles_utf8_bom() {
    let bytes = b"\xEF\xBB\xBFhello";
    let decoded = decode_page(bytes, Some("text/html; charset=windows-1252"));
    assert_eq!(decoded.text, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn decode_guesses_plain_utf8_without_hints() {
    let decoded = decode_page("contacto: señal@example.es".as_bytes(), None);
    assert_eq!(decoded.text, "contacto: señal@example.es");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn broken_bytes_are_replaced_not_rejected() {
    let decoded = decode_page(b"ok \xff\xfe\xfd a@b.co", Some("text/html; charset=utf-8"));
    assert!(decoded.lossy);
    assert!(decoded.text.ends_with("a@b.co"));
}
