use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email pattern")
});

/// Distinct email-like substrings in `text`, exactly as matched.
///
/// `None` and `""` both yield an empty set.
pub fn extract(text: Option<&str>) -> BTreeSet<String> {
    match text {
        Some(text) => extract_emails(text),
        None => BTreeSet::new(),
    }
}

pub fn extract_emails(text: &str) -> BTreeSet<String> {
    if text.is_empty() {
        return BTreeSet::new();
    }
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tld_needs_two_letters() {
        assert!(extract_emails("x@y.c").is_empty());
        assert_eq!(
            extract_emails("x@y.co").into_iter().collect::<Vec<_>>(),
            vec!["x@y.co".to_string()]
        );
    }

    #[test]
    fn case_is_preserved() {
        let found = extract_emails("Info@Example.COM info@example.com");
        assert_eq!(found.len(), 2);
        assert!(found.contains("Info@Example.COM"));
    }
}
