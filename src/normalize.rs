/// URL normalization: turns the active tab's URL into a stable search key
use std::fmt;

use url::Url;

use crate::config::PanelConfig;

/// A normalized URL. Two tab URLs that differ only in tracking
/// parameters produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey(String);

impl SearchKey {
    /// Build the key for a tab URL, or `None` when the page can't have
    /// discussions (no URL, or a browser-internal page).
    pub fn from_tab_url(raw: Option<&str>, config: &PanelConfig) -> Option<SearchKey> {
        let raw = raw?;
        if !is_supported_page(raw, config) {
            return None;
        }
        Some(SearchKey(normalize_url(raw, config)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hostname for the status line. `None` when the key isn't a parseable
    /// URL; an empty string for URLs without a host, such as `mailto:`.
    pub fn hostname(&self) -> Option<String> {
        Url::parse(&self.0)
            .ok()
            .map(|url| url.host_str().unwrap_or_default().to_string())
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check whether a URL is a public page worth looking up
pub fn is_supported_page(url: &str, config: &PanelConfig) -> bool {
    !url.is_empty()
        && !config
            .unsupported_prefixes
            .iter()
            .any(|prefix| url.starts_with(prefix.as_str()))
}

/// Strip tracking parameters from a URL
///
/// The remaining query is re-serialized in its original order, and dropped
/// entirely when nothing is left. Anything that doesn't parse as a URL is
/// returned unchanged.
///
/// Examples:
/// - https://example.com/article?utm_source=x&id=1 → https://example.com/article?id=1
/// - https://youtu.be/abc?si=xyz → https://youtu.be/abc
pub fn normalize_url(url: &str, config: &PanelConfig) -> String {
    let mut parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return url.to_string(),
    };

    if parsed.query().is_none() {
        return parsed.to_string();
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(name, _)| !config.is_tracking_param(name))
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(kept);
    }

    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(url: &str) -> String {
        normalize_url(url, &PanelConfig::default())
    }

    #[test]
    fn test_normalize_strips_tracking() {
        assert_eq!(
            normalize("https://example.com/article?utm_source=x&id=1"),
            "https://example.com/article?id=1"
        );
        assert_eq!(
            normalize("https://example.com/a?fbclid=1&gclid=2&ref=hn&ref_src=tw&share_id=s"),
            "https://example.com/a"
        );
        assert_eq!(normalize("https://youtu.be/abc?si=xyz"), "https://youtu.be/abc");
    }

    #[test]
    fn test_normalize_keeps_meaningful_params() {
        assert_eq!(
            normalize("https://www.youtube.com/watch?v=dQw4w9WgXcQ&feature=share"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(normalize("https://example.com/?b=2&a=1"), "https://example.com/?b=2&a=1");
    }

    #[test]
    fn test_normalize_removes_repeated_params() {
        assert_eq!(
            normalize("https://example.com/p?utm_term=a&id=7&utm_term=b"),
            "https://example.com/p?id=7"
        );
    }

    #[test]
    fn test_tracking_variants_share_a_key() {
        let plain = normalize("https://example.com/story?id=a%20b");
        let variants = [
            "https://example.com/story?id=a%20b&utm_source=x",
            "https://example.com/story?utm_medium=social&id=a%20b",
            "https://example.com/story?utm_campaign=c&id=a%20b&utm_content=d&si=q",
        ];

        for variant in variants {
            assert_eq!(normalize(variant), plain, "variant {}", variant);
        }
    }

    #[test]
    fn test_normalize_keeps_fragment_and_path() {
        assert_eq!(
            normalize("https://example.com/docs/page?utm_source=x#section"),
            "https://example.com/docs/page#section"
        );
        assert_eq!(normalize("https://example.com"), "https://example.com/");
    }

    #[test]
    fn test_normalize_fails_open() {
        assert_eq!(normalize("not a url?utm_source=x"), "not a url?utm_source=x");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_unsupported_pages() {
        let config = PanelConfig::default();

        assert!(!is_supported_page("chrome://extensions", &config));
        assert!(!is_supported_page("edge://settings", &config));
        assert!(!is_supported_page("about:blank", &config));
        assert!(!is_supported_page("", &config));
        assert!(is_supported_page("https://example.com", &config));

        assert_eq!(SearchKey::from_tab_url(None, &config), None);
        assert_eq!(SearchKey::from_tab_url(Some("chrome://extensions"), &config), None);
    }

    #[test]
    fn test_search_key_hostname() {
        let config = PanelConfig::default();

        let key = SearchKey::from_tab_url(Some("https://News.Example.com:8443/a?utm_source=x"), &config).unwrap();
        assert_eq!(key.as_str(), "https://news.example.com:8443/a");
        assert_eq!(key.hostname().as_deref(), Some("news.example.com"));

        let opaque = SearchKey::from_tab_url(Some("plain text"), &config).unwrap();
        assert_eq!(opaque.as_str(), "plain text");
        assert_eq!(opaque.hostname(), None);

        let hostless = SearchKey::from_tab_url(Some("mailto:someone@example.com"), &config).unwrap();
        assert_eq!(hostless.hostname().as_deref(), Some(""));
    }
}
