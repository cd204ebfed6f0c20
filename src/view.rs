/// View model for the side panel: plain data, rendered by `ui`
use url::Url;

use crate::config::PanelConfig;
use crate::normalize::SearchKey;
use crate::thread::Thread;

pub const UNSUPPORTED_PAGE_MESSAGE: &str = "Open a public webpage to see discussions.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to Reddit.";

/// Everything the panel shows: the status line and the results area
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub status: String,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Loading,
    Message { kind: MessageKind, text: String },
    Empty { checked: String, submit_url: String },
    Threads(Vec<ThreadCard>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Neutral,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Neutral => "neutral",
            MessageKind::Error => "error",
        }
    }
}

/// One thread, ready to display
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadCard {
    pub id: String,
    pub community: String,
    /// Seconds since the Unix epoch; formatted in the user's locale by the renderer
    pub created_utc: f64,
    pub thumbnail: Option<String>,
    pub title: String,
    pub score: String,
    pub comments: String,
    pub link: String,
}

impl ThreadCard {
    pub fn from_thread(thread: Thread, config: &PanelConfig) -> ThreadCard {
        ThreadCard {
            community: format!("r/{}", thread.subreddit),
            created_utc: thread.created_utc,
            thumbnail: thread.image_url().map(str::to_string),
            score: format_count(thread.score),
            comments: format_count(thread.num_comments),
            link: format!("{}{}", config.api_base, thread.permalink),
            title: thread.title,
            id: thread.id,
        }
    }
}

impl PanelView {
    pub fn loading(hostname: &str) -> PanelView {
        PanelView {
            status: format!("Searching: {}...", hostname),
            body: PanelBody::Loading,
        }
    }

    pub fn message(kind: MessageKind, text: impl Into<String>) -> PanelView {
        PanelView {
            status: "Done.".to_string(),
            body: PanelBody::Message {
                kind,
                text: text.into(),
            },
        }
    }

    pub fn unsupported_page() -> PanelView {
        PanelView::message(MessageKind::Neutral, UNSUPPORTED_PAGE_MESSAGE)
    }

    pub fn connection_error() -> PanelView {
        PanelView::message(MessageKind::Error, CONNECTION_ERROR_MESSAGE)
    }

    /// Empty or populated view for a finished search
    pub fn results(key: &SearchKey, threads: Vec<Thread>, config: &PanelConfig) -> PanelView {
        if threads.is_empty() {
            return PanelView {
                status: "No results.".to_string(),
                body: PanelBody::Empty {
                    checked: key.to_string(),
                    submit_url: submit_url(key, config),
                },
            };
        }

        PanelView {
            status: format!("Found {} discussions.", threads.len()),
            body: PanelBody::Threads(
                threads
                    .into_iter()
                    .map(|thread| ThreadCard::from_thread(thread, config))
                    .collect(),
            ),
        }
    }
}

impl Default for PanelView {
    fn default() -> Self {
        PanelView {
            status: "Searching...".to_string(),
            body: PanelBody::Loading,
        }
    }
}

/// Link that opens the submit form pre-filled with the checked URL
pub fn submit_url(key: &SearchKey, config: &PanelConfig) -> String {
    let endpoint = format!("{}/submit", config.api_base);
    match Url::parse_with_params(&endpoint, &[("url", key.as_str())]) {
        Ok(url) => url.to_string(),
        Err(_) => endpoint,
    }
}

/// Compact count: 950 → "950", 1500 → "1.5k", 12000 → "12.0k".
///
/// Thousands are rounded to the nearest tenth of the `f64` value, so 1150
/// (stored as 1.1499...) gives "1.1k". Exact halves such as 1250 round up.
pub fn format_count(n: i64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    // n / 1000 is exactly representable only at .25 and .75
    if n % 500 == 250 {
        let tenths = n / 100 + 1;
        return format!("{}.{}k", tenths / 10, tenths % 10);
    }
    format!("{:.1}k", n as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(url: &str) -> SearchKey {
        SearchKey::from_tab_url(Some(url), &PanelConfig::default()).unwrap()
    }

    fn create_test_thread(id: &str, score: i64) -> Thread {
        Thread {
            id: id.to_string(),
            subreddit: "rust".to_string(),
            title: format!("Thread {}", id),
            created_utc: 1698508200.0,
            score,
            num_comments: 3,
            permalink: format!("/r/rust/comments/{}/", id),
            thumbnail: Some("default".to_string()),
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.0k");
        assert_eq!(format_count(1500), "1.5k");
        assert_eq!(format_count(1250), "1.3k");
        assert_eq!(format_count(1750), "1.8k");
        assert_eq!(format_count(1150), "1.1k");
        assert_eq!(format_count(12000), "12.0k");
        assert_eq!(format_count(99960), "100.0k");
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(-1500), "-1500");
    }

    #[test]
    fn test_format_count_extremes() {
        assert_eq!(format_count(i64::MIN), i64::MIN.to_string());
        assert!(format_count(i64::MAX).ends_with('k'));
        assert_eq!(format_count(9_999_250), "9999.3k");
    }

    #[test]
    fn test_loading_view() {
        let view = PanelView::loading("www.example.com");

        assert_eq!(view.status, "Searching: www.example.com...");
        assert_eq!(view.body, PanelBody::Loading);
    }

    #[test]
    fn test_empty_view() {
        let config = PanelConfig::default();
        let view = PanelView::results(&key("https://example.com/a?id=1"), Vec::new(), &config);

        assert_eq!(view.status, "No results.");
        assert_eq!(
            view.body,
            PanelBody::Empty {
                checked: "https://example.com/a?id=1".to_string(),
                submit_url: "https://www.reddit.com/submit?url=https%3A%2F%2Fexample.com%2Fa%3Fid%3D1".to_string(),
            }
        );
    }

    #[test]
    fn test_populated_view() {
        let config = PanelConfig::default();
        let threads = vec![create_test_thread("a", 12000), create_test_thread("b", 7)];

        let view = PanelView::results(&key("https://example.com/"), threads, &config);

        assert_eq!(view.status, "Found 2 discussions.");
        let PanelBody::Threads(cards) = view.body else {
            panic!("expected thread cards");
        };
        assert_eq!(cards[0].community, "r/rust");
        assert_eq!(cards[0].score, "12.0k");
        assert_eq!(cards[0].comments, "3");
        assert_eq!(cards[0].link, "https://www.reddit.com/r/rust/comments/a/");
        assert_eq!(cards[0].thumbnail, None);
        assert_eq!(cards[1].title, "Thread b");
    }

    #[test]
    fn test_message_views() {
        let unsupported = PanelView::unsupported_page();
        assert_eq!(unsupported.status, "Done.");
        assert_eq!(
            unsupported.body,
            PanelBody::Message {
                kind: MessageKind::Neutral,
                text: UNSUPPORTED_PAGE_MESSAGE.to_string(),
            }
        );

        let error = PanelView::connection_error();
        assert_eq!(error.status, "Done.");
        assert!(matches!(error.body, PanelBody::Message { kind: MessageKind::Error, .. }));
        assert_eq!(MessageKind::Error.css_class(), "error");
    }
}
