/// Data structures for discussion threads returned by the Reddit API
use serde::{Deserialize, Serialize};

/// One discussion thread. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thread {
    pub id: String,
    pub subreddit: String,
    pub title: String,
    /// Seconds since the Unix epoch
    pub created_utc: f64,
    pub score: i64,
    pub num_comments: i64,
    /// Path relative to the API base, e.g. "/r/rust/comments/abc/title/"
    pub permalink: String,
    pub thumbnail: Option<String>,
}

impl Thread {
    /// Thumbnail URL, if it points at a fetchable image.
    /// Reddit uses placeholders such as "self", "default" or "nsfw".
    pub fn image_url(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .filter(|thumb| thumb.starts_with("http"))
    }
}

/// Response shape shared by `/api/info.json` and `/search.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub data: Option<ListingData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingChild {
    pub data: Thread,
}

impl Listing {
    pub fn into_threads(self) -> Vec<Thread> {
        self.data
            .map(|data| data.children.into_iter().map(|child| child.data).collect())
            .unwrap_or_default()
    }
}
