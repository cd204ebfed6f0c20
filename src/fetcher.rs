/// Discussion lookups: builds the two Reddit queries, runs them together
/// and merges what comes back.

use futures_util::future::join;
use url::Url;

use crate::config::PanelConfig;
use crate::error::FetchError;
use crate::normalize::SearchKey;
use crate::results::ResultSet;
use crate::thread::{Listing, Thread};

/// Something that can GET a listing. `RedditClient` in the browser,
/// stubs in tests.
#[allow(async_fn_in_trait)]
pub trait DiscussionApi {
    async fn fetch_listing(&self, url: Url) -> Result<Listing, FetchError>;
}

/// Unauthenticated client for the public JSON endpoints
#[derive(Debug, Clone, Default)]
pub struct RedditClient {
    http: reqwest::Client,
}

impl RedditClient {
    pub fn new() -> Self {
        RedditClient::default()
    }
}

impl DiscussionApi for RedditClient {
    async fn fetch_listing(&self, url: Url) -> Result<Listing, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Exact-match lookup: posts whose link is this URL
pub fn info_url(key: &SearchKey, config: &PanelConfig) -> Result<Url, FetchError> {
    let endpoint = format!("{}/api/info.json", config.api_base);
    Ok(Url::parse_with_params(&endpoint, &[("url", key.as_str())])?)
}

/// Full-text search for the quoted URL
pub fn search_url(key: &SearchKey, config: &PanelConfig) -> Result<Url, FetchError> {
    let endpoint = format!("{}/search.json", config.api_base);
    let params = [
        ("q", format!("url:\"{}\"", key)),
        ("sort", config.search_sort.clone()),
        ("limit", config.search_limit.to_string()),
    ];
    Ok(Url::parse_with_params(&endpoint, &params)?)
}

/// Run both lookups concurrently and return the merged threads, best first.
///
/// Each lookup fails on its own: a failed source is logged and simply
/// contributes nothing. No results at all is a valid outcome, not an error.
pub async fn search_discussions<A: DiscussionApi>(api: &A, key: &SearchKey, config: &PanelConfig) -> Vec<Thread> {
    let requests = info_url(key, config).and_then(|info| Ok((info, search_url(key, config)?)));
    let (info, search) = match requests {
        Ok(requests) => requests,
        Err(e) => {
            log::warn!("Fetch failed: {}", e);
            return Vec::new();
        }
    };

    let (info_outcome, search_outcome) = join(api.fetch_listing(info), api.fetch_listing(search)).await;

    let mut results = ResultSet::new();
    for (source, outcome) in [("info", info_outcome), ("search", search_outcome)] {
        match outcome {
            Ok(listing) => {
                let added = results.extend(listing.into_threads());
                log::debug!("{} lookup added {} threads", source, added);
            }
            Err(e) => log::warn!("{} lookup failed: {}", source, e),
        }
    }

    log::info!("Truth Layer checked: {} ({} threads)", key, results.len());
    results.into_ranked()
}
