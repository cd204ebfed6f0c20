/// Error types for lookups and the JavaScript bridge

/// Failure of a single lookup against the discussion API
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Failed to decode listing: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure reported by a chrome.* call on the JavaScript side
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Bridge call {call} failed: {message}")]
pub struct BridgeError {
    pub call: &'static str,
    pub message: String,
}

impl BridgeError {
    pub fn new(call: &'static str, message: impl Into<String>) -> Self {
        BridgeError {
            call,
            message: message.into(),
        }
    }
}
