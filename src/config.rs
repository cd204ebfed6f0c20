/// Panel configuration: API endpoints, search parameters and URL filters
use serde::{Deserialize, Serialize};

/// Key under which user overrides live in chrome.storage.local
pub const CONFIG_STORAGE_KEY: &str = "truth_layer_config";

/// Query parameters that only carry tracking noise
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "ref",
    "ref_src",
    "share_id",
    "si",
    "feature",
];

/// Browser-internal URL prefixes that can never have discussions
pub const UNSUPPORTED_PREFIXES: &[&str] = &["chrome://", "edge://", "about:"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Base of the discussion platform, without trailing slash
    pub api_base: String,
    pub search_limit: u32,
    pub search_sort: String,
    pub tracking_params: Vec<String>,
    pub unsupported_prefixes: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            api_base: "https://www.reddit.com".to_string(),
            search_limit: 15,
            search_sort: "top".to_string(),
            tracking_params: TRACKING_PARAMS.iter().map(|p| p.to_string()).collect(),
            unsupported_prefixes: UNSUPPORTED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl PanelConfig {
    /// Parse a stored override. Fields absent from the JSON keep their defaults.
    pub fn from_json(json: &str) -> Result<PanelConfig, serde_json::Error> {
        let config: PanelConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Strip a trailing slash from the API base so paths can be appended
    pub fn sanitized(mut self) -> PanelConfig {
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn is_tracking_param(&self, name: &str) -> bool {
        self.tracking_params.iter().any(|p| p == name)
    }
}
