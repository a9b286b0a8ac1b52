//! Runtime configuration handed from the host page to the front-end.

use serde::{Deserialize, Serialize};

use crate::client::TaskClient;

/// Tasks API used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7204";

/// Configuration injected by the host server into `index.html`.
///
/// Missing fields take their defaults, so an empty object is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrontendConfig {
    pub api_base_url: String,
}

impl FrontendConfig {
    /// `id` of the `<script type="application/json">` element holding the config.
    pub const ELEMENT_ID: &'static str = "task-desk-config";

    /// Parse the config element's text, falling back to defaults when it is malformed.
    pub fn from_json_or_default(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed front-end config: {e}");
            Self::default()
        })
    }

    /// Client for the configured API.
    pub fn client(&self) -> TaskClient {
        TaskClient::new(self.api_base_url.as_str())
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
