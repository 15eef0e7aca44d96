use serde::{Deserialize, Serialize};

/// Default REST Countries API root.
pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v3.1";
/// Default time each hero image stays on screen.
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;

/// Application-level settings persisted under the `settings` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Hero slideshow period in milliseconds.
    pub slide_interval_ms: u64,
    /// API root used to build category endpoints.
    pub api_base_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
