//! Application configuration. Analysis endpoint, timeouts, mock mode.

use serde::Deserialize;
use std::time::Duration;

/// Base URL of the analysis service when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Simulated latency of the mock analysis client.
pub const DEFAULT_MOCK_DELAY_MS: u64 = 100;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Analysis service base URL; `/analyze` is appended. Read from WELLNESS_API_BASE_URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Optional request timeout in seconds. Unset means no timeout. Read from
    /// WELLNESS_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Mock analysis
    // ─────────────────────────────────────────────────────────────────────────
    /// Use the offline mock instead of the HTTP client. Read from WELLNESS_MOCK_ANALYSIS.
    #[serde(default)]
    pub mock_analysis: Option<bool>,

    /// Mock latency in ms (default 100). Read from WELLNESS_MOCK_DELAY_MS.
    #[serde(default)]
    pub mock_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("WELLNESS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("WELLNESS").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the analysis base URL. Defaults to http://127.0.0.1:5000.
    pub fn api_base_url_or_default(&self) -> String {
        self.api_base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Returns the request timeout, if one is configured. Zero counts as unset.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Returns true if the mock analysis client should be used.
    pub fn is_mock_analysis(&self) -> bool {
        self.mock_analysis.unwrap_or(false)
    }

    /// Returns mock latency in milliseconds. Defaults to DEFAULT_MOCK_DELAY_MS.
    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(DEFAULT_MOCK_DELAY_MS)
    }
}
