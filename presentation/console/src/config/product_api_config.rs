use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the product catalogue API
#[derive(Debug, Clone)]
pub struct ProductApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ProductApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCT_API_URL: Base URL of the catalogue (default: "http://127.0.0.1:8080")
    /// - PRODUCT_API_TIMEOUT_SECS: Per-request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("PRODUCT_API_URL").ok(),
            env::var("PRODUCT_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
