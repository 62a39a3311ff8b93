//! Client configuration.

/// Upstream serving `/recipes/{id}` and `/users/{id}`.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
