//! Client configuration

use std::time::Duration;

/// Environment variable naming the API base URL
pub const BASE_URL_ENV: &str = "TANDOOR_API_URL";

/// Configuration for connecting to the order-management API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read the base URL from `TANDOOR_API_URL`, falling back to localhost
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| "http://localhost:5000".to_string());
        Self::new(base_url)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

/// Refresh periods for the two polling loops
///
/// Each board owns its timer and tears it down with the view; the kitchen
/// runs tighter than the order lists.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Order board refresh period
    pub order_board: Duration,
    /// Kitchen display refresh period
    pub kitchen: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            order_board: Duration::from_secs(10),
            kitchen: Duration::from_secs(5),
        }
    }
}

impl PollConfig {
    pub fn with_order_board(mut self, period: Duration) -> Self {
        self.order_board = period;
        self
    }

    pub fn with_kitchen(mut self, period: Duration) -> Self {
        self.kitchen = period;
        self
    }
}
