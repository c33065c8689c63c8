//! Client configuration.

use std::time::Duration;

/// Server root the karyawan resource lives under.
pub const DEFAULT_BASE_URL: &str = "http://localhost/application-tier-php/public";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings owned by a `ResourceClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root without a trailing slash; the client appends `/karyawan`.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Upper bound for a whole request/response cycle.
    pub request_timeout: Duration,
    /// Print raw response bodies of write operations to stdout.
    pub echo_responses: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            echo_responses: true,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_echo(mut self, echo_responses: bool) -> Self {
        self.echo_responses = echo_responses;
        self
    }
}
