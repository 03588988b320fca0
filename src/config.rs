//! Client configuration

use std::env;
use std::time::Duration;

/// Production API endpoint, used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.workos.com";

/// User-Agent header value sent with every request.
pub const USER_AGENT: &str = concat!("workos-portal/", env!("CARGO_PKG_VERSION"));

/// Default timeout applied to the stock HTTP client.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Portal client configuration.
///
/// Fields are read-only once the client is constructed; the same client is
/// safe to share across tasks.
///
/// # Example
/// ```
/// use workos_portal::ClientConfig;
///
/// let config = ClientConfig::new()
///     .api_key("sk_example_123")
///     .endpoint("https://api.workos.test");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// API key used for the `Authorization: Bearer` header
    pub api_key: Option<String>,

    /// Base endpoint URL; `DEFAULT_ENDPOINT` when unset
    pub endpoint: Option<String>,

    /// Request timeout for the stock HTTP client; 30s when unset
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a configuration from `WORKOS_API_KEY` and `WORKOS_ENDPOINT`.
    ///
    /// Unset variables leave the corresponding field empty, so defaults still
    /// apply.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("WORKOS_API_KEY").ok(),
            endpoint: env::var("WORKOS_ENDPOINT").ok(),
            timeout: None,
        }
    }

    /// The endpoint to send requests to.
    pub(crate) fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}
