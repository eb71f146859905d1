//! Client configuration

/// Client configuration for connecting to a DNA Center controller
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Controller base URL (e.g., "https://sandboxdnac.cisco.com")
    pub base_url: String,

    /// Pre-issued X-Auth-Token value. Session management is owned by the
    /// caller; this client only forwards the token on each request.
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the auth token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a REST client from this configuration
    pub fn build_rest_client(&self) -> super::RestClient {
        super::RestClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("https://localhost")
    }
}
