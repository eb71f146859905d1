//! Shared HTTP transport for intent API calls

use crate::error::ApiErrorResponse;
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A decoded payload together with the raw transport detail of the
/// response it came from.
#[derive(Debug, Clone)]
pub struct RestResponse<T> {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Typed response body
    pub body: T,
}

/// HTTP client for making requests against a DNA Center controller.
///
/// Wraps one `reqwest::Client` (connection pool, timeout) shared by every
/// endpoint service. Calls are stateless; the client is `Clone` and safe
/// to use from multiple tasks.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    /// Create a new REST client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the auth token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the configured base URL (trailing slash trimmed)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request without query parameters
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<RestResponse<T>> {
        self.get_with_query::<T, ()>(path, None).await
    }

    /// Make a GET request, serializing `query` into the URL query string.
    ///
    /// Unset optional fields are omitted from the query string entirely;
    /// a bundle with nothing set produces a URL with no `?` at all.
    pub async fn get_with_query<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> ClientResult<RestResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.header("X-Auth-Token", token);
        }

        debug!(%url, "GET");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx statuses become [`ClientError::Api`], carrying the status,
    /// the decoded error envelope when the body is one, and the raw body
    /// text either way.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<RestResponse<T>> {
        let status = response.status();
        let headers = response.headers().clone();
        debug!(status = %status, "response");

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let error = serde_json::from_slice::<ApiErrorResponse>(&bytes).ok();
            let body = String::from_utf8_lossy(&bytes).to_string();
            return Err(ClientError::Api {
                status,
                error,
                body,
            });
        }

        let body = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        Ok(RestResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let config = ClientConfig::new("https://dnac.example.com/");
        let client = RestClient::new(&config);
        assert_eq!(client.base_url(), "https://dnac.example.com");
    }

    #[test]
    fn token_builder_sets_token() {
        let client = RestClient::new(&ClientConfig::default()).with_token("abc123");
        assert_eq!(client.token(), Some("abc123"));
    }

    #[test]
    fn config_builds_rest_client() {
        let client = ClientConfig::new("https://dnac.example.com")
            .with_timeout(5)
            .build_rest_client();
        assert!(client.token().is_none());
    }
}
