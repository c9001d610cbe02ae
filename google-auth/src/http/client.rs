//! HTTP client builder shared by the token endpoint and the analytics client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout. `None` keeps reqwest's default of no timeout.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("google-auth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Builder for the `reqwest::Client` used by every component.
///
/// Requests are never retried. When a bearer token is set, every request sent through the
/// built client carries `Authorization: Bearer <token>`.
#[derive(Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
    bearer_token: Option<SecretString>,
}

impl HttpClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: HttpClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Attach a bearer token to all outbound requests.
    pub fn with_bearer_token(mut self, token: SecretString) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// Build the configured HTTP client.
    pub fn build(self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.bearer_token {
            let mut header_value =
                HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
            header_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, header_value);
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(self.config.user_agent)
            .default_headers(headers);

        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}
