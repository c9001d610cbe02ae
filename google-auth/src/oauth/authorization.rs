//! Consent URL generation.

use super::endpoints::Endpoints;
use super::scope::{join_scopes, DEFAULT_SCOPES};
use crate::credentials::ClientCredentials;

/// Builds the URL a user visits to grant access to the requested APIs.
///
/// If the user consents, Google hands them an authorization code which is then passed to
/// [`TokenExchanger`](super::token::TokenExchanger).
#[derive(Debug, Clone)]
pub struct AuthorizationUrlBuilder {
    credentials: ClientCredentials,
    auth_url: String,
    scopes: Vec<String>,
}

impl AuthorizationUrlBuilder {
    /// Create a builder requesting the YouTube Analytics read-only scopes.
    pub fn new(credentials: ClientCredentials, endpoints: &Endpoints) -> Self {
        Self {
            credentials,
            auth_url: endpoints.auth_url.clone(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the requested scopes.
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Generate the OAuth authorization URL for user consent.
    ///
    /// Output is byte-identical for identical configuration.
    pub fn build(&self) -> String {
        let scope = join_scopes(&self.scopes);

        format!(
            "{}?\
            scope={}&\
            redirect_uri={}&\
            response_type=code&\
            client_id={}",
            self.auth_url,
            urlencoding::encode(&scope),
            urlencoding::encode(self.credentials.redirect_uri()),
            urlencoding::encode(self.credentials.client_id()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use std::collections::HashMap;
    use url::Url;

    fn test_credentials() -> ClientCredentials {
        ClientCredentials::new(
            "client-123.apps.googleusercontent.com".to_string(),
            SecretString::from("secret".to_string()),
            "http://localhost:8080/oauth/callback".to_string(),
        )
    }

    fn query_params(url: &str) -> HashMap<String, String> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_authorization_url_is_deterministic() {
        let builder = AuthorizationUrlBuilder::new(test_credentials(), &Endpoints::default());

        assert_eq!(builder.build(), builder.build());
        assert!(builder
            .build()
            .starts_with("https://accounts.google.com/o/oauth2/auth?"));
    }

    #[test]
    fn test_scope_decodes_to_single_space_separated_value() {
        let url = AuthorizationUrlBuilder::new(test_credentials(), &Endpoints::default()).build();
        let params = query_params(&url);

        assert_eq!(
            params.get("scope").map(String::as_str),
            Some(
                "https://www.googleapis.com/auth/yt-analytics.readonly \
                 https://www.googleapis.com/auth/yt-analytics-monetary.readonly"
            )
        );
        // The scope is encoded once, so no escaped percent signs can appear.
        assert!(!url.contains("%25"));
        assert!(url.contains("yt-analytics.readonly%20https%3A%2F%2F"));
    }

    #[test]
    fn test_authorization_url_contains_required_parameters() {
        let url = AuthorizationUrlBuilder::new(test_credentials(), &Endpoints::default()).build();
        let params = query_params(&url);

        assert_eq!(params.len(), 4);
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "client-123.apps.googleusercontent.com");
        assert_eq!(params["redirect_uri"], "http://localhost:8080/oauth/callback");
    }

    #[test]
    fn test_authorization_url_uses_configured_endpoint_and_scopes() {
        let endpoints = Endpoints::new(
            "http://127.0.0.1:9999/auth".to_string(),
            "http://127.0.0.1:9999/token".to_string(),
        );
        let url = AuthorizationUrlBuilder::new(test_credentials(), &endpoints)
            .with_scopes(vec!["openid".to_string(), "email".to_string()])
            .build();

        assert!(url.starts_with("http://127.0.0.1:9999/auth?"));
        assert_eq!(query_params(&url)["scope"], "openid email");
    }
}
