//! Access token refresh.

use log::*;

use super::request::{TokenEndpoint, TokenRequest};
use super::TokenResponse;
use crate::credentials::ClientCredentials;
use crate::error::Error;
use crate::oauth::Endpoints;

/// Trades a long-lived refresh token for a fresh access token.
///
/// Google does not rotate refresh tokens: the response carries no new refresh token and the
/// one passed in stays valid until the user revokes access.
#[derive(Debug, Clone)]
pub struct TokenRefresher {
    endpoint: TokenEndpoint,
}

impl TokenRefresher {
    pub fn new(client: reqwest::Client, credentials: ClientCredentials, endpoints: &Endpoints) -> Self {
        Self {
            endpoint: TokenEndpoint::new(client, endpoints.token_url.clone(), credentials),
        }
    }

    /// Refresh an expired access token using the refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, Error> {
        let reply = self
            .endpoint
            .post(TokenRequest::RefreshToken { refresh_token })
            .await?;

        let tokens = TokenResponse::parse(reply.status, &reply.body).map_err(|e| {
            warn!("Google token refresh failed: {}", e);
            e
        })?;

        info!("Successfully refreshed Google access token");
        Ok(tokens)
    }

    /// Refresh and return the response body verbatim.
    pub async fn refresh_raw(&self, refresh_token: &str) -> Result<String, Error> {
        let reply = self
            .endpoint
            .post(TokenRequest::RefreshToken { refresh_token })
            .await?;
        Ok(reply.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, HttpErrorKind, OAuthErrorKind};
    use mockito::{Matcher, Server};
    use secrecy::SecretString;

    const REFRESH_BODY: &str = r#"{"access_token":"T2","expires_in":3920,"token_type":"Bearer"}"#;

    fn refresher_for(token_url: String) -> TokenRefresher {
        let credentials = ClientCredentials::new(
            "client-id".to_string(),
            SecretString::from("client-secret".to_string()),
            "urn:ietf:wg:oauth:2.0:oob".to_string(),
        );
        let endpoints = Endpoints::new("http://unused/auth".to_string(), token_url);
        TokenRefresher::new(reqwest::Client::new(), credentials, &endpoints)
    }

    #[tokio::test]
    async fn test_refresh_sends_exact_form_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/token")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::Exact(
                "client_id=client-id&client_secret=client-secret\
                 &refresh_token=xyz789&grant_type=refresh_token"
                    .to_string(),
            ))
            .with_status(200)
            .with_body(REFRESH_BODY)
            .create_async()
            .await;

        let refresher = refresher_for(format!("{}/token", server.url()));
        let tokens = refresher.refresh("xyz789").await.unwrap();

        mock.assert_async().await;
        assert_eq!(tokens.access_token, "T2");
        assert_eq!(tokens.expires_in, 3920);
        assert!(tokens.refresh_token.is_none());
    }

    #[tokio::test]
    async fn test_refresh_raw_returns_body_unmodified() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/token")
            .match_body(Matcher::UrlEncoded(
                "grant_type".to_string(),
                "refresh_token".to_string(),
            ))
            .with_status(200)
            .with_body(REFRESH_BODY)
            .create_async()
            .await;

        let refresher = refresher_for(format!("{}/token", server.url()));
        assert_eq!(refresher.refresh_raw("xyz789").await.unwrap(), REFRESH_BODY);
    }

    #[tokio::test]
    async fn test_refresh_revoked_token_is_provider_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/token")
            .with_status(400)
            .with_body(r#"{"error":"invalid_grant","error_description":"Token has been expired or revoked."}"#)
            .create_async()
            .await;

        let refresher = refresher_for(format!("{}/token", server.url()));
        let err = refresher.refresh("revoked").await.unwrap_err();

        assert_eq!(
            err.error_kind,
            ErrorKind::OAuth(OAuthErrorKind::Provider {
                status: 400,
                error: "invalid_grant".to_string(),
                description: Some("Token has been expired or revoked.".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_refresh_rejects_empty_token() {
        let refresher = refresher_for("http://127.0.0.1:1/token".to_string());

        let err = refresher.refresh("").await.unwrap_err();
        assert_eq!(err.error_kind, ErrorKind::OAuth(OAuthErrorKind::InvalidInput));
    }

    #[tokio::test]
    async fn test_refresh_unreachable_endpoint_is_transport_error() {
        let refresher = refresher_for("http://127.0.0.1:1/token".to_string());

        let err = refresher.refresh("xyz789").await.unwrap_err();
        assert_eq!(err.error_kind, ErrorKind::Http(HttpErrorKind::Network));

        let err = refresher.refresh_raw("xyz789").await.unwrap_err();
        assert!(err.is_transport());
    }
}
