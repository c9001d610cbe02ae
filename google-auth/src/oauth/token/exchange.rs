//! Authorization code exchange.

use log::*;

use super::request::{TokenEndpoint, TokenRequest};
use super::TokenResponse;
use crate::credentials::ClientCredentials;
use crate::error::Error;
use crate::oauth::Endpoints;

/// Exchanges a single-use authorization code for an access/refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenExchanger {
    endpoint: TokenEndpoint,
}

impl TokenExchanger {
    pub fn new(client: reqwest::Client, credentials: ClientCredentials, endpoints: &Endpoints) -> Self {
        Self {
            endpoint: TokenEndpoint::new(client, endpoints.token_url.clone(), credentials),
        }
    }

    /// Exchange authorization code for access and refresh tokens.
    ///
    /// Provider error bodies are returned as [`OAuthErrorKind::Provider`](crate::error::OAuthErrorKind::Provider).
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, Error> {
        let reply = self
            .endpoint
            .post(TokenRequest::AuthorizationCode { code })
            .await?;

        let tokens = TokenResponse::parse(reply.status, &reply.body).map_err(|e| {
            warn!("Google OAuth code exchange failed: {}", e);
            e
        })?;

        info!("Successfully exchanged Google OAuth code for tokens");
        Ok(tokens)
    }

    /// Exchange an authorization code and return the response body verbatim.
    ///
    /// Whatever Google answers, including an error body, is handed back as-is. Only transport
    /// faults are errors.
    pub async fn exchange_code_raw(&self, code: &str) -> Result<String, Error> {
        let reply = self
            .endpoint
            .post(TokenRequest::AuthorizationCode { code })
            .await?;
        Ok(reply.body)
    }
}
