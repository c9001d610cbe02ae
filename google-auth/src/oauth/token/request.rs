//! Form-encoded requests against the Google token endpoint.

use log::*;

use crate::credentials::ClientCredentials;
use crate::error::{oauth_error, Error, OAuthErrorKind};

/// The two grants this client sends to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRequest<'a> {
    AuthorizationCode { code: &'a str },
    RefreshToken { refresh_token: &'a str },
}

impl<'a> TokenRequest<'a> {
    pub fn grant_type(&self) -> &'static str {
        match self {
            TokenRequest::AuthorizationCode { .. } => "authorization_code",
            TokenRequest::RefreshToken { .. } => "refresh_token",
        }
    }

    /// Fields of the `application/x-www-form-urlencoded` body, in send order.
    ///
    /// The refresh grant carries neither `code` nor `redirect_uri`.
    pub fn form_fields<'c>(&self, credentials: &'c ClientCredentials) -> Vec<(&'static str, &'c str)>
    where
        'a: 'c,
    {
        match *self {
            TokenRequest::AuthorizationCode { code } => vec![
                ("code", code),
                ("client_id", credentials.client_id()),
                ("client_secret", credentials.client_secret()),
                ("redirect_uri", credentials.redirect_uri()),
                ("grant_type", self.grant_type()),
            ],
            TokenRequest::RefreshToken { refresh_token } => vec![
                ("client_id", credentials.client_id()),
                ("client_secret", credentials.client_secret()),
                ("refresh_token", refresh_token),
                ("grant_type", self.grant_type()),
            ],
        }
    }

    fn input(&self) -> &str {
        match *self {
            TokenRequest::AuthorizationCode { code } => code,
            TokenRequest::RefreshToken { refresh_token } => refresh_token,
        }
    }
}

/// Raw reply from the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReply {
    pub status: u16,
    pub body: String,
}

/// Shared POST plumbing for [`TokenExchanger`](super::TokenExchanger) and
/// [`TokenRefresher`](super::TokenRefresher).
#[derive(Debug, Clone)]
pub(crate) struct TokenEndpoint {
    client: reqwest::Client,
    token_url: String,
    credentials: ClientCredentials,
}

impl TokenEndpoint {
    pub(crate) fn new(client: reqwest::Client, token_url: String, credentials: ClientCredentials) -> Self {
        Self {
            client,
            token_url,
            credentials,
        }
    }

    /// POST the grant and return status and body untouched.
    ///
    /// Only transport faults are errors here; provider error bodies come back as a reply.
    pub(crate) async fn post(&self, request: TokenRequest<'_>) -> Result<TokenReply, Error> {
        if request.input().is_empty() {
            return Err(oauth_error(
                OAuthErrorKind::InvalidInput,
                &format!("{} grant requires a non-empty value", request.grant_type()),
            ));
        }

        debug!(
            "Requesting Google OAuth token with grant_type={}",
            request.grant_type()
        );

        let response = self
            .client
            .post(&self.token_url)
            .form(&request.form_fields(&self.credentials))
            .send()
            .await
            .map_err(|e| {
                warn!(
                    "Failed to reach Google token endpoint for grant_type={}: {:?}",
                    request.grant_type(),
                    e
                );
                Error::from(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read Google token response body: {:?}", e);
            Error::from(e)
        })?;

        debug!("Google token endpoint answered with status {}", status);

        Ok(TokenReply { status, body })
    }
}
