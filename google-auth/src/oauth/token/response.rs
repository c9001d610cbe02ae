//! Token endpoint response bodies.

use serde::{Deserialize, Serialize};

use crate::error::{oauth_error, Error, ErrorKind, OAuthErrorKind};

/// OAuth token response from Google.
///
/// ```json
/// {
///   "access_token": "ACCESS_TOKEN",
///   "expires_in": 3600,
///   "token_type": "Bearer",
///   "refresh_token": "REFRESH_TOKEN"
/// }
/// ```
///
/// `refresh_token` is only present on the initial code exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Error body returned by the token endpoint, e.g. `{"error": "invalid_grant"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl TokenResponse {
    /// Parse a token endpoint reply into a typed response.
    ///
    /// A non-success status, or a success status whose body carries an `error` field, is
    /// reported as [`OAuthErrorKind::Provider`]. A body that is neither an error nor a bearer
    /// token is reported as [`OAuthErrorKind::InvalidResponse`].
    pub fn parse(status: u16, body: &str) -> Result<Self, Error> {
        if let Ok(provider_error) = serde_json::from_str::<ProviderErrorResponse>(body) {
            return Err(oauth_error(
                OAuthErrorKind::Provider {
                    status,
                    error: provider_error.error,
                    description: provider_error.error_description,
                },
                "token endpoint returned an error",
            ));
        }

        if !(200..300).contains(&status) {
            return Err(oauth_error(
                OAuthErrorKind::Provider {
                    status,
                    error: format!("http_{status}"),
                    description: (!body.is_empty()).then(|| body.to_string()),
                },
                "token endpoint returned a non-success status",
            ));
        }

        let response: TokenResponse = serde_json::from_str(body).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::OAuth(OAuthErrorKind::InvalidResponse),
        })?;

        if !response.token_type.eq_ignore_ascii_case("bearer") {
            return Err(oauth_error(
                OAuthErrorKind::InvalidResponse,
                &format!("unsupported token type: {}", response.token_type),
            ));
        }

        if response.expires_in < 0 {
            return Err(oauth_error(
                OAuthErrorKind::InvalidResponse,
                &format!("negative expires_in: {}", response.expires_in),
            ));
        }

        Ok(response)
    }
}
