//! Google OAuth endpoint URLs.

/// Consent page users are sent to.
pub const DEFAULT_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
/// Token endpoint for both the code exchange and the refresh grant.
pub const DEFAULT_TOKEN_URL: &str = "https://www.googleapis.com/oauth2/v3/token";

/// Configuration for Google OAuth URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth_url: String,
    pub token_url: String,
}

impl Endpoints {
    pub fn new(auth_url: String, token_url: String) -> Self {
        Self {
            auth_url,
            token_url,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}
