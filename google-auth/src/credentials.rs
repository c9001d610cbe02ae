//! OAuth client credentials issued by the Google Cloud console.

use secrecy::{ExposeSecret, SecretString};

/// Installed-app client credentials.
///
/// Built once from configuration and shared read-only by every component. The secret is
/// only ever exposed when a token request body is assembled.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: SecretString,
    redirect_uri: String,
}

impl ClientCredentials {
    /// Create client credentials.
    ///
    /// # Arguments
    ///
    /// * `client_id` - Google OAuth client ID
    /// * `client_secret` - Google OAuth client secret
    /// * `redirect_uri` - Redirect URI registered for the client
    pub fn new(client_id: String, client_secret: SecretString, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}
