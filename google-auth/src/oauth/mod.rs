//! OAuth 2.0 installed-app flow against Google.
//!
//! The components are independent entry points. The caller owns the sequencing:
//! consent URL, code exchange, API calls with the access token, refresh on expiry.

mod authorization;
mod endpoints;

pub mod scope;
pub mod token;

pub use authorization::AuthorizationUrlBuilder;
pub use endpoints::{Endpoints, DEFAULT_AUTH_URL, DEFAULT_TOKEN_URL};
pub use token::{TokenExchanger, TokenRefresher, TokenResponse, Tokens};
