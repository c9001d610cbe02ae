//! # google-auth
//!
//! Google OAuth 2.0 installed-app flow plus an authenticated YouTube Analytics client:
//! - Consent URL generation
//! - Authorization code exchange
//! - Access token refresh
//! - Bearer-authenticated report queries
//!
//! Nothing is persisted or refreshed automatically. The caller sequences the flow and keeps
//! the refresh token.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use google_auth::{
//!     credentials::ClientCredentials,
//!     http::HttpClientBuilder,
//!     oauth::{AuthorizationUrlBuilder, Endpoints, TokenExchanger},
//! };
//!
//! let endpoints = Endpoints::default();
//! let url = AuthorizationUrlBuilder::new(credentials.clone(), &endpoints).build();
//! let exchanger = TokenExchanger::new(HttpClientBuilder::new().build()?, credentials, &endpoints);
//! let tokens = exchanger.exchange_code(&code).await?;
//! ```

pub mod analytics;
pub mod credentials;
pub mod error;
pub mod http;
pub mod oauth;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
