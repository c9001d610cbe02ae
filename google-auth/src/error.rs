//! Error types for the `google-auth` crate.
//!
//! Follows the same pattern as the other workspace crates: a root `Error` struct holding an
//! error kind tree plus an optional source for error chaining.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for google-auth crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in google-auth.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    OAuth(OAuthErrorKind),
    Analytics(AnalyticsErrorKind),
    Http(HttpErrorKind),
}

/// Errors from the token endpoint.
#[derive(Debug, PartialEq)]
pub enum OAuthErrorKind {
    /// The caller passed an empty authorization code or refresh token.
    InvalidInput,
    /// Google answered with an OAuth error body (e.g. `invalid_grant`).
    Provider {
        status: u16,
        error: String,
        description: Option<String>,
    },
    /// The body could not be read as a bearer token response.
    InvalidResponse,
}

/// Errors from the YouTube Analytics API.
#[derive(Debug, PartialEq)]
pub enum AnalyticsErrorKind {
    Provider { status: u16, message: String },
    InvalidResponse,
}

/// Transport level failures. These are never retried.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    InvalidHeader,
    Timeout,
    Network,
}

impl Error {
    /// Returns true when the failure happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self.error_kind, ErrorKind::Http(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::OAuth(OAuthErrorKind::Provider {
                status,
                error,
                description: Some(description),
            }) => write!(f, "OAuth error: {error} ({status}): {description}"),
            ErrorKind::OAuth(OAuthErrorKind::Provider { status, error, .. }) => {
                write!(f, "OAuth error: {error} ({status})")
            }
            ErrorKind::OAuth(kind) => write!(f, "OAuth error: {:?}", kind),
            ErrorKind::Analytics(kind) => write!(f, "Analytics error: {:?}", kind),
            ErrorKind::Http(kind) => match &self.source {
                Some(source) => write!(f, "HTTP error: {:?}: {}", kind, source),
                None => write!(f, "HTTP error: {:?}", kind),
            },
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_timeout() {
            ErrorKind::Http(HttpErrorKind::Timeout)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Http(HttpErrorKind::InvalidHeader),
        }
    }
}

/// Helper function to create OAuth errors.
pub fn oauth_error(kind: OAuthErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::OAuth(kind),
    }
}

/// Helper function to create analytics errors.
pub fn analytics_error(kind: AnalyticsErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Analytics(kind),
    }
}
