//! Client error types.

use serde::Deserialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::transport::TransportError;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The call was rejected locally before any request was sent.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The transport could not deliver the request or obtain a response.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered, but not with a success envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// The API error carried by this error, if any.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(err) if err.status == 404)
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api(err) if err.status == 401)
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api(err) if err.status == 429)
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api(err) if err.status >= 500)
    }

    /// Check if this error was raised before any network call.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A protocol-level failure: the request was delivered but the server did not
/// report success.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description, e.g. `Received 404 Not Found`.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
    /// HTTP status reason phrase.
    pub reason: String,
    /// Structured error body, when the server sent one.
    pub detail: Option<ErrorDetail>,
}

impl ApiError {
    /// Application error code from the structured error body.
    pub fn code(&self) -> Option<i64> {
        self.detail.as_ref().and_then(|d| d.code)
    }
}

/// Error body of a `FAIL` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Application error code, e.g. `40401`.
    #[serde(default)]
    pub code: Option<i64>,
    /// Short description.
    #[serde(default)]
    pub message: Option<String>,
    /// Additional detail, usually naming the offending parameter.
    #[serde(default)]
    pub message_detail: Option<String>,
}
