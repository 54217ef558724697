/*
[INPUT]:  Error sources (transport, API status, serialization, validation, signing)
[OUTPUT]: Structured error types with stage-specific context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Gnosis Pay SDK
#[derive(Error, Debug)]
pub enum GnosisPayError {
    /// Transport failure (connect, DNS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response with a decodable body
    #[error("API error (status {status}): {message} {error}")]
    Api {
        status: u16,
        message: String,
        error: String,
        code: i64,
    },

    /// API returned an error response whose body could not be decoded
    #[error("API error (status {status})")]
    Status { status: u16 },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Local precondition failed before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Private key or digest rejected by the signing primitive
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Successful response without the expected content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GnosisPayError {
    /// Check if the error is worth retrying by the caller.
    ///
    /// The SDK never retries on its own; a retried authentication must start
    /// over from a fresh nonce.
    pub fn is_retryable(&self) -> bool {
        match self {
            GnosisPayError::Http(_) => true,
            GnosisPayError::Api { status, .. } | GnosisPayError::Status { status } => {
                *status >= 500
            }
            _ => false,
        }
    }

    /// Check if error indicates an authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// HTTP status carried by protocol errors
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GnosisPayError::Api { status, .. } | GnosisPayError::Status { status } => {
                StatusCode::from_u16(*status).ok()
            }
            GnosisPayError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Create an API error from status code and decoded body fields
    pub fn api_error(
        status: StatusCode,
        message: impl Into<String>,
        error: impl Into<String>,
        code: i64,
    ) -> Self {
        GnosisPayError::Api {
            status: status.as_u16(),
            message: message.into(),
            error: error.into(),
            code,
        }
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, GnosisPayError>;
