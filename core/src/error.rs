//! Error type for the karyawan API client.
//!
//! # Design
//! Every failure of an operation surfaces as one `ApiError`. Its `Display`
//! output is the human-readable message callers show; the variants only
//! record where the failure came from (HTTP status, envelope rejection,
//! unparseable body, transport) so callers that care can match on them.

use thiserror::Error;

/// Errors returned by `ResourceClient` operations and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status the operation does not accept.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The envelope carried `success: false`; holds the server's message.
    #[error("{0}")]
    Rejected(String),

    /// The body is not a readable envelope.
    #[error("Invalid API response")]
    InvalidResponse,

    /// The envelope was accepted but `data` does not have the expected shape.
    #[error("invalid response data: {0}")]
    Payload(String),

    /// The request never produced a response (connect failure, timeout,
    /// unreadable body).
    #[error("request failed: {0}")]
    Transport(String),

    /// The request body could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// `update` needs a persisted record.
    #[error("employee record has no id")]
    MissingId,
}

impl ApiError {
    /// HTTP status code carried by the error, if it came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds the error for a rejected envelope, falling back to
    /// `InvalidResponse` when the server gave no message.
    pub(crate) fn rejected(message: Option<String>) -> Self {
        message.map_or(ApiError::InvalidResponse, ApiError::Rejected)
    }
}
