//! The `{success, data, message}` envelope every backend reply is wrapped in.
//!
//! # Design
//! Bodies are parsed straight into `Envelope<T>` for the shape the calling
//! operation expects (`EmployeeRecord`, `Vec<EmployeeRecord>`, or
//! `IgnoredAny` when the payload is irrelevant). When that fails, a second
//! tolerant read looks only at `success` and `message` to decide whether the
//! server rejected the call or sent something unreadable. The same tolerant
//! read backs `error_message`, which turns non-2xx bodies into text.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// Longest body prefix quoted in an error message.
const SNIPPET_CHARS: usize = 100;

const UNKNOWN_ERROR: &str = "Unknown server error";

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// The part of an envelope that is readable whatever `data` contains.
#[derive(Debug, Deserialize)]
struct EnvelopeHead {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

impl EnvelopeHead {
    fn read(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    fn message(self) -> Option<String> {
        match self.message {
            Some(serde_json::Value::String(message)) => Some(message),
            _ => None,
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parses `body` and checks the `success` flag.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        let envelope: Self = match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(err) => {
                return Err(match EnvelopeHead::read(body) {
                    Some(head) if !head.success => ApiError::rejected(head.message()),
                    Some(_) => ApiError::Payload(err.to_string()),
                    None => ApiError::InvalidResponse,
                })
            }
        };
        if !envelope.success {
            return Err(ApiError::rejected(envelope.message));
        }
        Ok(envelope)
    }

    /// Returns the payload; an accepted envelope without one is a
    /// `Payload` error.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Payload("response has no data".to_string()))
    }
}

/// Best-effort message for a failed response body.
///
/// Uses the envelope `message` when the body is JSON, otherwise quotes the
/// first 100 characters of the body. A blank or `null` body has no message.
pub fn error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return UNKNOWN_ERROR.to_string();
    }
    match EnvelopeHead::read(body) {
        Some(head) => head.message().unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        None => format!("Server returned invalid response: {}", snippet(body)),
    }
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(SNIPPET_CHARS) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}
