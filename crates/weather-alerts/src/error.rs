//! Error types for alert normalization.

use thiserror::Error;

/// Diagnostic reported when the payload cannot be classified as a feature collection.
pub const PARSE_FAILURE_MESSAGE: &str = "Unable to parse API response";

/// Diagnostic reported for any other fault caught at the orchestration boundary.
pub const CALL_FAILURE_MESSAGE: &str = "Unable to call API";

/// Errors that can occur while normalizing a provider payload.
///
/// None of these reach callers of [`crate::normalize`]; they are collapsed into
/// a FAILURE result there.
#[derive(Debug, Error)]
pub enum AlertError {
    /// Top-level shape is wrong (missing, mistyped, or empty feature collection).
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Payload text is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fault raised while processing an otherwise valid payload.
    #[error("Unexpected fault: {0}")]
    Unexpected(String),
}

impl AlertError {
    /// The fixed status message shown for this error.
    pub fn status_message(&self) -> &'static str {
        match self {
            Self::MalformedPayload(_) | Self::Json(_) => PARSE_FAILURE_MESSAGE,
            Self::Unexpected(_) => CALL_FAILURE_MESSAGE,
        }
    }
}
