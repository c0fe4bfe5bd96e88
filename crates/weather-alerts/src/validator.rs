//! Top-level payload classification.

use serde_json::Value;
use tracing::debug;

use crate::error::AlertError;

/// A payload that passed validation: a non-empty feature list plus the provider title.
#[derive(Debug, Clone, Copy)]
pub struct FeatureCollection<'a> {
    pub features: &'a [Value],
    pub title: &'a str,
}

/// Classify a raw payload as a usable feature collection.
///
/// Succeeds only when `features` is a non-empty array. A missing or non-string
/// `title` is treated as empty.
pub fn validate(payload: &Value) -> Result<FeatureCollection<'_>, AlertError> {
    let object = payload
        .as_object()
        .ok_or_else(|| AlertError::MalformedPayload("payload is not an object".to_string()))?;

    let features = object
        .get("features")
        .ok_or_else(|| AlertError::MalformedPayload("missing features".to_string()))?
        .as_array()
        .ok_or_else(|| AlertError::MalformedPayload("features is not an array".to_string()))?;

    if features.is_empty() {
        return Err(AlertError::MalformedPayload("features is empty".to_string()));
    }

    let title = object.get("title").and_then(Value::as_str).unwrap_or_default();

    debug!("Validated payload with {} features", features.len());

    Ok(FeatureCollection { features, title })
}
