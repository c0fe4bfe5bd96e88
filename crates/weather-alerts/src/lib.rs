//! Weather alert normalization.
//!
//! Turns one raw weather-alerts feature collection (the
//! `{ "features": [ { "properties": { ... } } ] }` shape served by weather.gov)
//! into a single [`NormalizationResult`] a banner can render.
//!
//! # Pipeline
//!
//! 1. [`validate`] - classify the payload; only a non-empty `features` array succeeds.
//! 2. [`extract_records`] - map each feature to an [`AlertRecord`], missing fields empty.
//! 3. [`latest_per_alert`] - keep the newest update per alert id (trailing 5 chars).
//! 4. [`SeverityPolicy`] - keep "Severe", "Moderate", and "Extreme" alerts.
//! 5. [`SummaryComposer`] - pick the active alert and compose its toast text.
//!
//! [`Normalizer`] runs all five and never fails: bad input becomes a FAILURE
//! result with `should_display == false`.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let payload = json!({
//!     "title": "Current watches, warnings, and advisories",
//!     "features": [{"properties": {
//!         "id": "urn:oid:2.49.0.1.840.0.f3a.001.1",
//!         "event": "Wind Advisory",
//!         "headline": "Wind Advisory issued January 10 at 9:48AM CST",
//!         "severity": "Moderate",
//!         "sent": "2024-01-10T09:48:00-06:00"
//!     }}]
//! });
//!
//! let result = weather_alerts::normalize(&payload);
//! assert!(result.should_display);
//! assert_eq!(
//!     result.display_text(),
//!     Some("Wind Advisory issued January 10 at 9:48AM CST")
//! );
//! ```

mod bulletin;
mod calendar;
mod config;
mod dedup;
mod error;
mod extractor;
mod normalizer;
mod severity;
mod summary;
mod types;
mod validator;

pub use bulletin::{first_block_body, parse_bulletin};
pub use calendar::{calendar_phrase, parse_sent};
pub use config::{
    ActiveSelection, NormalizerConfig, DEFAULT_ID_SUFFIX_LEN, DEFAULT_UNKNOWN_SUMMARY,
};
pub use dedup::latest_per_alert;
pub use error::{AlertError, CALL_FAILURE_MESSAGE, PARSE_FAILURE_MESSAGE};
pub use extractor::{alert_key, extract_records};
pub use normalizer::Normalizer;
pub use severity::SeverityPolicy;
pub use summary::SummaryComposer;
pub use types::{ActiveSummary, AlertRecord, AlertTone, NormalizationResult, Status};
pub use validator::{validate, FeatureCollection};

/// Normalize a parsed payload with the default config.
pub fn normalize(payload: &serde_json::Value) -> NormalizationResult {
    Normalizer::default().normalize(payload)
}

/// Normalize JSON text with the default config.
pub fn normalize_str(body: &str) -> NormalizationResult {
    Normalizer::default().normalize_str(body)
}
