//! Normalized alert types handed to UI collaborators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AlertError;

/// One normalized weather-hazard notice.
///
/// Every text field is empty when the provider omitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertRecord {
    /// Trailing characters of the provider id; the supersession key.
    pub id: String,
    pub event: String,
    pub headline: String,
    pub description: String,
    pub instruction: String,
    /// Issue timestamp as sent by the provider.
    pub sent: String,
    /// Provider severity, e.g. "Minor", "Moderate", "Severe", "Extreme".
    pub severity: String,
    pub onset: String,
    pub expires: String,
    pub ends: String,
    /// Message status, "Actual" for real weather.
    pub status: String,
    pub message_type: String,
    pub category: String,
    pub certainty: String,
    pub urgency: String,
    pub response: String,
}

/// Outcome classification of one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// Get the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }
}

/// Banner style token derived from a severity string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTone {
    Danger,
    Warning,
    Info,
    #[default]
    Neutral,
}

impl AlertTone {
    /// Map a provider severity onto a tone. Substring match, strongest first.
    pub fn for_severity(severity: &str) -> Self {
        if severity.contains("Extreme") || severity.contains("Severe") {
            Self::Danger
        } else if severity.contains("Moderate") {
            Self::Warning
        } else if severity.contains("Minor") {
            Self::Info
        } else {
            Self::Neutral
        }
    }
}

/// Top-level display fields taken from the active alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSummary {
    pub event: String,
    pub headline: String,
    pub id: String,
    pub instruction: String,
    /// Composed toast text.
    pub description: String,
    pub tone: AlertTone,
    /// Labeled bulletin blocks (WHAT, WHERE, WHEN, ...) in bulletin order.
    pub blocks: IndexMap<String, String>,
}

/// Final result of normalizing one provider response. Replaced wholesale per poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    pub status: Status,
    /// Provider title on success, fixed diagnostic on failure.
    pub status_message: String,
    /// Deduplicated, filtered records in ascending `sent` order.
    pub records: Vec<AlertRecord>,
    pub active_summary: ActiveSummary,
    /// True iff at least one record survived filtering.
    pub should_display: bool,
}

impl NormalizationResult {
    /// Create a FAILURE result with the given diagnostic.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failure,
            status_message: message.into(),
            records: Vec::new(),
            active_summary: ActiveSummary::default(),
            should_display: false,
        }
    }

    /// Create a FAILURE result for an error caught at the boundary.
    pub fn from_error(err: &AlertError) -> Self {
        Self::failure(err.status_message())
    }

    /// Check if the pass succeeded.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Text the banner should show, if any.
    pub fn display_text(&self) -> Option<&str> {
        self.should_display
            .then_some(self.active_summary.description.as_str())
    }
}
