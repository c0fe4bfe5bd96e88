//! Configuration for the normalization pipeline.

use serde::{Deserialize, Serialize};

/// Default number of trailing identifier characters used as the supersession key.
pub const DEFAULT_ID_SUFFIX_LEN: usize = 5;

/// Default summary when an alert carries nothing usable.
pub const DEFAULT_UNKNOWN_SUMMARY: &str = "Weather Alert Info Unknown";

/// Which retained record supplies the active summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSelection {
    /// First record of the retained sequence (oldest `sent`).
    #[default]
    Front,
    /// Last record of the retained sequence (newest `sent`).
    Newest,
}

/// Configuration for [`crate::Normalizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Trailing characters of the provider id kept as the alert identity.
    pub id_suffix_len: usize,
    /// Severity substrings that make an alert display-worthy.
    pub display_severities: Vec<String>,
    /// Summary used when no other fallback tier applies.
    pub unknown_summary: String,
    /// Which end of the retained records drives the summary.
    pub active_selection: ActiveSelection,
}

impl NormalizerConfig {
    /// Create a config with the provider defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supersession key length.
    pub fn with_id_suffix_len(mut self, len: usize) -> Self {
        self.id_suffix_len = len;
        self
    }

    /// Replace the display severity allow-list.
    pub fn with_display_severities<I, S>(mut self, severities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.display_severities = severities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the last-resort summary text.
    pub fn with_unknown_summary(mut self, summary: impl Into<String>) -> Self {
        self.unknown_summary = summary.into();
        self
    }

    /// Choose which retained record drives the summary.
    pub fn with_active_selection(mut self, selection: ActiveSelection) -> Self {
        self.active_selection = selection;
        self
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            id_suffix_len: DEFAULT_ID_SUFFIX_LEN,
            display_severities: vec![
                "Severe".to_string(),
                "Moderate".to_string(),
                "Extreme".to_string(),
            ],
            unknown_summary: DEFAULT_UNKNOWN_SUMMARY.to_string(),
            active_selection: ActiveSelection::Front,
        }
    }
}
