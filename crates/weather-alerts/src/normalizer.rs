//! Pipeline orchestration from raw payload to [`NormalizationResult`].

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::NormalizerConfig;
use crate::dedup::latest_per_alert;
use crate::error::AlertError;
use crate::extractor::extract_records;
use crate::severity::SeverityPolicy;
use crate::summary::SummaryComposer;
use crate::types::{NormalizationResult, Status};
use crate::validator::validate;

/// Runs validation, extraction, supersession, severity filtering, and
/// summary composition over one provider response.
///
/// Holds no per-response state; one instance can serve every poll.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    policy: SeverityPolicy,
    composer: SummaryComposer,
}

impl Normalizer {
    /// Create a normalizer with the given config.
    pub fn new(config: NormalizerConfig) -> Self {
        let policy = SeverityPolicy::new(config.display_severities.iter().cloned());
        let composer = SummaryComposer::new(&config);
        Self {
            config,
            policy,
            composer,
        }
    }

    /// Get the active config.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a parsed payload, rendering issue times in the local zone.
    pub fn normalize(&self, payload: &Value) -> NormalizationResult {
        self.normalize_at(payload, Local::now())
    }

    /// Normalize JSON text. Invalid JSON is a FAILURE like any other bad shape.
    pub fn normalize_str(&self, body: &str) -> NormalizationResult {
        match serde_json::from_str::<Value>(body) {
            Ok(payload) => self.normalize(&payload),
            Err(e) => {
                let err = AlertError::from(e);
                warn!("Weather alert payload rejected: {}", err);
                NormalizationResult::from_error(&err)
            }
        }
    }

    /// Normalize a parsed payload against a given reference time and zone.
    ///
    /// Never fails: every error, and any panic raised while processing, is
    /// downgraded to a FAILURE result with `should_display == false`.
    pub fn normalize_at<Tz>(&self, payload: &Value, now: DateTime<Tz>) -> NormalizationResult
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run(payload, &now)))
            .unwrap_or_else(|cause| Err(AlertError::Unexpected(panic_message(cause.as_ref()))));

        match outcome {
            Ok(result) => result,
            Err(e) => {
                warn!("Weather alert payload rejected: {}", e);
                NormalizationResult::from_error(&e)
            }
        }
    }

    fn run<Tz>(&self, payload: &Value, now: &DateTime<Tz>) -> Result<NormalizationResult, AlertError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let collection = validate(payload)?;
        let extracted = extract_records(collection.features, self.config.id_suffix_len);
        let latest = latest_per_alert(extracted);
        let records = self.policy.filter(latest);
        let active_summary = self.composer.compose(&records, now);
        let should_display = !records.is_empty();

        debug!(
            "Normalized {} features into {} displayable alerts",
            collection.features.len(),
            records.len()
        );

        Ok(NormalizationResult {
            status: Status::Success,
            status_message: collection.title.to_string(),
            records,
            active_summary,
            should_display,
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(msg) = cause.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = cause.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
