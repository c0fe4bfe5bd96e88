//! Display summary for the active alert.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::bulletin::{first_block_body, parse_bulletin};
use crate::calendar::calendar_phrase;
use crate::config::{ActiveSelection, NormalizerConfig};
use crate::types::{ActiveSummary, AlertRecord, AlertTone};

/// Builds the [`ActiveSummary`] from retained, filtered records.
#[derive(Debug, Clone)]
pub struct SummaryComposer {
    unknown_summary: String,
    selection: ActiveSelection,
}

impl SummaryComposer {
    /// Create a composer from the pipeline config.
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            unknown_summary: config.unknown_summary.clone(),
            selection: config.active_selection,
        }
    }

    /// Pick the active record according to the configured selection.
    pub fn active<'a>(&self, records: &'a [AlertRecord]) -> Option<&'a AlertRecord> {
        match self.selection {
            ActiveSelection::Front => records.first(),
            ActiveSelection::Newest => records.last(),
        }
    }

    /// Compose the summary. An empty record list yields an all-empty summary.
    pub fn compose<Tz>(&self, records: &[AlertRecord], now: &DateTime<Tz>) -> ActiveSummary
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(record) = self.active(records) else {
            return ActiveSummary::default();
        };

        ActiveSummary {
            event: record.event.clone(),
            headline: record.headline.clone(),
            id: record.id.clone(),
            instruction: record.instruction.clone(),
            description: self.describe(record, now),
            tone: AlertTone::for_severity(&record.severity),
            blocks: parse_bulletin(&record.description).unwrap_or_default(),
        }
    }

    /// Toast text for one record, first matching tier wins:
    /// headline, first bulletin block, full description, synthesized
    /// "{severity} {event} issued at {time}", then the unknown placeholder.
    pub fn describe<Tz>(&self, record: &AlertRecord, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if !record.headline.is_empty() {
            debug!("Alert {} summarized by headline", record.id);
            return record.headline.clone();
        }

        if let Some(body) = first_block_body(&record.description) {
            debug!("Alert {} summarized by bulletin block", record.id);
            return body.to_string();
        }

        if !record.description.is_empty() {
            debug!("Alert {} summarized by description", record.id);
            return record.description.clone();
        }

        if !record.event.is_empty() && !record.sent.is_empty() && !record.severity.is_empty() {
            debug!("Alert {} summarized from event metadata", record.id);
            return format!(
                "{} {} issued at {}",
                record.severity,
                record.event,
                calendar_phrase(&record.sent, now)
            );
        }

        debug!("Alert {} has no usable summary fields", record.id);
        self.unknown_summary.clone()
    }
}

impl Default for SummaryComposer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}
