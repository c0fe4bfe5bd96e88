//! Display policy based on severity.

use tracing::debug;

use crate::types::AlertRecord;

/// Substring allow-list deciding which severities are display-worthy.
#[derive(Debug, Clone)]
pub struct SeverityPolicy {
    allowed: Vec<String>,
}

impl SeverityPolicy {
    /// Create a policy from severity substrings. Matching is case-sensitive.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// Check if a severity string contains any allowed substring.
    pub fn allows(&self, severity: &str) -> bool {
        !severity.is_empty() && self.allowed.iter().any(|s| severity.contains(s.as_str()))
    }

    /// Drop records whose severity is not display-worthy, keeping order.
    pub fn filter(&self, records: Vec<AlertRecord>) -> Vec<AlertRecord> {
        let total = records.len();
        let kept: Vec<AlertRecord> = records
            .into_iter()
            .filter(|record| self.allows(&record.severity))
            .collect();

        debug!("Severity policy kept {} of {} alerts", kept.len(), total);
        kept
    }
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self::new(["Severe", "Moderate", "Extreme"])
    }
}
