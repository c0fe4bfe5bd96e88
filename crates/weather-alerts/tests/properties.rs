//! Property-based tests for the normalization pipeline.

use chrono::{DateTime, FixedOffset};
use proptest::prelude::*;
use serde_json::{json, Value};
use weather_alerts::{Normalizer, SeverityPolicy, Status};

fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-01-10T15:00:00-05:00").unwrap()
}

fn severity_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Minor".to_string()),
        Just("Moderate".to_string()),
        Just("Severe".to_string()),
        Just("Extreme".to_string()),
        Just("Unknown".to_string()),
        Just(String::new()),
        "[A-Za-z ]{0,12}",
    ]
}

/// Feature with an id drawn from a small pool so supersession actually happens.
fn feature_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-z]{0,4}",
        0u8..4,
        1u32..28,
        0u32..24,
        severity_strategy(),
        prop::option::of("[A-Za-z ]{1,20}"),
    )
        .prop_map(|(prefix, key, day, hour, severity, headline)| {
            json!({
                "properties": {
                    "id": format!("urn:oid:{}.0000{}", prefix, key),
                    "sent": format!("2024-01-{:02}T{:02}:00:00Z", day, hour),
                    "severity": severity,
                    "event": "Wind Advisory",
                    "headline": headline,
                }
            })
        })
}

fn payload_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(feature_strategy(), 1..12).prop_map(|features| json!({ "features": features }))
}

proptest! {
    /// Normalizing the same payload twice gives identical results.
    #[test]
    fn prop_idempotent(payload in payload_strategy()) {
        let normalizer = Normalizer::default();
        let first = normalizer.normalize_at(&payload, now());
        let second = normalizer.normalize_at(&payload, now());
        prop_assert_eq!(first, second);
    }

    /// Each surviving id appears once, carrying the greatest `sent` of its group.
    #[test]
    fn prop_latest_per_id(payload in payload_strategy()) {
        let result = Normalizer::default().normalize_at(&payload, now());
        prop_assert_eq!(result.status, Status::Success);

        for record in &result.records {
            prop_assert_eq!(result.records.iter().filter(|r| r.id == record.id).count(), 1);

            let latest = payload["features"]
                .as_array()
                .unwrap()
                .iter()
                .filter(|f| f["properties"]["id"].as_str().unwrap().ends_with(&record.id))
                .map(|f| f["properties"]["sent"].as_str().unwrap().to_string())
                .max()
                .unwrap();
            prop_assert_eq!(&record.sent, &latest);
        }

        let sents: Vec<&str> = result.records.iter().map(|r| r.sent.as_str()).collect();
        let mut sorted = sents.clone();
        sorted.sort();
        prop_assert_eq!(sents, sorted);
    }

    /// No retained record lacks an allowed severity substring.
    #[test]
    fn prop_severity_policy(payload in payload_strategy()) {
        let result = Normalizer::default().normalize_at(&payload, now());
        for record in &result.records {
            prop_assert!(
                ["Severe", "Moderate", "Extreme"].iter().any(|s| record.severity.contains(s))
            );
        }
        prop_assert_eq!(result.should_display, !result.records.is_empty());
    }

    /// A non-empty headline is always the composed description.
    #[test]
    fn prop_headline_priority(headline in "[A-Za-z][A-Za-z ]{0,30}", description in ".{0,60}") {
        let payload = json!({ "features": [{ "properties": {
            "id": "abc12345",
            "severity": "Severe",
            "headline": headline.clone(),
            "description": description,
        }}]});
        let result = Normalizer::default().normalize_at(&payload, now());
        prop_assert_eq!(result.active_summary.description, headline);
    }

    /// Anything that is not a usable feature collection fails without display.
    #[test]
    fn prop_malformed_never_displays(text in ".{0,40}") {
        let normalizer = Normalizer::default();
        let payloads = [
            json!(text.clone()),
            json!({ "features": text.clone() }),
            json!({ "title": text, "features": [] }),
        ];
        for payload in payloads {
            let result = normalizer.normalize_at(&payload, now());
            prop_assert_eq!(result.status, Status::Failure);
            prop_assert!(!result.should_display);
        }
    }

    #[test]
    fn prop_policy_matches_substring(severity in severity_strategy()) {
        let expected = severity.contains("Severe")
            || severity.contains("Moderate")
            || severity.contains("Extreme");
        prop_assert_eq!(SeverityPolicy::default().allows(&severity), expected);
    }
}
