//! Feature record extraction.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::types::AlertRecord;

/// Map every feature onto an [`AlertRecord`], preserving input order.
///
/// Any feature without a `properties` object, including scalar entries,
/// yields an all-empty record so one bad entry cannot hide the rest.
pub fn extract_records(features: &[Value], id_suffix_len: usize) -> Vec<AlertRecord> {
    features
        .iter()
        .enumerate()
        .map(|(index, feature)| extract_record(index, feature, id_suffix_len))
        .collect()
}

fn extract_record(index: usize, feature: &Value, id_suffix_len: usize) -> AlertRecord {
    let properties = match feature {
        Value::Object(object) => object.get("properties").and_then(Value::as_object),
        Value::Null => None,
        other => {
            warn!("Feature {} is {}, using empty record", index, kind_of(other));
            None
        }
    };

    let Some(props) = properties else {
        debug!("Feature {} has no properties, using empty record", index);
        return AlertRecord::default();
    };

    AlertRecord {
        id: alert_key(&text_field(props, "id"), id_suffix_len),
        event: text_field(props, "event"),
        headline: text_field(props, "headline"),
        description: text_field(props, "description"),
        instruction: text_field(props, "instruction"),
        sent: text_field(props, "sent"),
        severity: text_field(props, "severity"),
        onset: text_field(props, "onset"),
        expires: text_field(props, "expires"),
        ends: text_field(props, "ends"),
        status: text_field(props, "status"),
        message_type: text_field(props, "messageType"),
        category: text_field(props, "category"),
        certainty: text_field(props, "certainty"),
        urgency: text_field(props, "urgency"),
        response: text_field(props, "response"),
    }
}

/// Derive the supersession key: the trailing `len` characters of the provider id.
///
/// Ids shorter than `len` are kept whole.
pub fn alert_key(raw_id: &str, len: usize) -> String {
    let count = raw_id.chars().count();
    raw_id.chars().skip(count.saturating_sub(len)).collect()
}

/// Read a string property, defaulting to empty for absent, null, or non-string values.
fn text_field(props: &Map<String, Value>, key: &str) -> String {
    match props.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            debug!("Property '{}' is {}, treating as empty", key, kind_of(other));
            String::new()
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
