//! Parsing of the provider's `* LABEL...text` bulletin format.

use indexmap::IndexMap;

/// Body of the first labeled block of a WHAT/WHEN bulletin.
///
/// Returns the text between the first `...` and the next `*` of the second
/// `*`-separated segment, untrimmed. `None` when the description is not a
/// WHAT/WHEN bulletin or the segment does not have that shape.
pub fn first_block_body(description: &str) -> Option<&str> {
    if !(description.contains("WHAT") && description.contains("WHEN")) {
        return None;
    }
    let segment = description.split('*').nth(1)?;
    let (_, body) = segment.split_once("...")?;
    Some(body)
}

/// Split a bulletin into its labeled blocks, e.g. `WHAT` -> `"Strong winds."`.
///
/// Whitespace runs (including newlines) collapse to single spaces. Text
/// before the first `*` is ignored. Returns `None` if there are no blocks or
/// any block lacks a label or body.
pub fn parse_bulletin(description: &str) -> Option<IndexMap<String, String>> {
    let normalized = description.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut blocks = IndexMap::new();
    for part in normalized.split('*').skip(1) {
        if part.trim().is_empty() {
            continue;
        }
        let (label, body) = part.split_once("...")?;
        let (label, body) = (label.trim(), body.trim());
        if label.is_empty() || body.is_empty() {
            return None;
        }
        blocks.insert(label.to_string(), body.to_string());
    }

    if blocks.is_empty() {
        None
    } else {
        Some(blocks)
    }
}
