use super::types::LineSegment;
use thiserror::Error;

/// Why a line segmenter payload was rejected
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("segmenter payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("segmenter payload is {0}, expected an array")]
    NotAnArray(&'static str),

    #[error("segment {index} is malformed: {source}")]
    Segment {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Strip a Markdown code fence wrapped around a model response
///
/// Handles a leading ```` ``` ```` with an optional `json` tag (any case)
/// and a trailing ```` ``` ````; unfenced text is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim_start();

    if let Some(rest) = text.strip_prefix("```") {
        text = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
    }

    let mut text = text.trim_end();
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Parse the segmenter's JSON-bearing text into line segments
///
/// Every entry must carry `text`, `startTime` and `endTime`; a single
/// malformed entry rejects the whole payload.
pub fn parse_line_segments(raw: &str) -> Result<Vec<LineSegment>, PayloadError> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fence(raw))?;

    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        other => return Err(PayloadError::NotAnArray(json_kind(&other))),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| PayloadError::Segment { index, source })
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
