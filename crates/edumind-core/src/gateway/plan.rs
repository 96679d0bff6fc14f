//! Typed decode of a generated study plan.
//!
//! The model is asked for a JSON array of `{time, subject, duration}`
//! objects. Nothing in the answer is trusted: every entry is checked and
//! the first bad one fails the whole plan.

use serde_json::Value;

use crate::error::GenerationError;
use crate::schedule::{ClockTime, PlanItem};

/// Decode upstream text into plan items.
///
/// Durations may arrive as floats and are rounded to whole minutes. A
/// Markdown code fence around the JSON is tolerated.
pub fn decode_plan(text: &str) -> Result<Vec<PlanItem>, GenerationError> {
    let body = strip_fence(text.trim());
    let value: Value =
        serde_json::from_str(body).map_err(|e| GenerationError::MalformedJson(e.to_string()))?;

    let Value::Array(entries) = value else {
        return Err(GenerationError::UnexpectedShape {
            expected: "array",
            found: kind(&value).to_string(),
        });
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_item(index, entry))
        .collect()
}

fn decode_item(index: usize, entry: &Value) -> Result<PlanItem, GenerationError> {
    let invalid = |message: String| GenerationError::InvalidItem { index, message };

    let Value::Object(fields) = entry else {
        return Err(invalid(format!("expected object, got {}", kind(entry))));
    };

    let time = fields
        .get("time")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("missing \"time\"".into()))?;
    let time = ClockTime::parse(time.trim()).map_err(|e| invalid(e.to_string()))?;

    let subject = fields
        .get("subject")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
    if subject.is_empty() {
        return Err(invalid("empty \"subject\"".into()));
    }

    let duration = fields
        .get("duration")
        .and_then(Value::as_f64)
        .ok_or_else(|| invalid("missing numeric \"duration\"".into()))?;
    let minutes = duration.round();
    if !minutes.is_finite() || minutes < 1.0 {
        return Err(invalid(format!("duration must be positive, got {duration}")));
    }

    Ok(PlanItem {
        time,
        subject: subject.to_string(),
        duration_min: minutes.min(f64::from(u32::MAX)) as u32,
    })
}

fn strip_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
