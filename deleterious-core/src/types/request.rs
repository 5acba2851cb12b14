//! Delete request payload

use serde_json::Value;

use super::RecordId;
use crate::error::{CoreError, CoreResult};

/// Extract the identifiers from a bulk delete body: `{"ids": [...]}`.
///
/// A missing or falsy `ids` (`null`, `false`, `0`, `""`, `[]`) yields an
/// empty list. Any other non-list value is rejected.
///
/// # Errors
/// `CoreError::ValidationError` when the body is not an object, `ids` is not
/// a list, or a list element is neither an integer nor a string.
pub fn parse_ids(payload: &Value) -> CoreResult<Vec<RecordId>> {
    let ids = match payload {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => match map.get("ids") {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        },
        _ => {
            return Err(CoreError::ValidationError(
                "Request body must be a JSON object".to_string(),
            ));
        }
    };

    if is_falsy(ids) {
        return Ok(Vec::new());
    }

    let Value::Array(items) = ids else {
        return Err(CoreError::ValidationError(format!(
            "'ids' must be a list, got {ids}"
        )));
    };

    items
        .iter()
        .map(|item| match item {
            Value::Number(n) => n
                .as_i64()
                .map(RecordId::Int)
                .ok_or_else(|| CoreError::ValidationError(format!("Invalid id: {n}"))),
            Value::String(s) => Ok(RecordId::Str(s.clone())),
            other => Err(CoreError::ValidationError(format!("Invalid id: {other}"))),
        })
        .collect()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
