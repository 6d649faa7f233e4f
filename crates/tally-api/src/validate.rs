//! Request body validation helpers.
//!
//! Bodies arrive as raw JSON so that every missing field can be reported in
//! a single pass, rather than failing on the first serde error.

use serde_json::Value;

use crate::error::ApiError;

/// Check that every named key is present in the body object.
/// Reports all missing fields at once.
pub fn require_fields(body: &Value, fields: &[&str]) -> Result<(), ApiError> {
    let Some(obj) = body.as_object() else {
        return Err(ApiError::Validation(format!(
            "Missing required fields: {}",
            fields.join(", ")
        )));
    };

    let missing: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|field| !obj.contains_key(*field))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Extract a string field, optionally bounded in length.
pub fn string_field(body: &Value, name: &str, max_len: Option<usize>) -> Result<String, ApiError> {
    let value = body
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Validation(format!("Field must be a string: {name}")))?;

    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(ApiError::Validation(format!(
                "Field exceeds {max} characters: {name}"
            )));
        }
    }

    Ok(value.to_string())
}

/// Extract an integer id field.
pub fn id_field(body: &Value, name: &str) -> Result<i64, ApiError> {
    body.get(name)
        .and_then(Value::as_i64)
        .ok_or_else(|| ApiError::Validation(format!("Field must be an integer: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn require_fields_lists_every_missing_field() {
        let body = json!({"present": 1});
        let err = require_fields(&body, &["present", "a", "b"]).expect_err("should fail");
        match err {
            ApiError::Validation(msg) => {
                assert_eq!(msg, "Missing required fields: a, b");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn require_fields_accepts_null_values() {
        // Key presence only; falsy values still count as present
        let body = json!({"a": null, "b": ""});
        assert!(require_fields(&body, &["a", "b"]).is_ok());
    }

    #[test]
    fn require_fields_rejects_non_object_body() {
        let err = require_fields(&json!([1, 2]), &["a"]).expect_err("should fail");
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn string_field_enforces_max_len() {
        let body = json!({"notes": "x".repeat(5)});
        assert!(string_field(&body, "notes", Some(5)).is_ok());
        assert!(string_field(&body, "notes", Some(4)).is_err());
    }

    #[test]
    fn id_field_rejects_non_integers() {
        let body = json!({"budgetID": "7"});
        assert!(matches!(
            id_field(&body, "budgetID"),
            Err(ApiError::Validation(_))
        ));
    }
}
