// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conditional result codec (decode only).
//!
//! A success-result document has three optional fields:
//!
//! ```text
//! {
//!   "rows": [ { "<col>": <any>, ... }, ... ],
//!   "columnTypes": { "<col>": "<type-name>", ... },
//!   "delayInMs": <number>
//! }
//! ```
//!
//! `rows` and `columnTypes` must appear together or not at all. A key that
//! is present counts even when its value is `null`, so `{"rows": null}` is
//! rejected. When both keys are missing the result is empty.
//!
//! `delayInMs` is read leniently: floats are truncated, numeric strings are
//! parsed and anything unreadable counts as 0. Negative delays are rejected.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::{CodecError, Result, Row};
use crate::model::SuccessResult;

const ROWS: &str = "rows";
const COLUMN_TYPES: &str = "columnTypes";
const DELAY_IN_MS: &str = "delayInMs";

/// `rows` and `columnTypes` are jointly optional: both present or both absent.
pub fn rows_and_column_types_consistent(has_rows: bool, has_column_types: bool) -> bool {
    !(has_rows ^ has_column_types)
}

/// Decodes [`SuccessResult`] documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessResultCodec {
    _private: (),
}

impl SuccessResultCodec {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Decode a success result from JSON text.
    pub fn decode_str(&self, json: &str) -> Result<SuccessResult> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| CodecError::json("success result", e.to_string()))?;
        self.decode(&value)
    }

    /// Decode a success result from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Validation`] if the value is not an object,
    /// if exactly one of `rows`/`columnTypes` is present, or if a field has
    /// the wrong shape. Nothing is returned on failure.
    pub fn decode(&self, value: &serde_json::Value) -> Result<SuccessResult> {
        let object = value
            .as_object()
            .ok_or_else(|| CodecError::validation("success result must be a JSON object"))?;

        let rows = object.get(ROWS);
        let column_types = object.get(COLUMN_TYPES);
        let delay_in_ms = match object.get(DELAY_IN_MS).map(delay_as_long) {
            Some(delay) => u64::try_from(delay).map_err(|_| {
                CodecError::validation(format!(
                    "\"{DELAY_IN_MS}\" must not be negative, got {delay}"
                ))
            })?,
            None => 0,
        };

        if !rows_and_column_types_consistent(rows.is_some(), column_types.is_some()) {
            return Err(CodecError::validation(format!(
                "Both \"{ROWS}\" and \"{COLUMN_TYPES}\" are required or none of them"
            )));
        }

        match (rows, column_types) {
            (Some(rows), Some(column_types)) => Ok(SuccessResult::new(
                decode_rows(rows)?,
                decode_column_types(column_types)?,
                delay_in_ms,
            )),
            _ => Ok(SuccessResult::empty().with_delay(delay_in_ms)),
        }
    }
}

/// Lenient integer read of a delay value.
///
/// Integers pass through, floats truncate toward zero, strings are parsed
/// as an integer and then as a float, booleans map to 1/0. Everything else,
/// `null` included, reads as 0.
fn delay_as_long(value: &serde_json::Value) -> i64 {
    use serde_json::Value;

    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

fn decode_column_types(value: &serde_json::Value) -> Result<IndexMap<String, String>> {
    IndexMap::<String, String>::deserialize(value).map_err(|e| {
        CodecError::validation(format!(
            "\"{COLUMN_TYPES}\" must map column names to type names: {e}"
        ))
    })
}

fn decode_rows(value: &serde_json::Value) -> Result<Vec<Row>> {
    Vec::<Row>::deserialize(value).map_err(|e| {
        CodecError::validation(format!("\"{ROWS}\" must be an array of objects: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RowValue;

    fn decode(json: &str) -> Result<SuccessResult> {
        SuccessResultCodec::new().decode_str(json)
    }

    #[test]
    fn test_consistency_predicate() {
        assert!(rows_and_column_types_consistent(false, false));
        assert!(rows_and_column_types_consistent(true, true));
        assert!(!rows_and_column_types_consistent(true, false));
        assert!(!rows_and_column_types_consistent(false, true));
    }

    #[test]
    fn test_decode_empty_object() {
        let result = decode("{}").unwrap();
        assert!(result.rows.is_empty());
        assert!(result.column_types.is_empty());
        assert_eq!(result.delay_in_ms, 0);
    }

    #[test]
    fn test_decode_rows_without_column_types() {
        let err = decode(r#"{"rows": []}"#).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Both \"rows\" and \"columnTypes\" are required or none of them"
        );
    }

    #[test]
    fn test_decode_column_types_without_rows() {
        let err = decode(r#"{"columnTypes": {"a": "int"}, "delayInMs": 3}"#).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_decode_full() {
        let result =
            decode(r#"{"rows": [{"a": 1}], "columnTypes": {"a": "int"}, "delayInMs": 500}"#)
                .unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0]["a"], RowValue::Int64(1));
        assert_eq!(result.column_types["a"], "int");
        assert_eq!(result.delay_in_ms, 500);
    }

    #[test]
    fn test_decode_both_empty() {
        let result = decode(r#"{"columnTypes": {}, "rows": []}"#).unwrap();
        assert_eq!(result, SuccessResult::empty());
    }

    #[test]
    fn test_decode_delay_only() {
        let result = decode(r#"{"delayInMs": 250}"#).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.delay_in_ms, 250);
    }

    #[test]
    fn test_decode_dynamic_row_values() {
        let result = decode(
            r#"{
                "rows": [{"s": "x", "n": 1.5, "b": true, "z": null, "o": {"k": [1]}}],
                "columnTypes": {"s": "varchar", "n": "double", "b": "boolean", "z": "int", "o": "map<text,list<int>>"}
            }"#,
        )
        .unwrap();
        let row = &result.rows[0];
        assert_eq!(row["s"], RowValue::String("x".to_string()));
        assert_eq!(row["n"], RowValue::Float64(1.5));
        assert_eq!(row["b"], RowValue::Bool(true));
        assert_eq!(row["z"], RowValue::Null);
        assert!(matches!(&row["o"], RowValue::Object(o) if o["k"] == RowValue::Array(vec![RowValue::Int64(1)])));
    }

    #[test]
    fn test_decode_preserves_row_order() {
        let result = decode(
            r#"{"rows": [{"a": 3}, {"a": 1}, {"a": 2}], "columnTypes": {"a": "int"}}"#,
        )
        .unwrap();
        let values: Vec<_> = result.rows.iter().map(|r| r["a"].as_i64()).collect();
        assert_eq!(values, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn test_decode_null_field_counts_as_present() {
        let err = decode(r#"{"rows": null}"#).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("required or none of them"));

        let err = decode(r#"{"columnTypes": null, "delayInMs": 5}"#).unwrap_err();
        assert!(err.to_string().contains("required or none of them"));

        // Both keys present, so the pair check passes and the shape check fails.
        let err = decode(r#"{"rows": null, "columnTypes": null}"#).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("\"rows\""));

        let err = decode(r#"{"rows": [], "columnTypes": null}"#).unwrap_err();
        assert!(err.to_string().contains("\"columnTypes\""));
    }

    #[test]
    fn test_decode_null_delay_is_zero() {
        let result = decode(r#"{"delayInMs": null}"#).unwrap();
        assert_eq!(result, SuccessResult::empty());
    }

    #[test]
    fn test_decode_lenient_delay() {
        let delay = |json: &str| decode(json).unwrap().delay_in_ms;
        assert_eq!(delay(r#"{"delayInMs": 500.0}"#), 500);
        assert_eq!(delay(r#"{"delayInMs": 1.9}"#), 1);
        assert_eq!(delay(r#"{"delayInMs": "500"}"#), 500);
        assert_eq!(delay(r#"{"delayInMs": " 42 "}"#), 42);
        assert_eq!(delay(r#"{"delayInMs": "2.5"}"#), 2);
        assert_eq!(delay(r#"{"delayInMs": "abc"}"#), 0);
        assert_eq!(delay(r#"{"delayInMs": true}"#), 1);
        assert_eq!(delay(r#"{"delayInMs": false}"#), 0);
        assert_eq!(delay(r#"{"delayInMs": [1]}"#), 0);
        assert_eq!(delay(r#"{"delayInMs": {}}"#), 0);
    }

    #[test]
    fn test_decode_negative_delay() {
        for json in [
            r#"{"delayInMs": -1}"#,
            r#"{"delayInMs": "-5"}"#,
            r#"{"delayInMs": -2.5}"#,
        ] {
            let err = decode(json).unwrap_err();
            assert!(err.is_validation(), "{json}");
            assert!(err.to_string().contains("must not be negative"));
        }
        assert_eq!(decode(r#"{"delayInMs": -0.5}"#).unwrap().delay_in_ms, 0);
    }

    #[test]
    fn test_decode_wrong_shapes() {
        let err = decode(r#"{"rows": [1], "columnTypes": {}}"#).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("\"rows\""));

        let err = decode(r#"{"rows": [], "columnTypes": {"a": 1}}"#).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("\"columnTypes\""));
    }

    #[test]
    fn test_decode_not_an_object() {
        assert!(decode("[]").unwrap_err().is_validation());
        assert!(matches!(
            decode("{").unwrap_err(),
            CodecError::Json { .. }
        ));
    }
}
