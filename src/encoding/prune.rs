// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Omit-empty encode option.
//!
//! Removes object fields whose value is `null`, `""`, `[]` or `{}`. A field
//! is judged on its value as serialized, before its own children are
//! pruned, so an object holding only empty fields is kept as `{}`. Array
//! elements are never removed, but objects inside arrays are pruned.

use serde_json::Value;

/// Whether a value counts as empty for the omit-empty rule.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Prune empty fields from `value` in place, recursively.
pub fn prune_empty(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, field| !is_empty_value(field));
            for field in map.values_mut() {
                prune_empty(field);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(prune_empty),
        _ => {}
    }
}
