// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dynamic row value type.
//!
//! Query result rows map column names to values whose type is only known
//! once the document is read. [`RowValue`] is the closed set of shapes a
//! JSON value can take, so decoded rows stay statically checkable while
//! keeping full input fidelity.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single result row: column name -> value, in document order.
pub type Row = IndexMap<String, RowValue>;

/// Dynamically-typed value held in a result row.
///
/// Numbers keep the narrowest lossless representation the JSON parser
/// reports: signed integers first, then unsigned, then floating point.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Null,
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    String(String),
    Array(Vec<RowValue>),
    Object(Row),
}

impl RowValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, RowValue::Null)
    }

    /// Check if this value is a number of any representation.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            RowValue::Int64(_) | RowValue::UInt64(_) | RowValue::Float64(_)
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RowValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (integers only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RowValue::Int64(v) => Some(*v),
            RowValue::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to convert this value to f64 (numbers only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RowValue::Int64(v) => Some(*v as f64),
            RowValue::UInt64(v) => Some(*v as f64),
            RowValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RowValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for RowValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RowValue::Null,
            serde_json::Value::Bool(b) => RowValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RowValue::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    RowValue::UInt64(u)
                } else {
                    // serde_json numbers are always one of the three
                    RowValue::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => RowValue::String(s),
            serde_json::Value::Array(items) => {
                RowValue::Array(items.into_iter().map(RowValue::from).collect())
            }
            serde_json::Value::Object(map) => RowValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, RowValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for RowValue {
    fn from(s: &str) -> Self {
        RowValue::String(s.to_string())
    }
}

impl From<String> for RowValue {
    fn from(s: String) -> Self {
        RowValue::String(s)
    }
}

impl From<i64> for RowValue {
    fn from(v: i64) -> Self {
        RowValue::Int64(v)
    }
}

impl From<f64> for RowValue {
    fn from(v: f64) -> Self {
        RowValue::Float64(v)
    }
}

impl From<bool> for RowValue {
    fn from(v: bool) -> Self {
        RowValue::Bool(v)
    }
}

impl Serialize for RowValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RowValue::Null => serializer.serialize_unit(),
            RowValue::Bool(b) => serializer.serialize_bool(*b),
            RowValue::Int64(i) => serializer.serialize_i64(*i),
            RowValue::UInt64(u) => serializer.serialize_u64(*u),
            RowValue::Float64(f) => serializer.serialize_f64(*f),
            RowValue::String(s) => serializer.serialize_str(s),
            RowValue::Array(items) => items.serialize(serializer),
            RowValue::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RowValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowValueVisitor;

        impl<'de> Visitor<'de> for RowValueVisitor {
            type Value = RowValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null, boolean, number, string, array or object")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(RowValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(RowValue::Int64(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(match i64::try_from(value) {
                    Ok(i) => RowValue::Int64(i),
                    Err(_) => RowValue::UInt64(value),
                })
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(RowValue::Float64(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(RowValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(RowValue::String(value))
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(RowValue::Null)
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(RowValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                RowValue::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(RowValue::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut row = Row::new();
                while let Some((key, value)) = map.next_entry::<String, RowValue>()? {
                    row.insert(key, value);
                }
                Ok(RowValue::Object(row))
            }
        }

        deserializer.deserialize_any(RowValueVisitor)
    }
}
