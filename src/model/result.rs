// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Query-result payload.

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::core::{de_error, Row};
use crate::encoding::result::SuccessResultCodec;

/// A successful query result primed into a cluster.
///
/// `rows` and `column_types` travel together: a document carries both or
/// neither. Row cells are not cross-checked against `column_types`.
///
/// Deserialization goes through [`SuccessResultCodec`]; serialization
/// omits empty containers and a zero delay.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Row>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub column_types: IndexMap<String, String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub delay_in_ms: u64,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

impl SuccessResult {
    pub fn new(rows: Vec<Row>, column_types: IndexMap<String, String>, delay_in_ms: u64) -> Self {
        Self {
            rows,
            column_types,
            delay_in_ms,
        }
    }

    /// A result with no rows, no columns and no delay.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the delay, builder style.
    pub fn with_delay(mut self, delay_in_ms: u64) -> Self {
        self.delay_in_ms = delay_in_ms;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.column_types.is_empty()
    }
}

impl<'de> Deserialize<'de> for SuccessResult {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        SuccessResultCodec::new()
            .decode(&value)
            .map_err(de_error)
    }
}
