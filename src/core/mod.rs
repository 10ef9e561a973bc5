// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout clustercodec.
//!
//! - [`CodecError`] - Error taxonomy shared by every codec
//! - [`RowValue`] - Dynamically-typed value held in query result rows

pub mod error;
pub mod value;

pub use error::{de_error, CodecError, Result};
pub(crate) use error::{clear_recorded_error, take_recorded_error};
pub use value::{Row, RowValue};
