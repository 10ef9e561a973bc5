// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Clustercodec
//!
//! JSON codecs for cluster-configuration documents.
//!
//! Most cluster model types serialize with plain serde derives. A few do
//! not map naturally onto JSON and get custom codecs:
//! - **Socket addresses** are written as compact `"host:port"` tokens and
//!   resolved on read
//! - **Addresses used as map keys** are written as a host name or raw
//!   address and resolved back on read
//! - **Success results** carry `rows`/`columnTypes` fields that must appear
//!   together, and a `delayInMs` that defaults to zero
//!
//! ## Architecture
//!
//! - `core/` - Error taxonomy and the dynamic row value type
//! - `address/` - `host:port` parsing and name resolution
//! - `encoding/` - The custom codecs and the [`Mapper`] that bundles them
//! - `model/` - Value types whose serde impls route through the codecs
//!
//! ## Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use clustercodec::{mapper, SuccessResult};
//!
//! let result: SuccessResult = mapper().decode(
//!     r#"{"rows": [{"a": 1}], "columnTypes": {"a": "int"}, "delayInMs": 500}"#,
//! )?;
//! assert_eq!(result.delay_in_ms, 500);
//!
//! let socket = mapper().decode_socket_address("127.0.0.1:9042")?;
//! assert_eq!(socket.port(), 9042);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use crate::core::{CodecError, Result, Row, RowValue};

// Address parsing and resolution
pub mod address;

pub use address::{HostAddress, Resolver, StaticResolver, SystemResolver};

// Custom codecs and registry
pub mod encoding;

pub use encoding::{mapper, CodecKind, Mapper, MapperConfig};

// Domain values
pub mod model;

pub use model::{Endpoint, SuccessResult};
