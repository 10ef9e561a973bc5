// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Custom JSON codecs and the registry that bundles them.
//!
//! - [`socket_addr`] - `host:port` tokens into socket addresses (decode only)
//! - [`address_key`] - Addresses as JSON object keys (both directions)
//! - [`result`] - Success-result documents with jointly optional fields (decode only)
//! - [`registry`] - The [`Mapper`] codec context and its encode options

pub mod address_key;
pub mod prune;
pub mod registry;
pub mod result;
pub mod socket_addr;

pub use address_key::{select_key_text, AddressKeyCodec};
pub use prune::{is_empty_value, prune_empty};
pub use registry::{mapper, CodecKind, Mapper, MapperConfig};
pub use result::{rows_and_column_types_consistent, SuccessResultCodec};
pub use socket_addr::SocketAddressCodec;
