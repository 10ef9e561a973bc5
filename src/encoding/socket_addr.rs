// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Socket address codec (decode only).
//!
//! Reads a `"<host>:<port>"` text token and resolves the host into a
//! concrete [`SocketAddr`]. Encoding a socket address goes through the
//! generic `ip:port` text form, see [`Endpoint`](crate::model::Endpoint).

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::debug;

use crate::address::{parse_host_port, Resolver};
use crate::core::{CodecError, Result};

/// Decodes `host:port` tokens into socket addresses.
#[derive(Clone)]
pub struct SocketAddressCodec {
    resolver: Arc<dyn Resolver>,
}

impl SocketAddressCodec {
    /// Create a codec that resolves hosts through `resolver`.
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }

    /// Decode a `host:port` token.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Format`] if the token is malformed
    /// - [`CodecError::Resolution`] if the host cannot be resolved
    pub fn decode(&self, token: &str) -> Result<SocketAddr> {
        let parsed = parse_host_port(token)?;
        let address = self.resolver.resolve(parsed.host)?;
        let socket = address.with_port(parsed.port);
        debug!(token, socket = %socket, "decoded socket address");
        Ok(socket)
    }

    /// Decode a JSON value, which must be a string token.
    pub fn decode_value(&self, value: &serde_json::Value) -> Result<SocketAddr> {
        match value {
            serde_json::Value::String(token) => self.decode(token),
            other => Err(CodecError::format(
                other.to_string(),
                "socket address must be a string",
            )),
        }
    }
}

impl std::fmt::Debug for SocketAddressCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocketAddressCodec").finish_non_exhaustive()
    }
}
