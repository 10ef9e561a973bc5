// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec registry.
//!
//! A [`Mapper`] bundles the custom codecs with the document-level encode
//! options. It is immutable once built and safe to share across threads
//! without locking. Build one at startup and pass it by reference, or use
//! [`mapper()`] for the process-wide instance with default settings.
//!
//! # Example
//!
//! ```
//! use clustercodec::encoding::{Mapper, MapperConfig};
//! use clustercodec::SuccessResult;
//!
//! let mapper = Mapper::new(MapperConfig::default());
//! let result: SuccessResult = mapper.decode(r#"{"delayInMs": 10}"#)?;
//! assert_eq!(mapper.encode(&result)?, r#"{"delayInMs":10}"#);
//! # Ok::<(), clustercodec::CodecError>(())
//! ```

use std::fmt;
use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::address_key::AddressKeyCodec;
use super::prune::prune_empty;
use super::result::SuccessResultCodec;
use super::socket_addr::SocketAddressCodec;
use crate::address::{HostAddress, Resolver, SystemResolver};
use crate::core::{clear_recorded_error, take_recorded_error, CodecError, Result};
use crate::model::SuccessResult;

/// The customized codecs a [`Mapper`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// `host:port` token -> socket address
    SocketAddress,
    /// Address <-> map-key text
    AddressKey,
    /// Success-result document -> [`SuccessResult`]
    SuccessResult,
}

impl CodecKind {
    /// All registered codecs, in registration order.
    pub const ALL: [CodecKind; 3] = [
        CodecKind::SocketAddress,
        CodecKind::AddressKey,
        CodecKind::SuccessResult,
    ];

    /// Name of the Rust type the codec is bound to.
    pub fn target_type(&self) -> &'static str {
        match self {
            CodecKind::SocketAddress => "Endpoint",
            CodecKind::AddressKey => "HostAddress",
            CodecKind::SuccessResult => "SuccessResult",
        }
    }

    /// Whether the codec only customizes decoding.
    pub fn is_decode_only(&self) -> bool {
        !matches!(self, CodecKind::AddressKey)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CodecKind::SocketAddress => "socket-address",
            CodecKind::AddressKey => "address-key",
            CodecKind::SuccessResult => "success-result",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document-level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MapperConfig {
    /// Omit fields whose value is null, an empty string or an empty container
    pub omit_empty: bool,
    /// Pretty-print encoded output
    pub pretty: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            omit_empty: true,
            pretty: false,
        }
    }
}

impl MapperConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    ///
    /// ```toml
    /// omit-empty = true
    /// pretty = false
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_omit_empty(mut self, omit_empty: bool) -> Self {
        self.omit_empty = omit_empty;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Configured codec context.
pub struct Mapper {
    config: MapperConfig,
    socket_address: SocketAddressCodec,
    address_key: AddressKeyCodec,
    success_result: SuccessResultCodec,
}

impl Mapper {
    /// Build a mapper that resolves names through the system resolver.
    pub fn new(config: MapperConfig) -> Self {
        Self::with_resolver(config, Arc::new(SystemResolver::new()))
    }

    /// Build a mapper that resolves names through `resolver`.
    ///
    /// The resolver is used by the mapper's own codec accessors. Types
    /// decoded through serde (`Endpoint`, `HostAddress` keys) always use the
    /// system resolver.
    pub fn with_resolver(config: MapperConfig, resolver: Arc<dyn Resolver>) -> Self {
        debug!(
            omit_empty = config.omit_empty,
            pretty = config.pretty,
            codecs = ?CodecKind::ALL,
            "building mapper"
        );
        Self {
            config,
            socket_address: SocketAddressCodec::new(resolver.clone()),
            address_key: AddressKeyCodec::new(resolver),
            success_result: SuccessResultCodec::new(),
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Codecs registered on this mapper.
    pub fn registered_codecs(&self) -> &'static [CodecKind] {
        &CodecKind::ALL
    }

    pub fn socket_address(&self) -> &SocketAddressCodec {
        &self.socket_address
    }

    pub fn address_key(&self) -> &AddressKeyCodec {
        &self.address_key
    }

    pub fn success_result(&self) -> &SuccessResultCodec {
        &self.success_result
    }

    /// Encode any serializable value to a JSON value, applying the
    /// omit-empty option.
    pub fn encode_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<serde_json::Value> {
        let mut json =
            serde_json::to_value(value).map_err(|e| CodecError::json("encode", e.to_string()))?;
        if self.config.omit_empty {
            prune_empty(&mut json);
        }
        Ok(json)
    }

    /// Encode any serializable value to JSON text.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = self.encode_value(value)?;
        let text = if self.config.pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        };
        text.map_err(|e| CodecError::json("encode", e.to_string()))
    }

    /// Decode JSON text into any deserializable value.
    ///
    /// A codec failure inside serde comes back with its own variant
    /// ([`CodecError::Format`], [`CodecError::Resolution`] or
    /// [`CodecError::Validation`]). Syntax and shape errors from serde
    /// itself are [`CodecError::Json`].
    pub fn decode<T: DeserializeOwned>(&self, json: &str) -> Result<T> {
        clear_recorded_error();
        serde_json::from_str(json).map_err(decode_error)
    }

    /// Decode a JSON value into any deserializable value.
    pub fn decode_value<T: DeserializeOwned>(&self, value: serde_json::Value) -> Result<T> {
        clear_recorded_error();
        serde_json::from_value(value).map_err(decode_error)
    }

    /// Decode a `host:port` token with this mapper's resolver.
    pub fn decode_socket_address(&self, token: &str) -> Result<SocketAddr> {
        self.socket_address.decode(token)
    }

    /// Encode an address as map-key text.
    pub fn encode_address_key(&self, address: &HostAddress) -> String {
        self.address_key.encode(address)
    }

    /// Resolve map-key text with this mapper's resolver.
    pub fn decode_address_key(&self, key: &str) -> Result<HostAddress> {
        self.address_key.decode(key)
    }

    /// Decode a success-result document, keeping the typed error.
    pub fn decode_success_result(&self, json: &str) -> Result<SuccessResult> {
        self.success_result.decode_str(json)
    }
}

fn decode_error(err: serde_json::Error) -> CodecError {
    let message = err.to_string();
    take_recorded_error(&message).unwrap_or_else(|| CodecError::json("decode", message))
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(MapperConfig::default())
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("config", &self.config)
            .field("codecs", &CodecKind::ALL)
            .finish()
    }
}

/// Process-wide mapper.
///
/// For custom configuration or resolvers, build a `Mapper` directly.
static GLOBAL_MAPPER: OnceLock<Mapper> = OnceLock::new();

/// Get the process-wide mapper: default configuration, system resolver.
///
/// Built on first call; every call returns the same instance.
pub fn mapper() -> &'static Mapper {
    GLOBAL_MAPPER.get_or_init(Mapper::default)
}
