// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Address-as-key codec.
//!
//! JSON object keys are always strings, so an address used as a map key
//! needs its own text form. Encoding picks the most specific part of the
//! address description: the host name when known, otherwise the raw
//! address. Decoding resolves the key text back into an address.
//!
//! Only address equivalence survives a round trip. A key encoded from a
//! named address is re-resolved on decode and may come back with a
//! different IP if the name's records changed in between.
//!
//! [`HostAddress`] implements `Serialize`/`Deserialize` through this codec
//! using the system resolver, so `HashMap<HostAddress, V>` fields work in
//! any serde-derived model type.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::{HostAddress, Resolver, SystemResolver};
use crate::core::{de_error, CodecError, Result};

/// Select the key text from an address description.
///
/// The description has the form `name/address`, `/address` or a bare
/// address. A slash at index 0 means the name is unknown, so the address
/// after it is used; a slash further in means the name before it is used;
/// no slash means the whole (trimmed) description is used.
pub fn select_key_text(description: &str) -> &str {
    let description = description.trim();
    match description.find('/') {
        Some(0) => &description[1..],
        Some(ix) => &description[..ix],
        None => description,
    }
}

/// Encodes addresses as map-key text and resolves key text back.
#[derive(Clone)]
pub struct AddressKeyCodec {
    resolver: Arc<dyn Resolver>,
}

impl AddressKeyCodec {
    /// Create a codec that resolves keys through `resolver`.
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }

    /// Encode an address as key text.
    pub fn encode(&self, address: &HostAddress) -> String {
        select_key_text(&address.description()).to_string()
    }

    /// Resolve key text into an address.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Resolution`] if the key cannot be resolved.
    pub fn decode(&self, key: &str) -> Result<HostAddress> {
        self.resolver.resolve(key)
    }

    /// Encode an address-keyed map into a JSON object.
    pub fn encode_map<V: Serialize>(
        &self,
        map: &HashMap<HostAddress, V>,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        let mut object = serde_json::Map::with_capacity(map.len());
        for (address, value) in map {
            let value = serde_json::to_value(value)
                .map_err(|e| CodecError::json(self.encode(address), e.to_string()))?;
            object.insert(self.encode(address), value);
        }
        Ok(object)
    }

    /// Decode a JSON object whose keys are addresses.
    ///
    /// Fails on the first key that does not resolve or value that does not
    /// convert; no partial map is returned.
    pub fn decode_map<V: DeserializeOwned>(
        &self,
        object: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<BTreeMap<HostAddress, V>> {
        let mut map = BTreeMap::new();
        for (key, value) in object {
            let address = self.decode(key)?;
            let value = V::deserialize(value)
                .map_err(|e| CodecError::json(key.clone(), e.to_string()))?;
            map.insert(address, value);
        }
        Ok(map)
    }
}

impl std::fmt::Debug for AddressKeyCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressKeyCodec").finish_non_exhaustive()
    }
}

impl Serialize for HostAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(select_key_text(&self.description()))
    }
}

impl<'de> Deserialize<'de> for HostAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        SystemResolver::new()
            .resolve(&key)
            .map_err(de_error)
    }
}
