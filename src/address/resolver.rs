// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Name resolution.
//!
//! The codecs never talk to DNS directly; they go through a [`Resolver`]
//! so that callers can swap in a fixed table ([`StaticResolver`]) when
//! they need deterministic, offline decoding. [`SystemResolver`] uses the
//! operating system's resolver and may block on network I/O with no
//! timeout.

use std::collections::HashMap;
use std::net::{IpAddr, ToSocketAddrs};

use tracing::{debug, warn};

use super::HostAddress;
use crate::core::{CodecError, Result};

/// Turns a host name or address literal into a concrete address.
pub trait Resolver: Send + Sync {
    /// Resolve `host` to a single address.
    ///
    /// Address literals resolve to themselves with no name attached.
    /// Names resolve to the first address returned, keeping the name.
    fn resolve(&self, host: &str) -> Result<HostAddress>;
}

/// Resolver backed by the operating system (`getaddrinfo`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for SystemResolver {
    fn resolve(&self, host: &str) -> Result<HostAddress> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(HostAddress::new(ip));
        }

        let first = (host, 0u16)
            .to_socket_addrs()
            .map_err(|e| {
                let err = CodecError::resolution(host, e.to_string());
                warn!(fields = ?err.log_fields(), "name resolution failed");
                err
            })?
            .next();

        match first {
            Some(addr) => {
                debug!(host, ip = %addr.ip(), "resolved host");
                Ok(HostAddress::with_name(host, addr.ip()))
            }
            None => {
                let err = CodecError::resolution(host, "no addresses found");
                warn!(fields = ?err.log_fields(), "name resolution returned no addresses");
                Err(err)
            }
        }
    }
}

/// Resolver over a fixed name -> address table.
///
/// Address literals always resolve, whether or not they appear in the
/// table. Lookups are case-insensitive, like DNS.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, IpAddr>,
}

impl StaticResolver {
    /// Create an empty resolver that only understands address literals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a host entry, builder style.
    pub fn with_host(mut self, name: impl Into<String>, ip: IpAddr) -> Self {
        self.insert(name, ip);
        self
    }

    /// Add or replace a host entry.
    pub fn insert(&mut self, name: impl Into<String>, ip: IpAddr) {
        self.hosts.insert(name.into().to_ascii_lowercase(), ip);
    }

    /// Number of named entries.
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl Resolver for StaticResolver {
    fn resolve(&self, host: &str) -> Result<HostAddress> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(HostAddress::new(ip));
        }

        match self.hosts.get(&host.to_ascii_lowercase()) {
            Some(ip) => {
                debug!(host, ip = %ip, "resolved host from static table");
                Ok(HostAddress::with_name(host, *ip))
            }
            None => Err(CodecError::resolution(host, "unknown host")),
        }
    }
}
