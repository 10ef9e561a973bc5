// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Network addresses as they appear in cluster documents.
//!
//! - [`parser`] - Pure `host:port` token parsing
//! - [`resolver`] - Name resolution behind the [`Resolver`] trait
//! - [`HostAddress`] - A resolved address that remembers the name it came from

pub mod parser;
pub mod resolver;

use std::fmt;
use std::net::{IpAddr, SocketAddr};

pub use parser::{parse_host_port, HostPort};
pub use resolver::{Resolver, StaticResolver, SystemResolver};

/// A resolved IP address, optionally tagged with the host name it was
/// resolved from.
///
/// The textual description is `name/address` when the name is known and
/// `/address` when it is not; [`fmt::Display`] produces that form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostAddress {
    name: Option<String>,
    ip: IpAddr,
}

impl HostAddress {
    /// Create an address with no known name.
    pub fn new(ip: IpAddr) -> Self {
        Self { name: None, ip }
    }

    /// Create an address resolved from `name`.
    pub fn with_name(name: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            name: Some(name.into()),
            ip,
        }
    }

    /// The host name this address was resolved from, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    /// Pair with a port to form a socket address.
    pub fn with_port(&self, port: u16) -> SocketAddr {
        SocketAddr::new(self.ip, port)
    }

    /// Textual description: `name/address` or `/address`.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name.as_deref().unwrap_or(""), self.ip)
    }
}

impl From<IpAddr> for HostAddress {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip)
    }
}
