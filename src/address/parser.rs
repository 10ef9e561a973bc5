// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Address token parsing.
//!
//! Splits a `host:port` token into its two halves without touching the
//! network. The split happens at the last colon so that a trailing port
//! can follow an IPv6 literal; bracketed hosts (`[::1]:9042`) have their
//! brackets stripped.

use crate::core::{CodecError, Result};

/// A parsed but unresolved `host:port` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort<'a> {
    /// Host name or address literal, brackets removed
    pub host: &'a str,
    /// Port number
    pub port: u16,
}

/// Parse a `host:port` token.
///
/// # Errors
///
/// Returns [`CodecError::Format`] when the token has no colon, an empty
/// host, or a port that is not a base-10 integer in `0..=65535`.
pub fn parse_host_port(token: &str) -> Result<HostPort<'_>> {
    let (host, port) = token
        .rsplit_once(':')
        .ok_or_else(|| CodecError::format(token, "expected '<host>:<port>'"))?;

    let host = strip_brackets(host);
    if host.is_empty() {
        return Err(CodecError::format(token, "empty host"));
    }

    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::format(
            token,
            format!("port '{port}' is not a decimal number"),
        ));
    }
    let port = port
        .parse::<u16>()
        .map_err(|_| CodecError::format(token, format!("port '{port}' is out of range")))?;

    Ok(HostPort { host, port })
}

fn strip_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}
