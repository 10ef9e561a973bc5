// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Address commands - socket-address tokens and map keys.

use clap::Subcommand;
use clustercodec::Mapper;

use crate::common::Result;

/// Address operations.
#[derive(Subcommand, Clone, Debug)]
pub enum AddressCmd {
    /// Decode a "<host>:<port>" token into a socket address
    Endpoint {
        /// Address token
        #[arg(value_name = "HOST:PORT")]
        token: String,
    },

    /// Resolve an address and print its map-key text
    Key {
        /// Host name or address literal
        #[arg(value_name = "ADDRESS")]
        address: String,
    },
}

impl AddressCmd {
    pub fn run(self, mapper: &Mapper) -> Result<()> {
        match self {
            AddressCmd::Endpoint { token } => cmd_endpoint(mapper, &token),
            AddressCmd::Key { address } => cmd_key(mapper, &address),
        }
    }
}

fn cmd_endpoint(mapper: &Mapper, token: &str) -> Result<()> {
    let socket = mapper.decode_socket_address(token)?;
    println!("{socket}");
    Ok(())
}

fn cmd_key(mapper: &Mapper, address: &str) -> Result<()> {
    let resolved = mapper.decode_address_key(address)?;
    println!("{}", mapper.encode_address_key(&resolved));
    Ok(())
}
