// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Clustercodec CLI
//!
//! Command-line access to the cluster document codecs.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve a socket-address token
//! clustercodec endpoint node1.dc1:9042
//!
//! # Show the map-key text for an address
//! clustercodec key 127.0.0.1
//!
//! # Validate and re-encode a success-result document
//! clustercodec result prime.json --pretty
//!
//! # List the registered codecs
//! clustercodec codecs
//! ```

mod cmd;
mod common;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use clustercodec::CodecError;
use cmd::{AddressCmd, CodecsCmd, ResultCmd};
use common::{build_mapper, init_logging, Result};
use tracing::debug;

/// Clustercodec - cluster document codec toolkit
///
/// Decode and re-encode the parts of cluster documents that need custom
/// handling: socket-address tokens, address map keys and success results.
#[derive(Parser, Clone)]
#[command(name = "clustercodec")]
#[command(about = "Codec toolkit for cluster-configuration documents", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Mapper configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    #[command(flatten)]
    Address(AddressCmd),

    /// Decode a success-result document and print it re-encoded
    Result(ResultCmd),

    /// List the registered codecs
    Codecs(CodecsCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mapper = build_mapper(cli.config.as_deref())?;

    match cli.command {
        Commands::Address(cmd) => cmd.run(&mapper),
        Commands::Result(cmd) => cmd.run(&mapper),
        Commands::Codecs(cmd) => cmd.run(&mapper),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        if let Some(err) = e.downcast_ref::<CodecError>() {
            debug!(fields = ?err.log_fields(), "command failed");
        }
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
