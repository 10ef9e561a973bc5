// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Result command - validate and re-encode success-result documents.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use clustercodec::{Mapper, MapperConfig};

use crate::common::Result;

/// Decode a success-result document.
#[derive(Args, Clone, Debug)]
pub struct ResultCmd {
    /// Input file (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pretty-print the re-encoded document
    #[arg(long)]
    pretty: bool,
}

impl ResultCmd {
    pub fn run(self, mapper: &Mapper) -> Result<()> {
        let text = read_input(self.input.as_ref())?;
        let result = mapper.decode_success_result(&text)?;

        let output = if self.pretty && !mapper.config().pretty {
            let config = MapperConfig {
                pretty: true,
                ..*mapper.config()
            };
            Mapper::new(config).encode(&result)?
        } else {
            mapper.encode(&result)?
        };

        println!("{output}");
        Ok(())
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
