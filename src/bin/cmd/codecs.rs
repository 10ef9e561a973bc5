// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codecs command - list the registered codecs.

use clap::Args;
use clustercodec::Mapper;
use serde::Serialize;

use crate::common::Result;

/// List registered codecs.
#[derive(Args, Clone, Debug)]
pub struct CodecsCmd {
    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

#[derive(Serialize)]
struct CodecEntry {
    name: &'static str,
    target: &'static str,
    decode_only: bool,
}

impl CodecsCmd {
    pub fn run(self, mapper: &Mapper) -> Result<()> {
        let entries: Vec<CodecEntry> = mapper
            .registered_codecs()
            .iter()
            .map(|kind| CodecEntry {
                name: kind.as_str(),
                target: kind.target_type(),
                decode_only: kind.is_decode_only(),
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        println!("{:<16} {:<14} DIRECTION", "CODEC", "TYPE");
        for entry in entries {
            let direction = if entry.decode_only {
                "decode"
            } else {
                "encode+decode"
            };
            println!("{:<16} {:<14} {}", entry.name, entry.target, direction);
        }
        Ok(())
    }
}
