// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod address;
mod codecs;
mod result;

pub use address::AddressCmd;
pub use codecs::CodecsCmd;
pub use result::ResultCmd;
