// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Domain values with customized document representations.

pub mod endpoint;
pub mod result;

pub use endpoint::Endpoint;
pub use result::SuccessResult;
