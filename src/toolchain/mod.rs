// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Toolchain catalog, detection and invocation.
//!
//! ```text
//!             toolchain
//!                 |
//!     +-------+---+-----+--------+
//!     |       |         |        |
//!     v       v         v        v
//!   types  catalog   locator  invoker
//!  Version  Spec      Rule    resolve
//!  Arch     BaseDir   Marker  capture_toolchain
//!  Config   Catalog   locate  invoke
//! ```

pub mod catalog;
pub mod invoker;
pub mod locator;
pub mod types;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use invoker::{ToolchainRequest, invoke};
pub use types::ToolchainVersion;
