// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config, locate, list, print, run
//! ```

pub mod config;
pub mod locate;
pub mod print;
pub mod run;

#[cfg(test)]
mod tests;
