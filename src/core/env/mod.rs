// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! capture_environment(script, args, flags, runner)
//!   tempfile dump <-- shell: "<script> <args> && set > dump"
//!   decode + parse "KEY=VALUE" lines --> EnvSnapshot
//!
//! apply_snapshot(&EnvSnapshot, &mut dyn ProcessEnvironment)
//!   SystemEnvironment (std::env) | Env (copy-on-write BTreeMap)
//! ```
//!
//! - **Case-insensitive keys**: Windows semantics on every platform
//! - **Copy-on-write**: Clones share data until modified
//! - **UTF-8 internal**: Encoding at I/O boundaries only

pub mod apply;
pub mod capture;
pub mod container;
pub mod snapshot;
mod types;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    apply::SystemEnvironment::new().snapshot()
}
