// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment capture and application.
//!
//! ```text
//!              core
//!               |
//!        +------+------+
//!        |             |
//!        v             v
//!       env          shell
//!        |             |
//!   Env, EnvSnapshot  ShellInvocation
//!   capture, apply    ShellRunner, SystemShell
//! ```

pub mod env;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_utils;
