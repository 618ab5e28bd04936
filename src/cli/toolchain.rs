// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Toolchain selection arguments shared by `print` and `run`.
//!
//! # Flag Effects
//!
//! ```text
//! -t/--toolchain VERSION   → toolchain.version      (unset: locate)
//! -a/--arch ARCH           → toolchain.arch
//! -c/--configuration CFG   → toolchain.configuration
//! --allow-failure          → toolchain.allow_failure
//! ```

use clap::{Args, ValueEnum};
use std::ffi::OsString;

use crate::toolchain::ToolchainVersion;

/// Toolchain selection.
#[derive(Debug, Clone, Default, Args)]
pub struct ToolchainArgs {
    /// Toolchain version: WindowsSDK7.1, 2015, 2013, 2012, 2010 or 2008.
    /// The highest-priority installed one is used when omitted.
    #[arg(short = 't', long = "toolchain", value_name = "VERSION")]
    pub version: Option<ToolchainVersion>,

    /// Target architecture, passed to vcvarsall.bat as is.
    /// The Windows SDK only accepts amd64 and x86.
    #[arg(short = 'a', long = "arch", value_name = "ARCH")]
    pub arch: Option<String>,

    /// Build configuration for the Windows SDK (release or debug).
    #[arg(short = 'c', long = "configuration", value_name = "CONFIG")]
    pub configuration: Option<String>,

    /// Continues with an empty environment if the setup script fails.
    #[arg(long = "allow-failure")]
    pub allow_failure: bool,
}

impl ToolchainArgs {
    /// Converts the flags to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = Vec::new();

        if let Some(version) = self.version {
            overrides.push(format!("toolchain/version={}", version.label()));
        }
        if let Some(ref arch) = self.arch {
            overrides.push(format!("toolchain/arch={arch}"));
        }
        if let Some(ref configuration) = self.configuration {
            overrides.push(format!("toolchain/configuration={configuration}"));
        }
        if self.allow_failure {
            overrides.push("toolchain/allow_failure=true".to_string());
        }

        overrides
    }
}

/// Arguments for the `print` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PrintArgs {
    #[command(flatten)]
    pub toolchain: ToolchainArgs,

    /// Output syntax. Defaults to powershell on Windows and sh elsewhere.
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<ShellFormat>,

    /// Prints every captured variable, not only the ones that change.
    #[arg(long)]
    pub all: bool,
}

/// Output syntax for `print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellFormat {
    /// `$env:NAME = 'value'`
    Powershell,
    /// `set "NAME=value"`
    Cmd,
    /// `export NAME='value'`
    Sh,
    /// A JSON object.
    Json,
}

impl ShellFormat {
    /// Format of the platform's default shell.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) { Self::Powershell } else { Self::Sh }
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub toolchain: ToolchainArgs,

    /// Program to run.
    #[arg(value_name = "PROGRAM", required = true)]
    pub program: OsString,

    /// Arguments passed to the program.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}
