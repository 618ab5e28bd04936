// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for vcenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! vcenv [global options] <command>
//! locate
//! list
//! print [-t VERSION] [-a ARCH] [-c CONFIG] [-f FORMAT] [--all]
//! run   [-t VERSION] [-a ARCH] [-c CONFIG] -- PROGRAM [ARGS...]
//! config
//! version
//! ```

pub mod global;
pub mod toolchain;


use crate::cli::global::GlobalOptions;
use crate::cli::toolchain::{PrintArgs, RunArgs};
use clap::{Parser, Subcommand};

/// Visual C++ toolchain environment importer
///
/// Runs a Visual Studio or Windows SDK setup script and imports the
/// environment it leaves behind.
#[derive(Debug, Parser)]
#[command(
    name = "vcenv",
    author,
    version,
    about = "Visual C++ toolchain environment importer",
    long_about = "vcenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs vcvarsall.bat (Visual Studio 2008-2015) or SetEnv.cmd\n\
                  (Windows SDK 7.1) and imports the resulting environment.\n\n\
                  `vcenv print | Invoke-Expression` imports it into PowerShell,\n\
                  `vcenv run -- cl /?` runs a program inside it. See\n\
                  `vcenv <command> --help` for more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  vcenv reads `vcenv.toml` from the current directory if present,\n\
                  then every --ini file in order, then VCENV_<SECTION>__<KEY>\n\
                  environment variables, then --set overrides."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Prints the highest-priority installed toolchain.
    Locate,

    /// Lists supported toolchains and whether they are installed.
    List,

    /// Prints the toolchain environment as shell assignments.
    Print(PrintArgs),

    /// Runs a program inside the toolchain environment.
    Run(RunArgs),

    /// Lists all options and their values.
    Config,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
