// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `run` command: imports the toolchain into this process, then runs a
//! program that inherits it.

use anyhow::Context;
use std::process::{Command, ExitCode, ExitStatus};
use tracing::{debug, info};

use crate::cli::toolchain::RunArgs;
use crate::config::Config;
use crate::core::env::apply::SystemEnvironment;
use crate::core::shell::SystemShell;
use crate::error::Result;
use crate::toolchain::invoke;

/// Applies the toolchain environment and runs `args.program`.
///
/// The snapshot is applied before the child process is spawned.
///
/// # Errors
///
/// Returns toolchain, capture and apply errors, or an error if the program
/// cannot be started.
pub fn run_run_command(args: &RunArgs, config: &Config) -> Result<ExitCode> {
    let mut env = SystemEnvironment::new();
    let report = invoke(&config.catalog(), &config.request(), &mut env, &SystemShell::new())?;
    info!(
        version = %report.version,
        applied = report.applied,
        "imported toolchain environment"
    );

    let program = args.program.to_string_lossy();
    debug!(program = %program, args = ?args.args, "running program");
    let status = Command::new(&args.program)
        .args(&args.args)
        .status()
        .with_context(|| format!("failed to run '{program}'"))?;

    debug!(?status, "program finished");
    Ok(exit_code(status))
}

/// Maps a child exit status onto ours; codes outside `0..=255` and
/// signal terminations become 1.
fn exit_code(status: ExitStatus) -> ExitCode {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
