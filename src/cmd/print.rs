// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `print` command: renders a captured environment as shell assignments.
//!
//! ```text
//! powershell   $env:INCLUDE = 'C:\VS\VC\include'
//!              ${env:ProgramFiles(x86)} = 'C:\Program Files (x86)'
//! cmd          set "INCLUDE=C:\VS\VC\include"
//! sh           export INCLUDE='C:\VS\VC\include'
//! json         { "INCLUDE": "C:\\VS\\VC\\include" }
//! ```

use std::fmt::Write as _;
use tracing::debug;

use crate::cli::toolchain::{PrintArgs, ShellFormat};
use crate::config::Config;
use crate::core::env::current_env;
use crate::core::env::snapshot::EnvSnapshot;
use crate::core::shell::SystemShell;
use crate::error::Result;
use crate::toolchain::invoker::capture_toolchain;

/// Captures the configured toolchain and prints its variables.
///
/// # Errors
///
/// Returns toolchain and capture errors, or a JSON serialization error.
pub fn run_print_command(args: &PrintArgs, config: &Config) -> Result<()> {
    let env = current_env();
    let (invocation, snapshot) =
        capture_toolchain(&config.catalog(), &config.request(), &env, &SystemShell::new())?;

    let snapshot = if args.all {
        snapshot
    } else {
        snapshot.changes_from(&env)
    };
    debug!(
        version = %invocation.version(),
        count = snapshot.len(),
        all = args.all,
        "printing captured variables"
    );

    let format = args.format.unwrap_or_else(ShellFormat::native);
    print!("{}", render(&snapshot, format)?);
    Ok(())
}

/// Renders `snapshot` in `format`, one assignment per line.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(snapshot: &EnvSnapshot, format: ShellFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        ShellFormat::Powershell => {
            for (key, value) in snapshot.iter() {
                let _ = writeln!(out, "{} = {}", powershell_name(key), powershell_quote(value));
            }
        }
        ShellFormat::Cmd => {
            for (key, value) in snapshot.iter() {
                let _ = writeln!(out, "set \"{key}={value}\"");
            }
        }
        ShellFormat::Sh => {
            for (key, value) in snapshot.iter() {
                if is_sh_name(key) {
                    let _ = writeln!(out, "export {key}={}", sh_quote(value));
                } else {
                    debug!(key, "skipping variable that is not a valid sh name");
                }
            }
        }
        ShellFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = snapshot
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                .collect();
            out = serde_json::to_string_pretty(&map)?;
            out.push('\n');
        }
    }
    Ok(out)
}

fn powershell_name(key: &str) -> String {
    if key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        format!("$env:{key}")
    } else {
        let escaped = key.replace('`', "``").replace('{', "`{").replace('}', "`}");
        format!("${{env:{escaped}}}")
    }
}

fn powershell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn is_sh_name(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn sh_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
