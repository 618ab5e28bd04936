// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `locate` and `list` commands.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::env::apply::ProcessEnvironment;
use crate::core::env::current_env;
use crate::error::Result;
use crate::toolchain::ToolchainVersion;
use crate::toolchain::catalog::{BaseDir, Catalog};
use crate::toolchain::locator::{MarkerProbe, Rule, SystemProbe, locate};

/// One row of `vcenv list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub version: ToolchainVersion,
    /// Setup script, when its base directory is known.
    pub script: Option<PathBuf>,
    /// Whether every marker of the toolchain is present.
    pub installed: bool,
}

/// Describes every catalog entry, in priority order.
#[must_use]
pub fn list_entries(
    catalog: &Catalog,
    env: &dyn ProcessEnvironment,
    probe: &dyn MarkerProbe,
) -> Vec<ListEntry> {
    catalog
        .iter()
        .map(|spec| {
            let script = match spec.base() {
                BaseDir::Fixed(path) => Some(spec.script_path(path)),
                BaseDir::EnvVar(name) => env.get(name).map(|base| spec.script_path(Path::new(&base))),
            };
            ListEntry {
                version: spec.version(),
                script,
                installed: Rule::new(spec.version(), spec.markers().to_vec()).matches(probe),
            }
        })
        .collect()
}

/// Formats entries as aligned `version  status  script` lines.
#[must_use]
pub fn format_entries(entries: &[ListEntry]) -> Vec<String> {
    let width = entries
        .iter()
        .map(|e| e.version.label().len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let status = if entry.installed { "installed" } else { "missing" };
            let script = entry
                .script
                .as_ref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string());
            format!(
                "{:<width$}  {status:<9}  {script}",
                entry.version.label()
            )
        })
        .collect()
}

/// Prints the highest-priority installed toolchain.
///
/// # Errors
///
/// Returns `ToolchainError::NotFound` when nothing is installed.
pub fn run_locate_command(config: &Config) -> Result<()> {
    let env = current_env();
    let version = locate(&config.catalog().rules(), &SystemProbe::new(&env))?;
    println!("{version}");
    Ok(())
}

/// Prints every supported toolchain and whether it is installed.
pub fn run_list_command(config: &Config) {
    let env = current_env();
    let entries = list_entries(&config.catalog(), &env, &SystemProbe::new(&env));
    for line in format_entries(&entries) {
        println!("{line}");
    }
}
