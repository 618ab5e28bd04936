// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! First-match-wins toolchain detection.
//!
//! ```text
//! rules (priority order)          probe
//!   [File SetEnv.cmd]  -> SDK7.1    env_var_exists()
//!   [Env VS140COMNTOOLS] -> 2015    file_exists()
//!   ...
//!   [Env VS90COMNTOOLS]  -> 2008
//!        |
//!        v
//!   first rule whose markers all hold | NotFound { checked }
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::types::ToolchainVersion;
use crate::core::env::apply::ProcessEnvironment;
use crate::error::ToolchainError;

/// Something whose presence indicates an installed toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// The environment variable is set.
    EnvVar(String),
    /// The file exists.
    File(PathBuf),
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(name) => write!(f, "%{name}%"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A locator rule: `version` is selected when every marker is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    version: ToolchainVersion,
    markers: Vec<Marker>,
}

impl Rule {
    #[must_use]
    pub const fn new(version: ToolchainVersion, markers: Vec<Marker>) -> Self {
        Self { version, markers }
    }

    #[must_use]
    pub const fn version(&self) -> ToolchainVersion {
        self.version
    }

    /// Returns true if every marker holds. A rule without markers never matches.
    pub fn matches(&self, probe: &dyn MarkerProbe) -> bool {
        !self.markers.is_empty() && self.markers.iter().all(|m| probe.holds(m))
    }
}

/// Answers "is this marker present" questions.
pub trait MarkerProbe {
    fn env_var_exists(&self, name: &str) -> bool;

    fn file_exists(&self, path: &Path) -> bool;

    fn holds(&self, marker: &Marker) -> bool {
        match marker {
            Marker::EnvVar(name) => self.env_var_exists(name),
            Marker::File(path) => self.file_exists(path),
        }
    }
}

/// Probes a process environment and the real filesystem.
pub struct SystemProbe<'a> {
    env: &'a dyn ProcessEnvironment,
}

impl<'a> SystemProbe<'a> {
    #[must_use]
    pub const fn new(env: &'a dyn ProcessEnvironment) -> Self {
        Self { env }
    }
}

impl MarkerProbe for SystemProbe<'_> {
    fn env_var_exists(&self, name: &str) -> bool {
        self.env.contains(name)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Returns the version of the first rule whose markers all hold.
///
/// Rules are evaluated strictly in order; later rules are not consulted once
/// one matches.
///
/// # Errors
///
/// Returns `ToolchainError::NotFound` with every checked version when no
/// rule matches.
pub fn locate(rules: &[Rule], probe: &dyn MarkerProbe) -> Result<ToolchainVersion, ToolchainError> {
    for rule in rules {
        trace!(version = %rule.version, "checking toolchain markers");
        if rule.matches(probe) {
            debug!(version = %rule.version, "located toolchain");
            return Ok(rule.version);
        }
    }

    Err(ToolchainError::NotFound {
        checked: rules.iter().map(|r| r.version.label().to_string()).collect(),
    })
}
