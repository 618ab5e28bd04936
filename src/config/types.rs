// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for vcenv.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ToolchainConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::toolchain::ToolchainVersion;
use crate::toolchain::catalog::DEFAULT_SDK_ROOT;
use crate::toolchain::invoker::{DEFAULT_ARCH, DEFAULT_CONFIGURATION};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console (stderr) output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file log when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Toolchain selection defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Toolchain to use; located automatically when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ToolchainVersion>,
    /// Architecture token (`amd64`, `x86`, or anything vcvarsall accepts).
    pub arch: String,
    /// Configuration token for the Windows SDK (`release` or `debug`).
    pub configuration: String,
    /// Continue with an empty environment when the setup script fails.
    pub allow_failure: bool,
    /// Install directory of the Windows SDK 7.1.
    pub sdk_root: PathBuf,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            version: None,
            arch: DEFAULT_ARCH.to_string(),
            configuration: DEFAULT_CONFIGURATION.to_string(),
            allow_failure: false,
            sdk_root: PathBuf::from(DEFAULT_SDK_ROOT),
        }
    }
}
