// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for vcenv.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. vcenv.toml (cwd, optional)
//! 3. --ini files
//! 4. VCENV_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VCENV_GLOBAL__OUTPUT_LOG_LEVEL=4   → global.output_log_level = 4
//! VCENV_TOOLCHAIN__VERSION=2013      → toolchain.version = "2013"
//! VCENV_TOOLCHAIN__SDK_ROOT=D:\sdk   → toolchain.sdk_root = "D:\sdk"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::toolchain::{Catalog, ToolchainRequest};

use loader::ConfigLoader;
use types::{GlobalConfig, ToolchainConfig};

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vcenv.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "VCENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Toolchain defaults.
    pub toolchain: ToolchainConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vcenv::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("vcenv.toml")
    ///     .with_env_prefix("VCENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty arch or configuration
    /// token.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (key, value) in [
            ("arch", &self.toolchain.arch),
            ("configuration", &self.toolchain.configuration),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "toolchain".to_string(),
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Builtin catalog rooted at the configured SDK directory.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::builtin(&self.toolchain.sdk_root)
    }

    /// Toolchain request carrying the configured defaults.
    #[must_use]
    pub fn request(&self) -> ToolchainRequest {
        ToolchainRequest::builder()
            .maybe_with_version(self.toolchain.version)
            .with_arch(self.toolchain.arch.clone())
            .with_configuration(self.toolchain.configuration.clone())
            .with_allow_failure(self.toolchain.allow_failure)
            .build()
    }

    /// Format configuration options for display, ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_toolchain_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            u8::from(self.global.output_log_level).to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            u8::from(self.global.file_log_level).to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(|| "none".to_string(), |p| p.display().to_string()),
        );
    }

    fn format_toolchain_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "toolchain.version".into(),
            self.toolchain
                .version
                .map_or_else(|| "auto".to_string(), |v| v.label().to_string()),
        );
        options.insert("toolchain.arch".into(), self.toolchain.arch.clone());
        options.insert(
            "toolchain.configuration".into(),
            self.toolchain.configuration.clone(),
        );
        options.insert(
            "toolchain.allow_failure".into(),
            self.toolchain.allow_failure.to_string(),
        );
        options.insert(
            "toolchain.sdk_root".into(),
            self.toolchain.sdk_root.display().to_string(),
        );
    }
}
