// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!         VcEnvError (16 bytes)
//!                 |
//!   +--------+----+----+--------+
//!   |        |         |        |
//!   v        v         v        v
//! Toolchain Capture   Env     Config
//!   Box      Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Toolchain  UnknownVersion, InvalidArch, InvalidConfiguration,
//!              NotFound, NotInstalled
//!   Capture    TempFile, ShellNotFound, Spawn, CommandFailed,
//!              Terminated, ReadDump
//!   Env        InvalidKey, InvalidValue
//!   Config     ParseError, InvalidValue
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VcEnvError`].
pub type VcEnvResult<T> = std::result::Result<T, VcEnvError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum VcEnvError {
    /// Toolchain selection or resolution failed.
    #[error("toolchain error: {0}")]
    Toolchain(#[from] Box<ToolchainError>),

    /// Running the setup script or reading its dump failed.
    #[error("capture error: {0}")]
    Capture(#[from] Box<CaptureError>),

    /// Writing into the process environment failed.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VcEnvError {
                fn from(err: $error) -> Self {
                    VcEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ToolchainError => Toolchain,
    CaptureError => Capture,
    EnvError => Env,
    ConfigError => Config,
}

// --- Toolchain Errors ---

/// Toolchain selection and resolution errors.
///
/// Every variant is raised before any external process is started.
#[derive(Debug, Error)]
pub enum ToolchainError {
    /// Version label is not one of the known toolchains.
    #[error("unknown toolchain version '{label}' (expected one of: {expected})")]
    UnknownVersion { label: String, expected: String },

    /// Architecture token cannot be translated for this toolchain.
    #[error("invalid architecture '{token}' for {version} (expected 'amd64' or 'x86')")]
    InvalidArch { version: String, token: String },

    /// Configuration token cannot be translated for this toolchain.
    #[error("invalid configuration '{token}' for {version} (expected 'release' or 'debug')")]
    InvalidConfiguration { version: String, token: String },

    /// No installed toolchain matched any locator rule.
    #[error("no supported toolchain found (checked: {})", checked.join(", "))]
    NotFound { checked: Vec<String> },

    /// The toolchain was selected explicitly but its base variable is unset.
    #[error("toolchain {version} is not installed: environment variable {env_var} is not set")]
    NotInstalled { version: String, env_var: String },
}

// --- Capture Errors ---

/// Errors raised while running a setup script and harvesting its environment.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Failed to create the temporary dump file.
    #[error("failed to create temporary environment dump: {0}")]
    TempFile(#[source] std::io::Error),

    /// No usable shell was found.
    #[error("shell not found: '{name}' (not in PATH)")]
    ShellNotFound { name: String },

    /// Failed to spawn the shell.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The setup script (or the dump step chained after it) failed.
    #[error("setup script '{script}' exited with code {code}")]
    CommandFailed { script: String, code: i32 },

    /// The shell was terminated without an exit code.
    #[error("setup script '{script}' was terminated by a signal")]
    Terminated { script: String },

    /// The dump file could not be read back.
    #[error("failed to read environment dump '{path}': {source}")]
    ReadDump {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Environment Errors ---

/// Errors raised when writing into a process environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Key is empty or contains `=` or NUL.
    #[error("invalid environment variable name '{key}'")]
    InvalidKey { key: String },

    /// Value contains a NUL byte.
    #[error("invalid value for environment variable '{key}': contains NUL")]
    InvalidValue { key: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
