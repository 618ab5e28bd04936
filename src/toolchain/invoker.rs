// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Toolchain resolution and the resolve → capture → apply pipeline.
//!
//! ```text
//! ToolchainRequest { version?, arch, configuration, allow_failure }
//!        |
//!        v
//! select_version()   explicit | locate(catalog.rules())
//!        |
//!        v
//! resolve()          base dir + script suffix, argument string, flags
//!   SDK:  "<config flag> <arch flag>"   e.g. "/debug /x86"  + DISCARD_STDERR
//!   VS:   "<arch token>"                e.g. "amd64"
//!        |
//!        v
//! capture_environment() --> apply_snapshot()
//! ```

use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::catalog::{BaseDir, Catalog, ToolchainSpec};
use super::locator::{SystemProbe, locate};
use super::types::{Arch, BuildConfiguration, ToolchainVersion};
use crate::core::env::apply::{ProcessEnvironment, apply_snapshot};
use crate::core::env::capture::capture_environment;
use crate::core::env::snapshot::EnvSnapshot;
use crate::core::shell::{CaptureFlags, ShellRunner};
use crate::error::{CaptureError, ToolchainError, VcEnvResult};

/// Architecture token used when none is given.
pub const DEFAULT_ARCH: &str = "amd64";

/// Configuration token used when none is given.
pub const DEFAULT_CONFIGURATION: &str = "release";

/// What the caller asked for.
#[derive(Debug, Clone, Builder)]
pub struct ToolchainRequest {
    /// Explicit toolchain; located automatically when unset.
    #[builder(setters(name = with_version))]
    version: Option<ToolchainVersion>,
    #[builder(into, setters(name = with_arch), default = DEFAULT_ARCH.to_string())]
    arch: String,
    #[builder(into, setters(name = with_configuration), default = DEFAULT_CONFIGURATION.to_string())]
    configuration: String,
    #[builder(setters(name = with_allow_failure), default = false)]
    allow_failure: bool,
}

impl Default for ToolchainRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ToolchainRequest {
    #[must_use]
    pub const fn version(&self) -> Option<ToolchainVersion> {
        self.version
    }

    #[must_use]
    pub fn arch(&self) -> &str {
        &self.arch
    }

    #[must_use]
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    #[must_use]
    pub const fn allow_failure(&self) -> bool {
        self.allow_failure
    }
}

/// A fully resolved setup script call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainInvocation {
    version: ToolchainVersion,
    script: PathBuf,
    args: String,
    flags: CaptureFlags,
}

impl ToolchainInvocation {
    #[must_use]
    pub const fn version(&self) -> ToolchainVersion {
        self.version
    }

    #[must_use]
    pub fn script(&self) -> &Path {
        &self.script
    }

    #[must_use]
    pub fn args(&self) -> &str {
        &self.args
    }

    #[must_use]
    pub const fn flags(&self) -> CaptureFlags {
        self.flags
    }

    /// Runs the script and returns the environment it leaves behind.
    ///
    /// # Errors
    ///
    /// See [`capture_environment`].
    pub fn capture(&self, runner: &dyn ShellRunner) -> Result<EnvSnapshot, CaptureError> {
        capture_environment(&self.script, &self.args, self.flags, runner)
    }
}

/// Outcome of [`invoke`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeReport {
    pub version: ToolchainVersion,
    pub script: PathBuf,
    pub applied: usize,
}

/// Resolves a toolchain spec into a concrete script call.
///
/// Nothing is executed here; every error is reported before any process
/// is started.
///
/// # Errors
///
/// - `InvalidArch` / `InvalidConfiguration`: SDK tokens other than
///   `amd64`/`x86` and `release`/`debug`.
/// - `NotInstalled`: the version's base environment variable is unset.
pub fn resolve(
    spec: &ToolchainSpec,
    arch: &str,
    configuration: &str,
    env: &dyn ProcessEnvironment,
) -> Result<ToolchainInvocation, ToolchainError> {
    let version = spec.version();

    let (args, flags) = if version.is_sdk() {
        let configuration = BuildConfiguration::from_token(version, configuration)?;
        let arch = Arch::from_token(version, arch)?;
        debug!(
            version = %version,
            arch = %arch,
            configuration = %configuration,
            "translated SDK arguments"
        );
        (
            format!("{} {}", configuration.sdk_flag(), arch.sdk_flag()),
            CaptureFlags::DISCARD_STDERR,
        )
    } else {
        (arch.to_string(), CaptureFlags::empty())
    };

    let base = match spec.base() {
        BaseDir::Fixed(path) => path.clone(),
        BaseDir::EnvVar(name) => {
            env.get(name)
                .map(PathBuf::from)
                .ok_or_else(|| ToolchainError::NotInstalled {
                    version: version.label().to_string(),
                    env_var: name.clone(),
                })?
        }
    };

    Ok(ToolchainInvocation {
        version,
        script: spec.script_path(&base),
        args,
        flags,
    })
}

/// Returns the requested version, or the highest-priority installed one.
///
/// # Errors
///
/// Returns `ToolchainError::NotFound` when nothing is requested and no
/// toolchain is installed.
pub fn select_version(
    catalog: &Catalog,
    request: &ToolchainRequest,
    env: &dyn ProcessEnvironment,
) -> Result<ToolchainVersion, ToolchainError> {
    match request.version {
        Some(version) => Ok(version),
        None => locate(&catalog.rules(), &SystemProbe::new(env)),
    }
}

/// Selects and resolves the toolchain for `request`.
///
/// # Errors
///
/// See [`select_version`] and [`resolve`].
pub fn prepare(
    catalog: &Catalog,
    request: &ToolchainRequest,
    env: &dyn ProcessEnvironment,
) -> Result<ToolchainInvocation, ToolchainError> {
    let version = select_version(catalog, request, env)?;
    let spec = catalog
        .get(version)
        .ok_or_else(|| ToolchainError::NotFound {
            checked: catalog.iter().map(|s| s.version().label().to_string()).collect(),
        })?;

    let mut invocation = resolve(spec, &request.arch, &request.configuration, env)?;
    if request.allow_failure {
        invocation.flags |= CaptureFlags::ALLOW_FAILURE;
    }
    Ok(invocation)
}

/// Resolves the toolchain and captures its environment without applying it.
///
/// # Errors
///
/// Returns toolchain errors before anything runs, or capture errors from
/// running the script.
pub fn capture_toolchain(
    catalog: &Catalog,
    request: &ToolchainRequest,
    env: &dyn ProcessEnvironment,
    runner: &dyn ShellRunner,
) -> VcEnvResult<(ToolchainInvocation, EnvSnapshot)> {
    let invocation = prepare(catalog, request, env)?;
    info!(
        version = %invocation.version(),
        script = %invocation.script().display(),
        args = invocation.args(),
        "running toolchain setup script"
    );
    let snapshot = invocation.capture(runner)?;
    Ok((invocation, snapshot))
}

/// Resolve → capture → apply.
///
/// # Errors
///
/// Returns the first error of any stage. A failure while applying leaves
/// the entries before it applied.
pub fn invoke(
    catalog: &Catalog,
    request: &ToolchainRequest,
    env: &mut dyn ProcessEnvironment,
    runner: &dyn ShellRunner,
) -> VcEnvResult<InvokeReport> {
    let (invocation, snapshot) = capture_toolchain(catalog, request, &*env, runner)?;
    let applied = apply_snapshot(&snapshot, env)?;

    Ok(InvokeReport {
        version: invocation.version,
        script: invocation.script,
        applied,
    })
}
