// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Known toolchains: where they live and how to recognize them.
//!
//! ```text
//! version        base dir                      script suffix
//! WindowsSDK7.1  <sdk_root>                    Bin\SetEnv.cmd
//! 2015           %VS140COMNTOOLS%              ..\..\VC\vcvarsall.bat
//! 2013           %VS120COMNTOOLS%              ..\..\VC\vcvarsall.bat
//! 2012           %VS110COMNTOOLS%              ..\..\VC\vcvarsall.bat
//! 2010           %VS100COMNTOOLS%              ..\..\VC\vcvarsall.bat
//! 2008           %VS90COMNTOOLS%               ..\..\VC\vcvarsall.bat
//! ```

use std::path::{Path, PathBuf};

use super::locator::{Marker, Rule};
use super::types::ToolchainVersion;

/// Default install location of the Windows SDK 7.1.
pub const DEFAULT_SDK_ROOT: &str = r"C:\Program Files\Microsoft SDKs\Windows\v7.1";

const VCVARSALL: &[&str] = &["..", "..", "VC", "vcvarsall.bat"];
const SETENV: &[&str] = &["Bin", "SetEnv.cmd"];

/// Where a toolchain's base directory comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseDir {
    /// Value of an environment variable set by the toolchain installer.
    EnvVar(String),
    /// A fixed install path.
    Fixed(PathBuf),
}

/// Static description of one toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainSpec {
    version: ToolchainVersion,
    base: BaseDir,
    script: &'static [&'static str],
    markers: Vec<Marker>,
}

impl ToolchainSpec {
    #[must_use]
    pub const fn version(&self) -> ToolchainVersion {
        self.version
    }

    #[must_use]
    pub const fn base(&self) -> &BaseDir {
        &self.base
    }

    /// Markers that must all be present for the locator to pick this toolchain.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Joins the script suffix onto `base`, component by component.
    #[must_use]
    pub fn script_path(&self, base: &Path) -> PathBuf {
        self.script
            .iter()
            .fold(base.to_path_buf(), |path, part| path.join(part))
    }
}

/// The ordered set of toolchains `vcenv` knows about.
#[derive(Debug, Clone)]
pub struct Catalog {
    specs: Vec<ToolchainSpec>,
}

impl Catalog {
    /// Builds the built-in catalog, in locator priority order.
    #[must_use]
    pub fn builtin(sdk_root: &Path) -> Self {
        let sdk = ToolchainSpec {
            version: ToolchainVersion::WindowsSdk71,
            base: BaseDir::Fixed(sdk_root.to_path_buf()),
            script: SETENV,
            markers: Vec::new(),
        };
        let sdk = ToolchainSpec {
            markers: vec![Marker::File(sdk.script_path(sdk_root))],
            ..sdk
        };

        let visual_studio = [
            (ToolchainVersion::Vs2015, "VS140COMNTOOLS"),
            (ToolchainVersion::Vs2013, "VS120COMNTOOLS"),
            (ToolchainVersion::Vs2012, "VS110COMNTOOLS"),
            (ToolchainVersion::Vs2010, "VS100COMNTOOLS"),
            (ToolchainVersion::Vs2008, "VS90COMNTOOLS"),
        ]
        .into_iter()
        .map(|(version, var)| ToolchainSpec {
            version,
            base: BaseDir::EnvVar(var.to_string()),
            script: VCVARSALL,
            markers: vec![Marker::EnvVar(var.to_string())],
        });

        Self {
            specs: std::iter::once(sdk).chain(visual_studio).collect(),
        }
    }

    /// Looks up the spec for `version`.
    #[must_use]
    pub fn get(&self, version: ToolchainVersion) -> Option<&ToolchainSpec> {
        self.specs.iter().find(|s| s.version == version)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolchainSpec> {
        self.specs.iter()
    }

    /// Locator rules, one per toolchain, in catalog order.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        self.specs
            .iter()
            .map(|s| Rule::new(s.version, s.markers.clone()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin(Path::new(DEFAULT_SDK_ROOT))
    }
}
