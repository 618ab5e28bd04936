// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Toolchain identifiers and SDK argument tokens.
//!
//! ```text
//! ToolchainVersion: WindowsSDK7.1 | 2015 | 2013 | 2012 | 2010 | 2008
//! Arch (SDK only):          amd64 → /x64      x86 → /x86
//! BuildConfiguration (SDK): release → /release  debug → /debug
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ToolchainError;

/// A supported toolchain, identified by its version label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolchainVersion {
    /// Windows SDK 7.1 (`SetEnv.cmd`)
    WindowsSdk71,
    /// Visual Studio 2015 (`VS140COMNTOOLS`)
    Vs2015,
    /// Visual Studio 2013 (`VS120COMNTOOLS`)
    Vs2013,
    /// Visual Studio 2012 (`VS110COMNTOOLS`)
    Vs2012,
    /// Visual Studio 2010 (`VS100COMNTOOLS`)
    Vs2010,
    /// Visual Studio 2008 (`VS90COMNTOOLS`)
    Vs2008,
}

impl ToolchainVersion {
    /// Every version, in locator priority order.
    pub const ALL: [Self; 6] = [
        Self::WindowsSdk71,
        Self::Vs2015,
        Self::Vs2013,
        Self::Vs2012,
        Self::Vs2010,
        Self::Vs2008,
    ];

    /// The label users type and the locator reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WindowsSdk71 => "WindowsSDK7.1",
            Self::Vs2015 => "2015",
            Self::Vs2013 => "2013",
            Self::Vs2012 => "2012",
            Self::Vs2010 => "2010",
            Self::Vs2008 => "2008",
        }
    }

    /// Returns true for the standalone Windows SDK, whose script takes
    /// translated `/flag` arguments.
    #[must_use]
    pub const fn is_sdk(self) -> bool {
        matches!(self, Self::WindowsSdk71)
    }

    fn expected_labels() -> String {
        Self::ALL
            .iter()
            .map(|v| v.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ToolchainVersion {
    type Err = ToolchainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ToolchainError::UnknownVersion {
                label: s.to_string(),
                expected: Self::expected_labels(),
            })
    }
}

impl Serialize for ToolchainVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ToolchainVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Target architecture accepted by the Windows SDK script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 32-bit x86
    X86,
    /// 64-bit x86-64
    X64,
}

impl Arch {
    /// Parses a generic architecture token (`amd64` or `x86`).
    ///
    /// # Errors
    ///
    /// Returns `ToolchainError::InvalidArch` for any other token.
    pub fn from_token(version: ToolchainVersion, token: &str) -> Result<Self, ToolchainError> {
        if token.eq_ignore_ascii_case("amd64") {
            Ok(Self::X64)
        } else if token.eq_ignore_ascii_case("x86") {
            Ok(Self::X86)
        } else {
            Err(ToolchainError::InvalidArch {
                version: version.label().to_string(),
                token: token.to_string(),
            })
        }
    }

    /// Returns the `SetEnv.cmd` flag.
    #[must_use]
    pub const fn sdk_flag(self) -> &'static str {
        match self {
            Self::X86 => "/x86",
            Self::X64 => "/x64",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X86 => write!(f, "x86"),
            Self::X64 => write!(f, "x64"),
        }
    }
}

/// Build configuration accepted by the Windows SDK script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildConfiguration {
    Debug,
    #[default]
    Release,
}

impl BuildConfiguration {
    /// Parses a configuration token (`release` or `debug`).
    ///
    /// # Errors
    ///
    /// Returns `ToolchainError::InvalidConfiguration` for any other token.
    pub fn from_token(version: ToolchainVersion, token: &str) -> Result<Self, ToolchainError> {
        if token.eq_ignore_ascii_case("release") {
            Ok(Self::Release)
        } else if token.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else {
            Err(ToolchainError::InvalidConfiguration {
                version: version.label().to_string(),
                token: token.to_string(),
            })
        }
    }

    /// Returns the `SetEnv.cmd` flag.
    #[must_use]
    pub const fn sdk_flag(self) -> &'static str {
        match self {
            Self::Debug => "/debug",
            Self::Release => "/release",
        }
    }
}

impl std::fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "Debug"),
            Self::Release => write!(f, "Release"),
        }
    }
}
