// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CaptureError, ConfigError, ToolchainError, VcEnvError, VcEnvResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "toolchain".to_string(),
        key: "version".to_string(),
        message: "unknown label".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'version' in section '[toolchain]': unknown label"
    );
}

#[test]
fn test_not_found_lists_checked_versions() {
    let err = ToolchainError::NotFound {
        checked: vec!["WindowsSDK7.1".to_string(), "2010".to_string()],
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"no supported toolchain found (checked: WindowsSDK7.1, 2010)"
    );
}

#[test]
fn test_boxed_conversion() {
    let err: VcEnvError = CaptureError::CommandFailed {
        script: "vcvarsall.bat".to_string(),
        code: 1,
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"capture error: setup script 'vcvarsall.bat' exited with code 1"
    );
}

#[test]
fn test_error_size() {
    let size = std::mem::size_of::<VcEnvError>();
    assert!(size <= 24, "VcEnvError is {size} bytes, expected <= 24");
}

#[test]
fn test_result_size() {
    let size = std::mem::size_of::<VcEnvResult<()>>();
    assert!(size <= 24, "VcEnvResult<()> is {size} bytes, expected <= 24");
}
