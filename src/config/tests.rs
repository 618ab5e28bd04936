// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use crate::toolchain::ToolchainVersion;

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.file_log_level   = 5
    global.log_file         = none
    global.output_log_level = 3
    toolchain.allow_failure = false
    toolchain.arch          = amd64
    toolchain.configuration = release
    toolchain.sdk_root      = C:\Program Files\Microsoft SDKs\Windows\v7.1
    toolchain.version       = auto
    ");
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
}

#[test]
fn test_parse_toolchain_section() {
    let config = Config::parse(
        r#"
        [toolchain]
        version = "WindowsSDK7.1"
        arch = "x86"
        configuration = "debug"
        allow_failure = true
        sdk_root = "D:/sdk"
        "#,
    )
    .unwrap();

    assert_eq!(config.toolchain.version, Some(ToolchainVersion::WindowsSdk71));
    assert_eq!(config.toolchain.arch, "x86");
    assert_eq!(config.toolchain.configuration, "debug");
    assert!(config.toolchain.allow_failure);
    assert_eq!(config.toolchain.sdk_root, PathBuf::from("D:/sdk"));
}

#[test]
fn test_parse_global_section() {
    let config = Config::parse(
        r#"
        [global]
        output_log_level = 4
        log_file = "vcenv.log"
        "#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, Some(PathBuf::from("vcenv.log")));
}

#[test]
fn test_unknown_version_rejected() {
    let err = Config::parse("[toolchain]\nversion = \"2019\"\n").unwrap_err();
    assert!(err.to_string().contains("2019"), "got: {err}");
}

#[test]
fn test_unknown_field_rejected() {
    assert!(Config::parse("[toolchain]\nflavour = \"x\"\n").is_err());
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_empty_arch_rejected() {
    let err = Config::parse("[toolchain]\narch = \"\"\n").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'arch' in section '[toolchain]': must not be empty"
    );
}

#[test]
fn test_set_overrides_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[toolchain]\narch = \"x86\"\n")
        .set_option("toolchain/arch=amd64")
        .unwrap()
        .set_option("toolchain.version=2013")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.toolchain.arch, "amd64");
    assert_eq!(config.toolchain.version, Some(ToolchainVersion::Vs2013));
}

#[test]
fn test_set_option_requires_section() {
    assert!(ConfigLoader::new().set_option("arch=x86").is_err());
    assert!(ConfigLoader::new().set_option("toolchain/arch").is_err());
}

#[test]
fn test_request_from_config() {
    let mut config = Config::default();
    config.toolchain.version = Some(ToolchainVersion::Vs2012);
    config.toolchain.arch = "x86".to_string();
    config.toolchain.allow_failure = true;

    let request = config.request();

    assert_eq!(request.version(), Some(ToolchainVersion::Vs2012));
    assert_eq!(request.arch(), "x86");
    assert_eq!(request.configuration(), "release");
    assert!(request.allow_failure());
}

#[test]
fn test_loaded_files_tracking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vcenv.toml");
    std::fs::write(&path, "[toolchain]\narch = \"x86\"\n").unwrap();
    let missing = dir.path().join("missing.toml");

    let loader = ConfigLoader::new()
        .add_toml_file(&path)
        .add_toml_file_optional(&missing);

    assert_eq!(loader.loaded_files(), vec![("file".to_string(), path.clone())]);
    assert_eq!(
        loader.format_loaded_files(),
        vec![format!("1. [file] {}", path.display())]
    );
    assert_eq!(loader.build().unwrap().toolchain.arch, "x86");
}

#[test]
fn test_missing_required_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("nope.toml")).is_err());
}

#[test]
fn test_loader_validates_merged_config() {
    let err = ConfigLoader::new()
        .add_toml_str("[toolchain]\nconfiguration = \"debug\"\n")
        .set_option("toolchain/configuration=")
        .unwrap()
        .build()
        .unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'configuration' in section '[toolchain]': must not be empty"
    );
}
