// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::catalog::{BaseDir, Catalog};
use super::invoker::{ToolchainRequest, capture_toolchain, invoke, prepare, resolve};
use super::locator::{Marker, MarkerProbe, Rule, locate};
use super::types::ToolchainVersion;
use crate::core::env::container::Env;
use crate::core::shell::CaptureFlags;
use crate::core::test_utils::FakeShell;
use crate::error::{ToolchainError, VcEnvError};

/// Marker probe backed by fixed sets.
#[derive(Default)]
struct FakeProbe {
    vars: BTreeSet<String>,
    files: BTreeSet<PathBuf>,
}

impl MarkerProbe for FakeProbe {
    fn env_var_exists(&self, name: &str) -> bool {
        self.vars.contains(name)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

fn vs100_env() -> Env {
    Env::from_pairs([(
        "VS100COMNTOOLS",
        r"C:\Program Files (x86)\Microsoft Visual Studio 10.0\Common7\Tools\",
    )])
}

// =============================================================================
// Version labels
// =============================================================================

#[test]
fn test_version_labels_round_trip() {
    for version in ToolchainVersion::ALL {
        assert_eq!(version.label().parse::<ToolchainVersion>().unwrap(), version);
    }
    assert_eq!(
        "windowssdk7.1".parse::<ToolchainVersion>().unwrap(),
        ToolchainVersion::WindowsSdk71
    );
}

#[test]
fn test_unknown_version_rejected() {
    let err = "2019".parse::<ToolchainVersion>().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"unknown toolchain version '2019' (expected one of: WindowsSDK7.1, 2015, 2013, 2012, 2010, 2008)"
    );
}

// =============================================================================
// Locator
// =============================================================================

#[test]
fn test_locator_priority_all_combinations() {
    let versions = [
        ToolchainVersion::WindowsSdk71,
        ToolchainVersion::Vs2013,
        ToolchainVersion::Vs2012,
        ToolchainVersion::Vs2010,
    ];
    let rules: Vec<Rule> = versions
        .iter()
        .enumerate()
        .map(|(i, v)| Rule::new(*v, vec![Marker::EnvVar(format!("MARKER_{i}"))]))
        .collect();

    for mask in 0u32..16 {
        let probe = FakeProbe {
            vars: (0u32..4)
                .filter(|i| mask & (1u32 << *i) != 0)
                .map(|i| format!("MARKER_{i}"))
                .collect(),
            ..FakeProbe::default()
        };

        let result = locate(&rules, &probe);

        if mask == 0 {
            match result {
                Err(ToolchainError::NotFound { checked }) => {
                    assert_eq!(checked, ["WindowsSDK7.1", "2013", "2012", "2010"]);
                }
                other => panic!("mask 0: expected NotFound, got {other:?}"),
            }
        } else {
            let first = mask.trailing_zeros() as usize;
            assert_eq!(result.unwrap(), versions[first], "mask {mask:04b}");
        }
    }
}

#[test]
fn test_locator_requires_all_markers() {
    let rules = [
        Rule::new(
            ToolchainVersion::WindowsSdk71,
            vec![
                Marker::EnvVar("MSSDK".to_string()),
                Marker::File(PathBuf::from(r"C:\SDK\Bin\SetEnv.cmd")),
            ],
        ),
        Rule::new(
            ToolchainVersion::Vs2010,
            vec![Marker::EnvVar("VS100COMNTOOLS".to_string())],
        ),
    ];

    let env_only = FakeProbe {
        vars: ["MSSDK", "VS100COMNTOOLS"].map(String::from).into(),
        ..FakeProbe::default()
    };
    assert_eq!(locate(&rules, &env_only).unwrap(), ToolchainVersion::Vs2010);

    let both = FakeProbe {
        files: [PathBuf::from(r"C:\SDK\Bin\SetEnv.cmd")].into(),
        ..env_only
    };
    assert_eq!(locate(&rules, &both).unwrap(), ToolchainVersion::WindowsSdk71);
}

#[test]
fn test_builtin_catalog_order() {
    let catalog = Catalog::default();
    let order: Vec<_> = catalog.rules().iter().map(|r| r.version().label()).collect();
    assert_eq!(order, ["WindowsSDK7.1", "2015", "2013", "2012", "2010", "2008"]);
}

#[test]
fn test_builtin_sdk_marker_wins_over_visual_studio() {
    let catalog = Catalog::builtin(Path::new(r"C:\SDK"));
    let probe = FakeProbe {
        vars: ["VS140COMNTOOLS", "VS100COMNTOOLS"].map(String::from).into(),
        files: [Path::new(r"C:\SDK").join("Bin").join("SetEnv.cmd")].into(),
    };
    assert_eq!(
        locate(&catalog.rules(), &probe).unwrap(),
        ToolchainVersion::WindowsSdk71
    );

    let no_sdk = FakeProbe {
        files: BTreeSet::new(),
        ..probe
    };
    assert_eq!(locate(&catalog.rules(), &no_sdk).unwrap(), ToolchainVersion::Vs2015);
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_resolve_vs2010_amd64() {
    let env = vs100_env();
    let catalog = Catalog::default();
    let spec = catalog.get(ToolchainVersion::Vs2010).unwrap();

    let invocation = resolve(spec, "amd64", "release", &env).unwrap();

    let base = Path::new(r"C:\Program Files (x86)\Microsoft Visual Studio 10.0\Common7\Tools\");
    assert_eq!(
        invocation.script(),
        base.join("..").join("..").join("VC").join("vcvarsall.bat")
    );
    assert_eq!(invocation.args(), "amd64");
    assert!(!invocation.flags().contains(CaptureFlags::DISCARD_STDERR));
}

#[test]
fn test_resolve_vs_passes_arch_through() {
    let env = vs100_env();
    let catalog = Catalog::default();
    let spec = catalog.get(ToolchainVersion::Vs2010).unwrap();

    let invocation = resolve(spec, "x86_ia64", "whatever", &env).unwrap();
    assert_eq!(invocation.args(), "x86_ia64");
}

#[test]
fn test_resolve_sdk_debug_x86() {
    let catalog = Catalog::builtin(Path::new(r"C:\SDK"));
    let spec = catalog.get(ToolchainVersion::WindowsSdk71).unwrap();

    let invocation = resolve(spec, "x86", "debug", &Env::new()).unwrap();

    assert_eq!(invocation.args(), "/debug /x86");
    assert_eq!(
        invocation.script(),
        Path::new(r"C:\SDK").join("Bin").join("SetEnv.cmd")
    );
    assert!(invocation.flags().contains(CaptureFlags::DISCARD_STDERR));
}

#[test]
fn test_resolve_sdk_release_amd64() {
    let catalog = Catalog::default();
    let spec = catalog.get(ToolchainVersion::WindowsSdk71).unwrap();
    assert!(matches!(spec.base(), BaseDir::Fixed(_)));

    let invocation = resolve(spec, "AMD64", "Release", &Env::new()).unwrap();
    assert_eq!(invocation.args(), "/release /x64");
}

#[test]
fn test_resolve_sdk_rejects_unknown_configuration() {
    let catalog = Catalog::default();
    let spec = catalog.get(ToolchainVersion::WindowsSdk71).unwrap();

    let err = resolve(spec, "amd64", "profile", &Env::new()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid configuration 'profile' for WindowsSDK7.1 (expected 'release' or 'debug')"
    );
}

#[test]
fn test_resolve_missing_base_variable() {
    let catalog = Catalog::default();
    let spec = catalog.get(ToolchainVersion::Vs2012).unwrap();

    let err = resolve(spec, "x86", "release", &Env::new()).unwrap_err();
    assert!(matches!(
        err,
        ToolchainError::NotInstalled { ref env_var, .. } if env_var == "VS110COMNTOOLS"
    ));
}

#[test]
fn test_prepare_locates_when_unset() {
    let env = vs100_env();
    let catalog = Catalog::builtin(Path::new("/nonexistent/vcenv-sdk"));

    let invocation = prepare(&catalog, &ToolchainRequest::default(), &env).unwrap();

    assert_eq!(invocation.version(), ToolchainVersion::Vs2010);
    assert_eq!(invocation.args(), "amd64");
}

#[test]
fn test_prepare_sets_allow_failure() {
    let env = vs100_env();
    let request = ToolchainRequest::builder()
        .with_version(ToolchainVersion::Vs2010)
        .with_allow_failure(true)
        .build();

    let invocation = prepare(&Catalog::default(), &request, &env).unwrap();
    assert!(invocation.flags().contains(CaptureFlags::ALLOW_FAILURE));
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn test_sdk_invalid_arch_runs_nothing() {
    let shell = FakeShell::succeeding("A=1\n");
    let mut env = Env::new();
    let request = ToolchainRequest::builder()
        .with_version(ToolchainVersion::WindowsSdk71)
        .with_arch("ia64")
        .build();

    let err = invoke(&Catalog::default(), &request, &mut env, &shell).unwrap_err();

    assert!(matches!(err, VcEnvError::Toolchain(ref e) if matches!(**e, ToolchainError::InvalidArch { .. })));
    assert!(shell.calls().is_empty(), "no shell may run for a bad token");
    assert!(env.is_empty());
}

#[test]
fn test_invoke_vs2010_applies_capture() {
    let shell = FakeShell::succeeding(
        "VS100COMNTOOLS=C:\\VS10\\Common7\\Tools\\\r\nINCLUDE=C:\\VS10\\VC\\include\r\nPath=C:\\VS10\\VC\\bin;C:\\Windows\r\n",
    );
    let mut env = vs100_env();
    env.set("PATH", r"C:\Windows");
    let request = ToolchainRequest::builder()
        .with_version(ToolchainVersion::Vs2010)
        .build();

    let report = invoke(&Catalog::default(), &request, &mut env, &shell).unwrap();

    assert_eq!(report.version, ToolchainVersion::Vs2010);
    assert_eq!(report.applied, 3);
    assert_eq!(env.get("INCLUDE"), Some(r"C:\VS10\VC\include"));
    assert_eq!(env.get("PATH"), Some(r"C:\VS10\VC\bin;C:\Windows"));

    let calls = shell.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args(), "amd64");
    assert!(!calls[0].discard_stderr());
}

#[test]
fn test_capture_toolchain_does_not_apply() {
    let shell = FakeShell::succeeding("INCLUDE=C:\\VS10\\VC\\include\n");
    let env = vs100_env();
    let request = ToolchainRequest::builder()
        .with_version(ToolchainVersion::Vs2010)
        .with_arch("x86")
        .build();

    let (invocation, snapshot) =
        capture_toolchain(&Catalog::default(), &request, &env, &shell).unwrap();

    assert_eq!(invocation.args(), "x86");
    assert_eq!(snapshot.get("INCLUDE"), Some(r"C:\VS10\VC\include"));
    assert_eq!(env.get("INCLUDE"), None);
}

#[test]
fn test_invoke_script_failure_applies_nothing() {
    let shell = FakeShell::failing(1);
    let mut env = vs100_env();
    let before = env.to_map();
    let request = ToolchainRequest::builder()
        .with_version(ToolchainVersion::Vs2010)
        .build();

    let err = invoke(&Catalog::default(), &request, &mut env, &shell).unwrap_err();

    assert!(matches!(err, VcEnvError::Capture(_)));
    assert_eq!(env.to_map(), before);
}
