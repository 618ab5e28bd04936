// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::locate::{format_entries, list_entries};
use super::print::render;
use crate::cli::toolchain::ShellFormat;
use crate::core::env::container::Env;
use crate::core::env::snapshot::EnvSnapshot;
use crate::toolchain::ToolchainVersion;
use crate::toolchain::catalog::Catalog;
use crate::toolchain::locator::MarkerProbe;

fn sample() -> EnvSnapshot {
    EnvSnapshot::parse(
        "INCLUDE=C:\\VS\\VC\\include\nProgramFiles(x86)=C:\\Program Files (x86)\nPROMPT=it's $P$G\n",
    )
}

#[test]
fn test_render_powershell() {
    insta::assert_snapshot!(render(&sample(), ShellFormat::Powershell).unwrap(), @r"
    $env:INCLUDE = 'C:\VS\VC\include'
    ${env:ProgramFiles(x86)} = 'C:\Program Files (x86)'
    $env:PROMPT = 'it''s $P$G'
    ");
}

#[test]
fn test_render_cmd() {
    insta::assert_snapshot!(render(&sample(), ShellFormat::Cmd).unwrap(), @r#"
    set "INCLUDE=C:\VS\VC\include"
    set "ProgramFiles(x86)=C:\Program Files (x86)"
    set "PROMPT=it's $P$G"
    "#);
}

#[test]
fn test_render_sh_skips_invalid_names() {
    insta::assert_snapshot!(render(&sample(), ShellFormat::Sh).unwrap(), @r"
    export INCLUDE='C:\VS\VC\include'
    export PROMPT='it'\''s $P$G'
    ");
}

#[test]
fn test_render_json() {
    let rendered = render(&sample(), ShellFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["INCLUDE"], r"C:\VS\VC\include");
    assert_eq!(parsed["ProgramFiles(x86)"], r"C:\Program Files (x86)");
    assert_eq!(parsed.as_object().unwrap().len(), 3);
}

#[test]
fn test_render_empty_snapshot() {
    assert_eq!(render(&EnvSnapshot::new(), ShellFormat::Sh).unwrap(), "");
    assert_eq!(render(&EnvSnapshot::new(), ShellFormat::Json).unwrap(), "{}\n");
}

struct EnvOnlyProbe<'a>(&'a Env);

impl MarkerProbe for EnvOnlyProbe<'_> {
    fn env_var_exists(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    fn file_exists(&self, _path: &Path) -> bool {
        false
    }
}

#[test]
fn test_list_entries() {
    let env = Env::from_pairs([("VS120COMNTOOLS", r"C:\VS12\Common7\Tools\")]);
    let catalog = Catalog::builtin(Path::new(r"C:\SDK"));

    let entries = list_entries(&catalog, &env, &EnvOnlyProbe(&env));

    assert_eq!(entries.len(), 6);
    let installed: Vec<_> = entries
        .iter()
        .filter(|e| e.installed)
        .map(|e| e.version)
        .collect();
    assert_eq!(installed, [ToolchainVersion::Vs2013]);

    let sdk = &entries[0];
    assert_eq!(sdk.version, ToolchainVersion::WindowsSdk71);
    assert_eq!(
        sdk.script,
        Some(Path::new(r"C:\SDK").join("Bin").join("SetEnv.cmd"))
    );

    let vs2013 = entries
        .iter()
        .find(|e| e.version == ToolchainVersion::Vs2013)
        .unwrap();
    assert_eq!(
        vs2013.script,
        Some(
            PathBuf::from(r"C:\VS12\Common7\Tools\")
                .join("..")
                .join("..")
                .join("VC")
                .join("vcvarsall.bat")
        )
    );

    let vs2015 = entries
        .iter()
        .find(|e| e.version == ToolchainVersion::Vs2015)
        .unwrap();
    assert_eq!(vs2015.script, None);
}

#[test]
fn test_format_entries_alignment() {
    let env = Env::new();
    let catalog = Catalog::builtin(Path::new("/opt/sdk"));
    let lines = format_entries(&list_entries(&catalog, &env, &EnvOnlyProbe(&env)));

    let sdk_script = Path::new("/opt/sdk").join("Bin").join("SetEnv.cmd");
    assert_eq!(
        lines[0],
        format!("WindowsSDK7.1  missing    {}", sdk_script.display())
    );
    assert_eq!(lines[1], "2015           missing    -");
    assert_eq!(lines.len(), 6);
}
