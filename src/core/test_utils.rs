// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test doubles for the shell and capture layers.

use std::cell::RefCell;

use crate::core::shell::{ShellInvocation, ShellRunner};
use crate::error::CaptureError;

/// A scriptable [`ShellRunner`] that records every invocation.
///
/// On a zero exit code it writes `dump` to the invocation's dump path,
/// mimicking `script && set > dump`. On a non-zero code nothing is written.
pub(crate) struct FakeShell {
    exit_code: i32,
    dump: Vec<u8>,
    calls: RefCell<Vec<ShellInvocation>>,
}

impl FakeShell {
    pub(crate) fn succeeding(dump: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code: 0,
            dump: dump.into(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(exit_code: i32) -> Self {
        Self {
            exit_code,
            dump: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<ShellInvocation> {
        self.calls.borrow().clone()
    }
}

impl ShellRunner for FakeShell {
    fn run(&self, invocation: &ShellInvocation) -> Result<i32, CaptureError> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.exit_code == 0 {
            std::fs::write(invocation.dump_path(), &self.dump).map_err(|source| {
                CaptureError::ReadDump {
                    path: invocation.dump_path().display().to_string(),
                    source,
                }
            })?;
        }
        Ok(self.exit_code)
    }
}
