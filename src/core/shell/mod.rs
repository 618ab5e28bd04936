// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell invocation with success-gated environment dumps.
//!
//! ```text
//! ShellInvocation { script, args, dump_path, discard_stderr }
//!        |
//!        v
//! ShellRunner::run() --> exit code
//!   SystemShell (Windows): cmd /u /d /s /c ""<script>" <args> && set > "<dump>""
//!   SystemShell (other):   sh -c ". '<script>' <args> && env > '<dump>'"
//!   stderr: null (discard_stderr) | inherit
//!   stdout: forwarded to our stderr (keeps stdout clean for `print`)
//! ```

use bitflags::bitflags;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use crate::error::CaptureError;

bitflags! {
    /// Flags controlling how a setup script is captured.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CaptureFlags: u32 {
        /// Send the script's stderr to the null device
        const DISCARD_STDERR = 0x01;
        /// Treat a non-zero exit as "nothing captured" instead of an error
        const ALLOW_FAILURE = 0x02;
    }
}

/// One run of a setup script followed, on success only, by an environment dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    script: PathBuf,
    args: String,
    dump_path: PathBuf,
    discard_stderr: bool,
}

impl ShellInvocation {
    #[must_use]
    pub fn new(
        script: impl Into<PathBuf>,
        args: impl Into<String>,
        dump_path: impl Into<PathBuf>,
        discard_stderr: bool,
    ) -> Self {
        Self {
            script: script.into(),
            args: args.into(),
            dump_path: dump_path.into(),
            discard_stderr,
        }
    }

    #[must_use]
    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Argument string appended verbatim after the script path.
    #[must_use]
    pub fn args(&self) -> &str {
        &self.args
    }

    /// File the environment table is written to when the script succeeds.
    #[must_use]
    pub fn dump_path(&self) -> &Path {
        &self.dump_path
    }

    #[must_use]
    pub const fn discard_stderr(&self) -> bool {
        self.discard_stderr
    }

    /// Renders the `cmd.exe` command line: `"<script>" <args> && set > "<dump>"`.
    #[must_use]
    pub fn cmd_line(&self) -> String {
        let mut line = format!("\"{}\"", self.script.display());
        if !self.args.is_empty() {
            line.push(' ');
            line.push_str(&self.args);
        }
        let _ = write!(line, " && set > \"{}\"", self.dump_path.display());
        line
    }

    /// Renders the POSIX `sh` command line: `. '<script>' <args> && env > '<dump>'`.
    ///
    /// The script is sourced so its exports reach the dump, the same way a
    /// batch file run by `cmd /c` changes the calling `cmd` environment.
    #[must_use]
    pub fn sh_line(&self) -> String {
        let mut line = format!(". {}", sh_quote(&self.script.to_string_lossy()));
        if !self.args.is_empty() {
            line.push(' ');
            line.push_str(&self.args);
        }
        line.push_str(" && env > ");
        line.push_str(&sh_quote(&self.dump_path.to_string_lossy()));
        line
    }
}

/// Single-quotes a word for `sh`, escaping embedded single quotes.
fn sh_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Runs a [`ShellInvocation`] and reports the shell's exit code.
///
/// Blocks until the shell exits. There is no timeout.
pub trait ShellRunner {
    /// # Errors
    ///
    /// Returns an error if the shell cannot be found or spawned, or if it
    /// is terminated without an exit code.
    fn run(&self, invocation: &ShellInvocation) -> Result<i32, CaptureError>;
}

/// `cmd.exe` switches placed before the quoted command line.
///
/// `/u` makes builtins such as `set` write UTF-16LE (no BOM) instead of the
/// console code page, so non-ASCII values reach the dump intact.
pub const CMD_SWITCHES: [&str; 4] = ["/u", "/d", "/s", "/c"];

/// The platform command shell (`cmd.exe` on Windows, `sh` elsewhere).
#[derive(Debug, Clone, Default)]
pub struct SystemShell {
    /// Explicit shell path; located on `PATH` when unset.
    shell: Option<PathBuf>,
}

impl SystemShell {
    #[must_use]
    pub const fn new() -> Self {
        Self { shell: None }
    }

    /// Uses the given shell executable instead of searching `PATH`.
    #[must_use]
    pub fn with_shell(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: Some(shell.into()),
        }
    }

    const fn shell_name() -> &'static str {
        if cfg!(windows) { "cmd" } else { "sh" }
    }

    fn resolve_shell(&self) -> Result<PathBuf, CaptureError> {
        if let Some(shell) = &self.shell {
            return Ok(shell.clone());
        }

        let name = Self::shell_name();
        which::which(name).map_err(|_| CaptureError::ShellNotFound {
            name: name.to_string(),
        })
    }

    fn build_command(shell: &Path, invocation: &ShellInvocation) -> (Command, String) {
        let mut command = Command::new(shell);

        #[cfg(windows)]
        let line = {
            use std::os::windows::process::CommandExt;

            // /s strips exactly the outer quotes, so the inner ones survive
            let line = invocation.cmd_line();
            command.args(CMD_SWITCHES);
            command.raw_arg(format!("\"{line}\""));
            line
        };

        #[cfg(not(windows))]
        let line = {
            let line = invocation.sh_line();
            command.arg("-c").arg(&line);
            line
        };

        command.stdin(Stdio::null());
        command.stdout(Stdio::from(std::io::stderr()));
        if invocation.discard_stderr() {
            command.stderr(Stdio::null());
        } else {
            command.stderr(Stdio::inherit());
        }

        (command, line)
    }
}

impl ShellRunner for SystemShell {
    fn run(&self, invocation: &ShellInvocation) -> Result<i32, CaptureError> {
        let shell = self.resolve_shell()?;
        let (mut command, line) = Self::build_command(&shell, invocation);

        debug!(shell = %shell.display(), cmd = %line, "exec");

        let status = command.status().map_err(|source| CaptureError::Spawn {
            command: line.clone(),
            source,
        })?;

        trace!(status = ?status, "shell exited");

        status.code().ok_or_else(|| CaptureError::Terminated {
            script: invocation.script().display().to_string(),
        })
    }
}
