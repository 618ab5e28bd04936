// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup script environment capture.
//!
//! ```text
//! capture_environment(script, args, flags, runner)
//!   1. TempPath "vcenv-XXXX.env"   (deleted on drop, every exit path)
//!   2. runner.run("<script> <args> && set > dump")
//!        exit != 0 --> CommandFailed
//!                      (ALLOW_FAILURE: warn, parse whatever is there)
//!   3. read dump --> detect encoding --> UTF-8
//!   4. "KEY=VALUE" lines --> EnvSnapshot
//! ```

use std::path::Path;
use tracing::{Level, debug, enabled, trace, warn};

use super::snapshot::EnvSnapshot;
use crate::core::shell::{CaptureFlags, ShellInvocation, ShellRunner};
use crate::error::CaptureError;
use crate::utility::encoding::decode_auto;

/// Runs `script` with `args` and returns the environment it leaves behind.
///
/// The dump step is chained with `&&`, so it only runs when the script
/// succeeds. The temporary dump file gets a unique name per call and is
/// removed before this function returns, whether or not the script
/// succeeded.
///
/// # Arguments
/// * `script` - Absolute path to the setup batch file
/// * `args` - Argument string passed verbatim after the script path
/// * `flags` - `DISCARD_STDERR` silences the script's stderr;
///   `ALLOW_FAILURE` turns a failing script into an empty snapshot
/// * `runner` - Shell used to run the script
///
/// # Errors
/// Returns an error if the dump file cannot be created or read, if the
/// shell cannot be run, or if the script exits non-zero without
/// `ALLOW_FAILURE`.
pub fn capture_environment(
    script: &Path,
    args: &str,
    flags: CaptureFlags,
    runner: &dyn ShellRunner,
) -> Result<EnvSnapshot, CaptureError> {
    let dump = tempfile::Builder::new()
        .prefix("vcenv-")
        .suffix(".env")
        .tempfile()
        .map_err(CaptureError::TempFile)?
        .into_temp_path();

    debug!(
        script = %script.display(),
        args = args,
        dump = %dump.display(),
        "capturing environment"
    );

    let invocation = ShellInvocation::new(
        script,
        args,
        dump.to_path_buf(),
        flags.contains(CaptureFlags::DISCARD_STDERR),
    );
    let code = runner.run(&invocation)?;

    if code != 0 {
        if !flags.contains(CaptureFlags::ALLOW_FAILURE) {
            return Err(CaptureError::CommandFailed {
                script: script.display().to_string(),
                code,
            });
        }
        warn!(
            script = %script.display(),
            code = code,
            "setup script failed, continuing without its environment"
        );
    }

    let snapshot = read_dump(&dump)?;

    if snapshot.is_empty() {
        warn!(script = %script.display(), "no environment variables captured");
    } else {
        debug!(count = snapshot.len(), "captured environment variables");
    }

    // explicit close so a failed delete is at least logged
    if let Err(e) = dump.close() {
        warn!(error = %e, "failed to remove environment dump");
    }

    Ok(snapshot)
}

/// Reads and parses a dump file. A missing file is an empty dump.
fn read_dump(path: &Path) -> Result<EnvSnapshot, CaptureError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(source) => {
            return Err(CaptureError::ReadDump {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let text = decode_auto(&bytes);
    let snapshot = EnvSnapshot::parse(&text);

    if enabled!(Level::TRACE) {
        for (key, value) in snapshot.iter() {
            trace!(key = key, value = value, "captured env var");
        }
    }

    Ok(snapshot)
}
