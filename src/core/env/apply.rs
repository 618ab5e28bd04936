// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment access and snapshot application.
//!
//! ```text
//! EnvSnapshot --apply_snapshot()--> dyn ProcessEnvironment
//!                                     |-- SystemEnvironment  std::env (real table)
//!                                     '-- Env                in-memory (tests, diffing)
//!
//! set-only: keys absent from the snapshot are never removed
//! ```

use tracing::{Level, debug, enabled, trace};

use super::container::Env;
use super::snapshot::EnvSnapshot;
use crate::error::EnvError;

/// Read/write access to a process-wide environment table.
pub trait ProcessEnvironment {
    /// Returns the value of a variable, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets a variable, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the table rejects the name or value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError>;

    /// Returns every variable currently set.
    fn vars(&self) -> Vec<(String, String)>;

    /// Returns true if the variable is set.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// The environment table of the running process.
///
/// Writes go through [`std::env::set_var`], which is only sound while no
/// other thread reads or writes the environment. `vcenv` applies snapshots
/// on the main thread before it spawns anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Copies the current table into an in-memory [`Env`].
    #[must_use]
    pub fn snapshot(&self) -> Env {
        Env::from_pairs(std::env::vars_os().map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        }))
    }
}

impl ProcessEnvironment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        // set_var panics on these instead of reporting them
        if key.is_empty() || key.contains(['=', '\0']) {
            return Err(EnvError::InvalidKey {
                key: key.to_string(),
            });
        }
        if value.contains('\0') {
            return Err(EnvError::InvalidValue {
                key: key.to_string(),
            });
        }

        // SAFETY: snapshots are applied from the main thread; the only other
        // thread (the log file writer) never touches the environment.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

impl ProcessEnvironment for Env {
    fn get(&self, key: &str) -> Option<String> {
        Self::get(self, key).map(str::to_owned)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        Self::set(self, key, value);
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    fn contains(&self, key: &str) -> bool {
        Self::contains(self, key)
    }
}

/// Writes every snapshot entry into `target`, in snapshot order.
///
/// Existing values are overwritten silently; variables not in the snapshot
/// are left alone. Applying the same snapshot twice is the same as applying
/// it once. Returns the number of entries written.
///
/// # Errors
///
/// Returns the first [`EnvError`] raised by `target`. Entries before the
/// failing one stay applied.
pub fn apply_snapshot(
    snapshot: &EnvSnapshot,
    target: &mut dyn ProcessEnvironment,
) -> Result<usize, EnvError> {
    let mut applied = 0;
    for (key, value) in snapshot.iter() {
        if enabled!(Level::TRACE) {
            trace!(key = key, value = value, "set env var");
        }
        target.set(key, value)?;
        applied += 1;
    }

    debug!(count = applied, "applied environment snapshot");
    Ok(applied)
}
