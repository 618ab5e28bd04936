// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Captured environment tables.
//!
//! ```text
//! "PATH=C:\\VC\\bin;..."   --> ("PATH", "C:\\VC\\bin;...")
//! "FOO=a=b=c"              --> ("FOO", "a=b=c")     split on first '='
//! "EMPTY="                 --> ("EMPTY", "")
//! ""  "NOTANASSIGNMENT"    --> skipped
//! "=C:=C:\\"               --> skipped (no name before '=')
//! ```

use regex::Regex;
use std::sync::LazyLock;

use super::container::Env;

/// `<name>=<value>`: name is everything before the first `=`, value is the rest.
static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]+)=(.*)$").expect("assignment pattern is valid"));

/// An ordered sequence of captured `(name, value)` pairs.
///
/// Order is the order in which the dump enumerated them. No uniqueness is
/// enforced; the table a shell dumps is already unique by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    entries: Vec<(String, String)>,
}

impl EnvSnapshot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses a single dump line, returning `None` for non-assignments.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<(&str, &str)> {
        let caps = ASSIGNMENT.captures(line)?;
        let name = caps.get(1)?.as_str();
        let value = caps.get(2)?.as_str();
        Some((name, value))
    }

    /// Parses a whole dump, one assignment per line (LF or CRLF).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines()
            .filter_map(Self::parse_line)
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Looks up a captured value, comparing names case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries whose value differs from `baseline` or that
    /// `baseline` lacks, preserving snapshot order.
    #[must_use]
    pub fn changes_from(&self, baseline: &Env) -> Self {
        self.entries
            .iter()
            .filter(|(k, v)| baseline.get(k) != Some(v.as_str()))
            .cloned()
            .collect()
    }
}

impl FromIterator<(String, String)> for EnvSnapshot {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EnvSnapshot {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
