// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment dump decoding (UTF-16LE/UTF-8 → UTF-8).
//!
//! ```text
//! dump bytes --detect()--> Encoding --bytes_to_utf8()--> UTF-8
//!   FF FE ...        Utf16Le   (BOM)
//!   contains 00      Utf16Le   (cmd /u, no BOM)
//!   anything else    Utf8      (sh `env`)
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::UTF_16LE;
use std::borrow::Cow;

/// Encodings a dump can arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 (code page 65001)
    #[default]
    Utf8,
    /// UTF-16 Little Endian (code page 1200)
    Utf16Le,
}

const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Guesses the encoding of an environment dump.
///
/// Environment text never contains NUL, while every UTF-16LE `KEY=` line
/// does, so a NUL byte marks `cmd /u` output even without a BOM.
#[must_use]
pub fn detect(bytes: &[u8]) -> Encoding {
    if bytes.starts_with(&UTF16_LE_BOM) || bytes.contains(&0) {
        Encoding::Utf16Le
    } else {
        Encoding::Utf8
    }
}

/// Converts bytes from the given encoding to UTF-8.
///
/// # Returns
/// A UTF-8 string. Invalid sequences are replaced with U+FFFD (replacement character).
///
/// # Example
/// ```
/// use vcenv::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let utf16 = b"c\x00a\x00f\x00\xe9\x00"; // "café" in UTF-16LE
/// assert_eq!(bytes_to_utf8(Encoding::Utf16Le, utf16), "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Utf16Le => {
            let bytes = bytes.strip_prefix(&UTF16_LE_BOM).unwrap_or(bytes);
            let (text, _had_errors) = UTF_16LE.decode_without_bom_handling(bytes);
            text
        }
    }
}

/// Detects the encoding of `bytes` and converts them to UTF-8.
#[must_use]
pub fn decode_auto(bytes: &[u8]) -> Cow<'_, str> {
    bytes_to_utf8(detect(bytes), bytes)
}

#[cfg(test)]
mod tests;
