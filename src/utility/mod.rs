// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   detect()         UTF-16LE (BOM or NUL) / UTF-8
//!   bytes_to_utf8()  UTF-16LE --> UTF-8
//! ```

pub mod encoding;
