// vcenv: Visual C++ toolchain environment importer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, bytes_to_utf8, decode_auto, detect};

fn utf16_le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

#[test]
fn test_utf8_passthrough() {
    let input = "Hello, 世界!";
    let result = bytes_to_utf8(Encoding::Utf8, input.as_bytes());
    insta::assert_snapshot!(result, @"Hello, 世界!");
}

#[test]
fn test_utf16_le_conversion() {
    // "Hi" in UTF-16 LE: 0x48 0x00 0x69 0x00
    let input = b"H\x00i\x00";
    let result = bytes_to_utf8(Encoding::Utf16Le, input);
    insta::assert_snapshot!(result, @"Hi");
}

#[test]
fn test_detect() {
    let cases = [
        detect(b"PATH=C:\\bin\r\n"),
        detect(b"\xff\xfeP\x00=\x00"),
        detect(&utf16_le("PATH=C:\\bin\r\n")),
        detect(b""),
    ];
    assert_eq!(
        cases,
        [
            Encoding::Utf8,
            Encoding::Utf16Le,
            Encoding::Utf16Le,
            Encoding::Utf8
        ]
    );
}

#[test]
fn test_decode_auto_strips_utf16_bom() {
    let bytes = b"\xff\xfeA\x00=\x001\x00";
    assert_eq!(decode_auto(bytes), "A=1");
}

#[test]
fn test_decode_auto_unicode_cmd_dump() {
    let text = "USERPROFILE=C:\\Users\\José\r\nLANG=日本語\r\nOS=Windows_NT\r\n";
    assert_eq!(decode_auto(&utf16_le(text)), text);
}

#[test]
fn test_decode_auto_utf16_surrogate_pair() {
    let text = "EMOJI=🦀\r\n";
    assert_eq!(decode_auto(&utf16_le(text)), text);
}

#[test]
fn test_decode_auto_invalid_utf8_is_replaced() {
    assert_eq!(decode_auto(b"NAME=Jos\x82\n"), "NAME=Jos\u{FFFD}\n");
}
