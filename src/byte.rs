// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+

//! Byte verification functions.

/// Token lookup table.
///
/// ```text
/// token = 1*tchar
/// tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
///         "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
/// ```
static TOKEN: [bool; 256] = build_token_table();

const fn build_token_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut byte  = 0;

    while byte < 256 {
        let b = byte as u8;

        table[byte] = matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
            | b'^' | b'_' | b'`' | b'|' | b'~'
            | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z'
        );

        byte += 1;
    }

    table
}

/// Indicates that a byte is a decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Indicates that a byte is allowed within a header value, a reason phrase, or a chunk extension
/// quoted value.
///
/// This is `HTAB`, `SP`, all visible 7-bit bytes, and `obs-text` (`0x80` thru `0xFF`).
#[inline]
pub fn is_header_value(byte: u8) -> bool {
    byte == b'\t' || (byte > 0x1F && byte != 0x7F)
}

/// Indicates that a byte is linear white space (`SP` or `HTAB`).
#[inline]
pub fn is_space(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Indicates that a byte is a HTTP token.
#[inline]
pub fn is_token(byte: u8) -> bool {
    TOKEN[byte as usize]
}

/// Indicates that a byte is an upper-cased alphabetical character.
#[inline]
pub fn is_upper(byte: u8) -> bool {
    byte.is_ascii_uppercase()
}

/// Indicates that a byte is allowed within a request target.
///
/// Control characters, `SP` and `DEL` are rejected. Bytes `0x80` thru `0xFF` are accepted to
/// support raw UTF-8 paths.
#[inline]
pub fn is_url(byte: u8) -> bool {
    byte > 0x20 && byte != 0x7F
}

/// Convert a hex byte to its numeric value.
#[inline]
pub fn hex_to_byte(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _           => None
    }
}

/// Lower-case an ASCII byte.
#[inline]
pub fn to_lower(byte: u8) -> u8 {
    byte.to_ascii_lowercase()
}
