//! Decoding of UTF-8, UTF-16 and UTF-32 input into code points
//!
//! Malformed sequences, lone surrogates and out-of-range values become U+FFFD.

use crate::ucd::REPLACEMENT_CHARACTER;

pub fn decode_utf8(bytes: &[u8]) -> Vec<char> {
    String::from_utf8_lossy(bytes).chars().collect()
}

pub fn decode_utf16(units: &[u16]) -> Vec<char> {
    char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER))
        .collect()
}

pub fn decode_utf32(units: &[u32]) -> Vec<char> {
    units
        .iter()
        .map(|&u| char::from_u32(u).unwrap_or(REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input() {
        assert_eq!(decode_utf8(b"a\xffb"), vec!['a', '\u{FFFD}', 'b']);
        assert_eq!(decode_utf8("é".as_bytes()), vec!['é']);
        assert_eq!(decode_utf16(&[0x61, 0xD800, 0x62]), vec!['a', '\u{FFFD}', 'b']);
        assert_eq!(decode_utf16(&[0xD83D, 0xDE00]), vec!['\u{1F600}']);
        assert_eq!(decode_utf32(&[0x61, 0xD800, 0x11_0000]), vec!['a', '\u{FFFD}', '\u{FFFD}']);
    }
}
