//! Byte encoding of the canonical form.
//!
//! Converts a string into the byte sequence fed to the identity hash. The
//! encoder scans once and takes a single-byte path while every code point is
//! ≤ 127; the first character past that range discards the partial result and
//! the whole string is re-encoded as standard UTF-8. Rust strings are already
//! UTF-8, so both paths agree byte-for-byte; this function is kept as the one
//! choke point between canonicalization and hashing.

/// Encode a string into hash-input bytes.
///
/// Always succeeds; the empty string encodes to an empty sequence.
pub fn encode(s: &str) -> Vec<u8> {
    let mut data = Vec::with_capacity(s.len());
    for &byte in s.as_bytes() {
        if byte > 127 {
            return s.as_bytes().to_vec();
        }
        data.push(byte);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert!(encode("").is_empty());
    }

    #[test]
    fn test_ascii_one_byte_per_char() {
        let s = "sense-kernel 1.0";
        let bytes = encode(s);
        assert_eq!(bytes.len(), s.chars().count());
        for (byte, ch) in bytes.iter().zip(s.chars()) {
            assert_eq!(*byte as u32, ch as u32);
        }
    }

    #[test]
    fn test_non_ascii_is_full_utf8() {
        let s = "naïve";
        assert_eq!(encode(s), s.as_bytes());
        assert_eq!(encode(s), "naïve".to_string().into_bytes());
    }

    #[test]
    fn test_astral_plane_utf8() {
        // U+1F600 encodes as four UTF-8 bytes
        let s = "a😀b";
        assert_eq!(encode(s), vec![0x61, 0xf0, 0x9f, 0x98, 0x80, 0x62]);
    }

    #[test]
    fn test_mixed_input_never_partial() {
        // ASCII prefix followed by a multi-byte char must not yield a
        // truncated-then-appended result
        let s = "abc\u{00e9}";
        assert_eq!(encode(s), s.as_bytes());
        assert_eq!(encode(s).len(), 5);
    }
}
