//! Signature hash: 32-bit, four-lane, over UTF-16 code units.
//!
//! This is the small diagnostic hash embedded inside individual collector
//! outputs (device hash, media hardware hashes, runtime hash). It is not the
//! identity hash and plays no part in the final identifier.
//!
//! The algorithm hashes *code units*, not encoded bytes: surrogate halves of
//! astral-plane characters are fed through individually, and the length mixed
//! into the lane seeds is the code-unit count. Constants, rotations, and the
//! `m, o, n, p` output order are fixed; any deviation breaks comparability
//! with previously stored digests.

/// Compute the four-lane signature hash of a string.
///
/// Returns 32 lowercase hex characters: lanes `m`, `o`, `n`, `p`, each
/// rendered as 8 zero-padded digits.
pub fn signature_hash(s: &str) -> String {
    let units: Vec<u16> = s.encode_utf16().collect();
    let len = units.len() as u32;

    let mut m: u32 = 0xdead_beef ^ len;
    let mut n: u32 = 0xfeed_face ^ len;
    let mut o: u32 = 0x1234_5678;
    let mut p: u32 = 0x8765_4321;

    for &unit in &units {
        let q = unit as u32;
        n = n.wrapping_add(q);
        m ^= q << 8;
        p ^= q;
        o = o.wrapping_add(q << 16);
        n = n.rotate_left(13);
        m = m.rotate_left(5);
        p = p.rotate_left(7);
        o = o.rotate_left(17);
    }

    let mut out = [0u8; 16];
    out[0..4].copy_from_slice(&m.to_be_bytes());
    out[4..8].copy_from_slice(&o.to_be_bytes());
    out[8..12].copy_from_slice(&n.to_be_bytes());
    out[12..16].copy_from_slice(&p.to_be_bytes());
    hex::encode(out)
}
