//! Identity hash: MurmurHash3 x64, 128-bit.
//!
//! This is the hash behind the final fingerprint identifier. It is a
//! bit-exact implementation of the standard x64 128-bit MurmurHash3 variant;
//! every constant, rotation, and the asymmetric tail handling must match the
//! reference algorithm, or previously issued identifiers stop comparing
//! equal. It is not a cryptographic hash and carries no collision-resistance
//! guarantee.
//!
//! ## Output format
//!
//! The two 64-bit accumulators are each split into their 32-bit halves and
//! rendered low-half first:
//!
//! ```text
//! h1_low32-h1_high32-h2_low32-h2_high32
//! ```
//!
//! eight lowercase hex digits per group, zero-padded, joined by `-`. The
//! split-halves ordering is part of the contract.

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// Compute the 128-bit identity hash of a byte sequence.
///
/// Deterministic: same bytes + same seed → same output, always. The empty
/// input at seed 0 yields `00000000-00000000-00000000-00000000`.
pub fn identity_hash(bytes: &[u8], seed: u32) -> String {
    let (h1, h2) = murmur3_x64_128(bytes, seed);
    format!(
        "{:08x}-{:08x}-{:08x}-{:08x}",
        h1 as u32,
        (h1 >> 32) as u32,
        h2 as u32,
        (h2 >> 32) as u32,
    )
}

/// Raw MurmurHash3 x64 128-bit digest as the two accumulators `(h1, h2)`.
pub fn murmur3_x64_128(data: &[u8], seed: u32) -> (u64, u64) {
    let len = data.len();
    let mut h1 = seed as u64;
    let mut h2 = seed as u64;

    // Body: 16-byte blocks, little-endian 64-bit halves
    let nblocks = len / 16;
    for block in data[..nblocks * 16].chunks_exact(16) {
        let mut k1 = u64::from_le_bytes(block[0..8].try_into().expect("8-byte half"));
        let mut k2 = u64::from_le_bytes(block[8..16].try_into().expect("8-byte half"));

        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(27);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        k2 = k2.wrapping_mul(C2);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;
        h2 = h2.rotate_left(31);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    // Tail: 0–15 remaining bytes. The branch ladder mirrors the reference
    // switch; k1 and k2 fold at different thresholds (9+ for k2, 1+ for k1)
    // and that asymmetry is part of the algorithm.
    let tail = &data[nblocks * 16..];
    let mut k1: u64 = 0;
    let mut k2: u64 = 0;
    let t = tail.len();

    if t >= 15 {
        k2 ^= (tail[14] as u64) << 48;
    }
    if t >= 14 {
        k2 ^= (tail[13] as u64) << 40;
    }
    if t >= 13 {
        k2 ^= (tail[12] as u64) << 32;
    }
    if t >= 12 {
        k2 ^= (tail[11] as u64) << 24;
    }
    if t >= 11 {
        k2 ^= (tail[10] as u64) << 16;
    }
    if t >= 10 {
        k2 ^= (tail[9] as u64) << 8;
    }
    if t >= 9 {
        k2 ^= tail[8] as u64;
        k2 = k2.wrapping_mul(C2);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;
    }
    if t >= 8 {
        k1 ^= (tail[7] as u64) << 56;
    }
    if t >= 7 {
        k1 ^= (tail[6] as u64) << 48;
    }
    if t >= 6 {
        k1 ^= (tail[5] as u64) << 40;
    }
    if t >= 5 {
        k1 ^= (tail[4] as u64) << 32;
    }
    if t >= 4 {
        k1 ^= (tail[3] as u64) << 24;
    }
    if t >= 3 {
        k1 ^= (tail[2] as u64) << 16;
    }
    if t >= 2 {
        k1 ^= (tail[1] as u64) << 8;
    }
    if t >= 1 {
        k1 ^= tail[0] as u64;
        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
    }

    // Finalization
    h1 ^= len as u64;
    h2 ^= len as u64;
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    h1 = fmix64(h1);
    h2 = fmix64(h2);
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

/// Standard 64-bit avalanche mix.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}
