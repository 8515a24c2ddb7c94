// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level utilities shared across the siv crates.
//!
//! The little-endian conversions are *draining*: the source operand is
//! zeroized once the value has been moved across. Callers that still need
//! the original convert from a scratch copy. This keeps key material from
//! lingering in stack slots that nobody owns.

use zeroize::Zeroize;

/// Reads a little-endian `u32` from `src` into `dst`, zeroizing `src`.
///
/// Byte 0 is the least-significant byte.
#[inline]
pub fn u32_from_le(dst: &mut u32, src: &mut [u8; 4]) {
    *dst = (src[0] as u32)
        | (src[1] as u32) << 8
        | (src[2] as u32) << 16
        | (src[3] as u32) << 24;

    src.zeroize();
}

/// Writes `src` into `dst` as little-endian bytes, zeroizing `src`.
#[inline]
pub fn u32_to_le(src: &mut u32, dst: &mut [u8; 4]) {
    dst[0] = *src as u8;
    dst[1] = (*src >> 8) as u8;
    dst[2] = (*src >> 16) as u8;
    dst[3] = (*src >> 24) as u8;

    src.zeroize();
}

/// Reads a little-endian `u64` from `src` into `dst`, zeroizing `src`.
#[inline]
pub fn u64_from_le(dst: &mut u64, src: &mut [u8; 8]) {
    *dst = (src[0] as u64)
        | (src[1] as u64) << 8
        | (src[2] as u64) << 16
        | (src[3] as u64) << 24
        | (src[4] as u64) << 32
        | (src[5] as u64) << 40
        | (src[6] as u64) << 48
        | (src[7] as u64) << 56;

    src.zeroize();
}

/// Writes `src` into `dst` as little-endian bytes, zeroizing `src`.
#[inline]
pub fn u64_to_le(src: &mut u64, dst: &mut [u8; 8]) {
    dst[0] = *src as u8;
    dst[1] = (*src >> 8) as u8;
    dst[2] = (*src >> 16) as u8;
    dst[3] = (*src >> 24) as u8;
    dst[4] = (*src >> 32) as u8;
    dst[5] = (*src >> 40) as u8;
    dst[6] = (*src >> 48) as u8;
    dst[7] = (*src >> 56) as u8;

    src.zeroize();
}

/// Constant-time comparison of two byte slices.
///
/// Accumulates the XOR of every byte pair before testing, so the running
/// time does not depend on the position of the first mismatch. A length
/// mismatch returns `false` immediately; lengths are not secret here.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Decodes a hex string into bytes.
///
/// Panics on odd length or non-hex characters. Intended for test vectors,
/// not hostile input.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex character"))
        .collect()
}
