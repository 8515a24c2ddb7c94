// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! POLYVAL universal hash over GF(2^128) (RFC 8452).
//!
//! POLYVAL(H, X) equals byte-reverse(GHASH(H * x^-1, byte-reverse(X))), so
//! the hash key is pre-multiplied by x^-1 once at construction and the block
//! multiplier runs the GHASH-style right-shift reduction while the external
//! byte order stays little-endian throughout.
//!
//! The multiplier is bit-serial: branches depend only on mask selection,
//! never on data-indexed tables. All sensitive state is zeroized on drop.

use sivutil::{u32_from_le, u64_from_le, u64_to_le};
use zeroize::Zeroize;

use super::consts::BLOCK_SIZE;
use crate::sensitive::SensitiveArrayU8;

/// GHASH reduction constant for the right-shift multiplier.
const R: u64 = 0xe100000000000000;

/// The same constant folded into the top 32-bit word during key
/// pre-multiplication.
const R32: u32 = 0xe1000000;

/// POLYVAL accumulator keyed with a pre-multiplied hash key.
///
/// One instance authenticates exactly one message: `digest` drains the
/// accumulator, so the hasher cannot be reused.
#[derive(Zeroize)]
#[zeroize(drop)]
pub(crate) struct Polyval {
    h0: u64,
    h1: u64,
    s0: u64,
    s1: u64,
}

impl Polyval {
    /// Builds a hasher for the 16-byte hash key `h`.
    ///
    /// The key is pre-multiplied by x^-1 modulo
    /// x^128 + x^127 + x^126 + x^121 + 1 (mulX_GHASH): interpret `h` as four
    /// little-endian 32-bit words, right-shift the 128-bit value by one with
    /// the MSB propagating down, and fold the reduction constant into the
    /// top word when the shifted-out low bit is set.
    pub fn new(h: &[u8; BLOCK_SIZE]) -> Self {
        let mut bytes = *h;

        let mut w3 = 0u32;
        let mut w2 = 0u32;
        let mut w1 = 0u32;
        let mut w0 = 0u32;
        u32_from_le(
            &mut w3,
            (&mut bytes[0..4])
                .try_into()
                .expect("infallible: bytes[0..4] is exactly 4 bytes"),
        );
        u32_from_le(
            &mut w2,
            (&mut bytes[4..8])
                .try_into()
                .expect("infallible: bytes[4..8] is exactly 4 bytes"),
        );
        u32_from_le(
            &mut w1,
            (&mut bytes[8..12])
                .try_into()
                .expect("infallible: bytes[8..12] is exactly 4 bytes"),
        );
        u32_from_le(
            &mut w0,
            (&mut bytes[12..16])
                .try_into()
                .expect("infallible: bytes[12..16] is exactly 4 bytes"),
        );

        let mut b = w0;
        w0 = b >> 1;
        let mut c = b << 31;
        b = w1;
        w1 = (b >> 1) | c;
        c = b << 31;
        b = w2;
        w2 = (b >> 1) | c;
        c = b << 31;
        b = w3;
        w3 = (b >> 1) | c;
        w0 ^= ((b << 31) as i32 >> 8) as u32 & R32;

        let hasher = Self {
            h0: ((w0 as u64) << 32) | w1 as u64,
            h1: ((w2 as u64) << 32) | w3 as u64,
            s0: 0,
            s1: 0,
        };

        w3.zeroize();
        w2.zeroize();
        w1.zeroize();
        w0.zeroize();
        b.zeroize();
        c.zeroize();

        hasher
    }

    /// Absorbs `data`, zero-padding a trailing partial block to 16 bytes.
    pub fn update(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for block in chunks.by_ref() {
            self.update_block(
                block
                    .try_into()
                    .expect("infallible: chunk is exactly 16 bytes"),
            );
        }

        let tail = chunks.remainder();
        if !tail.is_empty() {
            let mut last = SensitiveArrayU8::<BLOCK_SIZE>::new();
            last[..tail.len()].copy_from_slice(tail);
            self.update_block(&last);
            last.zeroize();
        }
    }

    /// Folds one block into the accumulator: (s ^ block) * H' in GF(2^128).
    ///
    /// Walks 127 bits of the XORed value, high quad first, conditionally
    /// XORing H' into the output and right-shifting H' under the reduction
    /// constant; the 128th step selects without shifting further.
    fn update_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut bytes = *block;

        let mut b_lo = 0u64;
        let mut b_hi = 0u64;
        u64_from_le(
            &mut b_lo,
            (&mut bytes[0..8])
                .try_into()
                .expect("infallible: bytes[0..8] is exactly 8 bytes"),
        );
        u64_from_le(
            &mut b_hi,
            (&mut bytes[8..16])
                .try_into()
                .expect("infallible: bytes[8..16] is exactly 8 bytes"),
        );

        let mut x_lo = self.s1 ^ b_lo;
        let mut x_hi = self.s0 ^ b_hi;
        b_lo.zeroize();
        b_hi.zeroize();

        let mut v0 = self.h0;
        let mut v1 = self.h1;
        let mut z0 = 0u64;
        let mut z1 = 0u64;

        for _ in 0..64 {
            let m = ((x_hi as i64) >> 63) as u64;
            z0 ^= v0 & m;
            z1 ^= v1 & m;

            let r = ((v1 << 63) as i64 >> 63) as u64;
            let c = v0 & 1;
            v0 >>= 1;
            v1 = (v1 >> 1) | (c << 63);
            v0 ^= R & r;

            x_hi <<= 1;
        }

        for _ in 64..127 {
            let m = ((x_lo as i64) >> 63) as u64;
            z0 ^= v0 & m;
            z1 ^= v1 & m;

            let r = ((v1 << 63) as i64 >> 63) as u64;
            let c = v0 & 1;
            v0 >>= 1;
            v1 = (v1 >> 1) | (c << 63);
            v0 ^= R & r;

            x_lo <<= 1;
        }

        let m = ((x_lo as i64) >> 63) as u64;
        self.s0 = z0 ^ (v0 & m);
        self.s1 = z1 ^ (v1 & m);

        x_lo.zeroize();
        x_hi.zeroize();
        v0.zeroize();
        v1.zeroize();
        z0.zeroize();
        z1.zeroize();
    }

    /// Emits the accumulator as 16 little-endian bytes, draining the state.
    pub fn digest(&mut self, out: &mut [u8; BLOCK_SIZE]) {
        u64_to_le(
            &mut self.s1,
            (&mut out[0..8])
                .try_into()
                .expect("infallible: out[0..8] is exactly 8 bytes"),
        );
        u64_to_le(
            &mut self.s0,
            (&mut out[8..16])
                .try_into()
                .expect("infallible: out[8..16] is exactly 8 bytes"),
        );
    }

    #[cfg(test)]
    pub fn compute(h: &[u8; BLOCK_SIZE], data: &[u8], out: &mut [u8; BLOCK_SIZE]) {
        let mut hasher = Self::new(h);
        hasher.update(data);
        hasher.digest(out);
    }
}

impl core::fmt::Debug for Polyval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Polyval {{ [protected] }}")
    }
}
