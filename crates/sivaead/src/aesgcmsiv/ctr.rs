// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES counter-mode keystream (RFC 8452 section 5).
//!
//! The counter occupies bytes 0..3 of the block as a little-endian 32-bit
//! integer and wraps modulo 2^32 without carrying into byte 4; bytes 4..15
//! are never modified. All state is zeroized on drop.

use sivutil::{u32_from_le, u32_to_le};
use zeroize::Zeroize;

use super::cipher::BlockCipher;
use super::consts::BLOCK_SIZE;

/// Counter-mode keystream state, seeded from the authentication tag.
#[derive(Zeroize)]
#[zeroize(drop)]
pub(crate) struct Ctr32 {
    counter: [u8; BLOCK_SIZE],
    keystream: [u8; BLOCK_SIZE],
}

impl Ctr32 {
    pub fn new(seed: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            counter: *seed,
            keystream: [0; BLOCK_SIZE],
        }
    }

    /// XORs the keystream over `data` in place.
    ///
    /// The final span may be shorter than a block; the unused keystream
    /// bytes are discarded.
    pub fn apply_keystream(&mut self, cipher: &BlockCipher, data: &mut [u8]) {
        for chunk in data.chunks_mut(BLOCK_SIZE) {
            self.keystream.copy_from_slice(&self.counter);
            cipher.encrypt_block(&mut self.keystream);

            for (byte, ks_byte) in chunk.iter_mut().zip(self.keystream.iter()) {
                *byte ^= ks_byte;
            }

            self.increment();
        }

        self.keystream.zeroize();
    }

    fn increment(&mut self) {
        let mut word = 0u32;
        u32_from_le(
            &mut word,
            (&mut self.counter[0..4])
                .try_into()
                .expect("infallible: counter[0..4] is exactly 4 bytes"),
        );

        word = word.wrapping_add(1);

        u32_to_le(
            &mut word,
            (&mut self.counter[0..4])
                .try_into()
                .expect("infallible: counter[0..4] is exactly 4 bytes"),
        );
    }
}

impl core::fmt::Debug for Ctr32 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ctr32 {{ [protected] }}")
    }
}
