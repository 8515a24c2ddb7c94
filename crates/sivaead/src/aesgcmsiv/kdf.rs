// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-message subkey derivation (RFC 8452 section 4).
//!
//! Each subkey is assembled from AES encryptions of a counter block
//! `ctr_le32 || nonce`; every encryption contributes its low 8 bytes, taken
//! in counter order.

use sivutil::u32_to_le;
use zeroize::Zeroize;

use super::cipher::BlockCipher;
use super::consts::{AES256_KEY_SIZE, AUTH_KEY_SIZE, BLOCK_SIZE, NONCE_SIZE};
use crate::sensitive::SensitiveArrayU8;

/// Subkeys derived from the master key and one nonce.
///
/// The encryption key mirrors the master key length: 16 bytes under AES-128,
/// 32 bytes under AES-256. The authentication key is always 16 bytes.
#[derive(Zeroize)]
#[zeroize(drop)]
pub(crate) struct DerivedKeys {
    auth_key: [u8; AUTH_KEY_SIZE],
    enc_key: [u8; AES256_KEY_SIZE],
    enc_key_len: usize,
}

impl DerivedKeys {
    /// Derives both subkeys under the master key schedule.
    ///
    /// Counters 0 and 1 fill the authentication key; counters 2.. fill the
    /// encryption key (2..=3 for AES-128, 2..=5 for AES-256).
    pub fn derive(master: &BlockCipher, nonce: &[u8; NONCE_SIZE]) -> Self {
        let mut keys = Self {
            auth_key: [0; AUTH_KEY_SIZE],
            enc_key: [0; AES256_KEY_SIZE],
            enc_key_len: master.key_size(),
        };

        let mut block = SensitiveArrayU8::<BLOCK_SIZE>::new();
        let mut scratch = SensitiveArrayU8::<BLOCK_SIZE>::new();
        block[4..].copy_from_slice(nonce);

        let half_count = (AUTH_KEY_SIZE + keys.enc_key_len) / 8;
        for half in 0..half_count {
            let mut ctr = half as u32;
            u32_to_le(
                &mut ctr,
                (&mut block[0..4])
                    .try_into()
                    .expect("infallible: block[0..4] is exactly 4 bytes"),
            );

            scratch.copy_from_slice(&block[..]);
            master.encrypt_block(&mut scratch);

            let dst = half * 8;
            if dst < AUTH_KEY_SIZE {
                keys.auth_key[dst..dst + 8].copy_from_slice(&scratch[..8]);
            } else {
                let dst = dst - AUTH_KEY_SIZE;
                keys.enc_key[dst..dst + 8].copy_from_slice(&scratch[..8]);
            }
        }

        block.zeroize();
        scratch.zeroize();

        keys
    }

    pub fn auth_key(&self) -> &[u8; AUTH_KEY_SIZE] {
        &self.auth_key
    }

    pub fn enc_key(&self) -> &[u8] {
        &self.enc_key[..self.enc_key_len]
    }
}

impl core::fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DerivedKeys {{ [protected] }}")
    }
}
