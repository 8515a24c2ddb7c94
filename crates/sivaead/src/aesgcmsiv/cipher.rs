// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES block cipher adapter.
//!
//! Wraps the `aes` crate behind a single-block ECB encrypt operation, keyed
//! with 16 (AES-128) or 32 (AES-256) bytes. No mode of operation is added
//! here; counter handling lives in the CTR module. Round keys are zeroized
//! on drop via the `aes` crate's `zeroize` feature.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes256, Block};

use super::consts::{AES128_KEY_SIZE, AES256_KEY_SIZE, BLOCK_SIZE};
use crate::error::AeadError;

/// Key schedule for single-block AES-ECB encryption.
pub(crate) enum BlockCipher {
    Aes128(Aes128),
    Aes256(Aes256),
}

impl BlockCipher {
    /// Builds a key schedule from a 16- or 32-byte key.
    pub fn new(key: &[u8]) -> Result<Self, AeadError> {
        match key.len() {
            AES128_KEY_SIZE => {
                let cipher = Aes128::new_from_slice(key)
                    .expect("infallible: key length checked against AES128_KEY_SIZE");
                Ok(Self::Aes128(cipher))
            }
            AES256_KEY_SIZE => {
                let cipher = Aes256::new_from_slice(key)
                    .expect("infallible: key length checked against AES256_KEY_SIZE");
                Ok(Self::Aes256(cipher))
            }
            _ => Err(AeadError::InvalidKeySize),
        }
    }

    /// Encrypts one 16-byte block in place.
    #[inline(always)]
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let block = Block::from_mut_slice(block);

        match self {
            Self::Aes128(cipher) => cipher.encrypt_block(block),
            Self::Aes256(cipher) => cipher.encrypt_block(block),
        }
    }

    /// Key length this schedule was built from.
    pub fn key_size(&self) -> usize {
        match self {
            Self::Aes128(_) => AES128_KEY_SIZE,
            Self::Aes256(_) => AES256_KEY_SIZE,
        }
    }
}

impl core::fmt::Debug for BlockCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BlockCipher {{ [protected] }}")
    }
}
