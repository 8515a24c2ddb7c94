// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD trait definition.

use crate::error::AeadError;

/// Authenticated Encryption with Associated Data (AEAD).
pub trait Aead {
    /// Encrypt `plaintext` and authenticate it together with `aad`,
    /// returning the ciphertext with the tag appended.
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError>;

    /// Verify and decrypt `input` (ciphertext with tag appended),
    /// returning the plaintext.
    fn open(&self, nonce: &[u8], input: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError>;
}
