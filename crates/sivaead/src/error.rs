// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Common AEAD error type.

use sivrand::EntropyError;

use crate::aesgcmsiv::NONCE_SIZE;

/// Errors that can occur during AEAD operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AeadError {
    /// Key is neither 16 nor 32 bytes long.
    #[error("key must be 16 or 32 bytes long")]
    InvalidKeySize,

    /// Nonce is not exactly [`NONCE_SIZE`] bytes long.
    #[error("nonce must be exactly {NONCE_SIZE} bytes long")]
    InvalidNonceSize,

    /// Ciphertext is too short to carry an authentication tag (or, in
    /// automatic-nonce mode, a nonce). The minimum depends on the call:
    /// 16 bytes for `open`, 28 for `open_auto`.
    #[error("ciphertext too short")]
    CiphertextTooShort,

    /// Authentication tag verification failed (ciphertext or AAD was modified).
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    /// Nonce generation failed in automatic-nonce mode.
    #[error("nonce generation failed")]
    Entropy(#[from] EntropyError),
}
