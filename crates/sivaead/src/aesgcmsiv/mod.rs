// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-GCM-SIV implementation (RFC 8452).

#[cfg(test)]
mod tests;

mod aead;
mod cipher;
mod consts;
mod ctr;
mod kdf;
mod polyval;

pub use aead::AesGcmSiv;
pub use consts::{AES128_KEY_SIZE, AES256_KEY_SIZE, NONCE_SIZE, TAG_SIZE};
