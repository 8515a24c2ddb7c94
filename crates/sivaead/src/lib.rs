// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-GCM-SIV authenticated encryption (RFC 8452).
//!
//! Nonce-misuse-resistant AEAD: the authentication tag is derived
//! deterministically from the message and doubles as the encryption counter
//! seed, so repeating a nonce reveals only whether identical messages were
//! sealed. All per-message secrets are zeroized.

pub mod aesgcmsiv;

mod error;
mod sensitive;
mod traits;

pub use error::AeadError;
pub use traits::Aead;
