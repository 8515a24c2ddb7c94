// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared constants for AES-GCM-SIV.

/// AES block size in bytes; POLYVAL blocks and framing use the same width
pub const BLOCK_SIZE: usize = 16;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Nonce size in bytes (fixed by RFC 8452)
pub const NONCE_SIZE: usize = 12;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Message-authentication subkey size in bytes
pub const AUTH_KEY_SIZE: usize = 16;
