// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{error::EntropyError, EntropySource};

/// Entropy source backed by the operating system CSPRNG.
///
/// Delegates to the `getrandom` crate, which picks the platform interface at
/// build time (the `getrandom()` syscall on Linux, `getentropy()` on
/// macOS/iOS, `BCryptGenRandom` on Windows, `random_get` on WASI). Failures
/// are not retried; a machine without a working entropy source cannot
/// generate nonces safely, and callers decide how fatal that is.
pub struct SystemEntropySource;

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}
