// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sensitive data wrapper with mandatory zeroization.
//!
//! Ensures sensitive cryptographic material is zeroed before being dropped.
//! In debug builds, forgetting to call `zeroize()` will panic.

use core::ops::{Deref, DerefMut};

use zeroize::Zeroize;

/// A fixed-size byte array that must be explicitly zeroized before drop.
///
/// In debug builds, dropping without zeroizing will panic. This ensures
/// developers don't forget to clean up sensitive data.
pub(crate) struct SensitiveArrayU8<const N: usize>([u8; N]);

impl<const N: usize> SensitiveArrayU8<N> {
    /// Create a new zeroed sensitive array.
    #[inline]
    pub fn new() -> Self {
        Self([0; N])
    }

    /// Check if all bytes are zero.
    #[inline]
    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }
}

impl<const N: usize> Zeroize for SensitiveArrayU8<N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<const N: usize> Deref for SensitiveArrayU8<N> {
    type Target = [u8; N];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for SensitiveArrayU8<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Drop for SensitiveArrayU8<N> {
    fn drop(&mut self) {
        debug_assert!(
            self.is_zeroed(),
            "SensitiveArrayU8<{}> dropped without zeroize()! \
             This is a security bug - sensitive data left in memory.",
            N
        );
    }
}

impl<const N: usize> core::fmt::Debug for SensitiveArrayU8<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SensitiveArrayU8<{N}> {{ [protected] }}")
    }
}

#[cfg(test)]
mod tests {
    use zeroize::Zeroize;

    use super::SensitiveArrayU8;

    #[test]
    fn test_starts_zeroed() {
        let array = SensitiveArrayU8::<16>::new();

        assert!(array.is_zeroed());
        assert_eq!(*array, [0u8; 16]);
    }

    #[test]
    fn test_zeroize_clears_contents() {
        let mut array = SensitiveArrayU8::<16>::new();
        array.copy_from_slice(&[0xFF; 16]);

        assert!(!array.is_zeroed());

        array.zeroize();

        assert!(array.is_zeroed());
    }

    #[test]
    #[should_panic(expected = "dropped without zeroize()")]
    #[cfg(debug_assertions)]
    fn test_drop_without_zeroize_panics() {
        let mut array = SensitiveArrayU8::<4>::new();
        array[0] = 1;
    }
}
