// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod tests {
    use sivutil::constant_time_eq;

    #[test]
    fn test_matching_tags() {
        let tag = [0x7f, 0x03, 0xc8, 0x51, 0x12, 0xee, 0x40, 0x9a];

        assert!(constant_time_eq(&tag, &tag.clone()));
    }

    #[test]
    fn test_mismatch_detected_in_every_position() {
        let base = [0u8; 16];

        for i in 0..base.len() {
            let mut other = base;
            other[i] = 0x20;

            assert!(!constant_time_eq(&base, &other), "position {i}");
        }
    }

    #[test]
    fn test_mismatch_in_a_single_bit() {
        let a = [0b0100_0001u8; 16];
        let mut b = a;
        b[7] ^= 0b0000_0100;

        assert!(!constant_time_eq(&a, &b));
    }

    #[test]
    fn test_length_mismatch_is_unequal() {
        assert!(!constant_time_eq(&[0xab; 16], &[0xab; 15]));
        assert!(!constant_time_eq(&[], &[0x00]));
    }

    #[test]
    fn test_empty_inputs_are_equal() {
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_swapped_bytes_are_unequal() {
        assert!(!constant_time_eq(&[0x0f, 0xf0], &[0xf0, 0x0f]));
    }
}
