// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod tests {
    use sivutil::u64_from_le;

    #[test]
    fn test_byte_zero_is_least_significant() {
        let mut value: u64 = 0;
        let mut bytes = [0xf0, 0xde, 0xbc, 0x9a, 0x78, 0x56, 0x34, 0x12];

        u64_from_le(&mut value, &mut bytes);

        assert_eq!(value, 0x123456789abcdef0);
    }

    #[test]
    fn test_upper_word_comes_from_tail_bytes() {
        let mut value: u64 = 0;
        let mut bytes = [0, 0, 0, 0, 0x01, 0, 0, 0];

        u64_from_le(&mut value, &mut bytes);

        assert_eq!(value, 1 << 32);
    }

    #[test]
    fn test_drains_source() {
        let mut value: u64 = 0;
        let mut bytes = [0x3d, 0x91, 0x55, 0x07, 0xaa, 0x68, 0x2e, 0xc4];

        u64_from_le(&mut value, &mut bytes);

        assert_eq!(value, 0xc42e68aa0755913d);
        assert_eq!(bytes, [0u8; 8]);
    }

    #[test]
    fn test_replaces_stale_destination() {
        let mut value: u64 = u64::MAX;
        let mut bytes = [0x09, 0, 0, 0, 0, 0, 0, 0];

        u64_from_le(&mut value, &mut bytes);

        assert_eq!(value, 9);
    }
}
