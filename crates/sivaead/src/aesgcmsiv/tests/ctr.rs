// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counter-mode keystream tests, including the 32-bit wrap behaviour.

use crate::aesgcmsiv::cipher::BlockCipher;
use crate::aesgcmsiv::consts::BLOCK_SIZE;
use crate::aesgcmsiv::ctr::Ctr32;

const KEY: [u8; 16] = [
    0xee, 0x8e, 0x1e, 0xd9, 0xff, 0x25, 0x40, 0xae, 0x8f, 0x2b, 0xa9, 0xf5, 0x0b, 0xc2, 0xf2,
    0x7c,
];

const SEED: [u8; BLOCK_SIZE] = [
    0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80, 0x90, 0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0,
    0x81,
];

fn keystream_block(cipher: &BlockCipher, counter: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut block = *counter;
    cipher.encrypt_block(&mut block);
    block
}

#[test]
fn test_self_inverse() {
    let cipher = BlockCipher::new(&KEY).expect("valid key length");
    let original: Vec<u8> = (0u8..37).collect();
    let mut data = original.clone();

    Ctr32::new(&SEED).apply_keystream(&cipher, &mut data);
    assert_ne!(data, original);

    Ctr32::new(&SEED).apply_keystream(&cipher, &mut data);
    assert_eq!(data, original);
}

/// XORing over zeros exposes the raw keystream; every block must be the
/// encryption of the successive counter values.
#[test]
fn test_keystream_matches_successive_counters() {
    let cipher = BlockCipher::new(&KEY).expect("valid key length");
    let mut data = [0u8; 3 * BLOCK_SIZE];

    Ctr32::new(&SEED).apply_keystream(&cipher, &mut data);

    let mut counter = SEED;
    for chunk in data.chunks(BLOCK_SIZE) {
        assert_eq!(chunk, &keystream_block(&cipher, &counter)[..]);

        let word = u32::from_le_bytes(counter[0..4].try_into().unwrap()).wrapping_add(1);
        counter[0..4].copy_from_slice(&word.to_le_bytes());
    }
}

/// The counter in bytes 0..3 wraps modulo 2^32; the carry must not reach
/// byte 4.
#[test]
fn test_wrap_does_not_carry_into_byte_four() {
    let cipher = BlockCipher::new(&KEY).expect("valid key length");

    let mut seed = SEED;
    seed[0..4].copy_from_slice(&[0xff, 0xff, 0xff, 0xff]);
    let mut data = [0u8; 2 * BLOCK_SIZE];

    Ctr32::new(&seed).apply_keystream(&cipher, &mut data);

    let mut wrapped = seed;
    wrapped[0..4].copy_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    assert_eq!(&data[..BLOCK_SIZE], &keystream_block(&cipher, &seed)[..]);
    assert_eq!(&data[BLOCK_SIZE..], &keystream_block(&cipher, &wrapped)[..]);
}

/// A wrap in the middle of a longer message keeps bytes 4..15 fixed across
/// the boundary.
#[test]
fn test_wrap_mid_stream() {
    let cipher = BlockCipher::new(&KEY).expect("valid key length");

    let mut seed = SEED;
    seed[0..4].copy_from_slice(&[0xfe, 0xff, 0xff, 0xff]);
    let mut data = [0u8; 3 * BLOCK_SIZE];

    Ctr32::new(&seed).apply_keystream(&cipher, &mut data);

    for (i, counter_word) in [0xfffffffeu32, 0xffffffff, 0x00000000].iter().enumerate() {
        let mut counter = seed;
        counter[0..4].copy_from_slice(&counter_word.to_le_bytes());

        assert_eq!(
            &data[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE],
            &keystream_block(&cipher, &counter)[..],
            "block {i} mismatch"
        );
    }
}

#[test]
fn test_partial_final_block() {
    let cipher = BlockCipher::new(&KEY).expect("valid key length");
    let mut data = [0u8; BLOCK_SIZE + 5];

    Ctr32::new(&SEED).apply_keystream(&cipher, &mut data);

    let mut second = SEED;
    let word = u32::from_le_bytes(second[0..4].try_into().unwrap()).wrapping_add(1);
    second[0..4].copy_from_slice(&word.to_le_bytes());

    assert_eq!(&data[..BLOCK_SIZE], &keystream_block(&cipher, &SEED)[..]);
    assert_eq!(
        &data[BLOCK_SIZE..],
        &keystream_block(&cipher, &second)[..5]
    );
}
