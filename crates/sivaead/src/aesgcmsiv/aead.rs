// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-GCM-SIV composition (RFC 8452 sections 6 and 7).
//!
//! The POLYVAL digest over the framed (aad, plaintext), folded with the
//! nonce and encrypted, is both the authentication tag and (with the top
//! bit of its last byte set) the CTR seed. Decryption runs CTR first over
//! the candidate plaintext, recomputes the tag and compares in constant
//! time.

use sivrand::{EntropySource, SystemEntropySource};
use sivutil::{constant_time_eq, u64_to_le};
use zeroize::Zeroize;

use super::cipher::BlockCipher;
use super::consts::{BLOCK_SIZE, NONCE_SIZE, TAG_SIZE};
use super::ctr::Ctr32;
use super::kdf::DerivedKeys;
use super::polyval::Polyval;
use crate::error::AeadError;
use crate::sensitive::SensitiveArrayU8;
use crate::traits::Aead;

/// AES-GCM-SIV AEAD handle.
///
/// Holds only the immutable master key schedule; every `seal`/`open` call
/// derives fresh subkeys and keeps its per-message state on its own stack,
/// so one handle may be shared freely across threads.
pub struct AesGcmSiv {
    cipher: BlockCipher,
}

impl AesGcmSiv {
    /// Creates a handle from a 16-byte (AES-128) or 32-byte (AES-256) key.
    pub fn new(key: &[u8]) -> Result<Self, AeadError> {
        Ok(Self {
            cipher: BlockCipher::new(key)?,
        })
    }

    /// Encrypts `plaintext` and authenticates it together with `aad`,
    /// returning `ciphertext || tag`.
    ///
    /// The nonce must be exactly 12 bytes. Nonce reuse under the same key
    /// only reveals whether identical (nonce, plaintext, aad) inputs were
    /// sealed; it does not expose the key or other plaintexts.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| AeadError::InvalidNonceSize)?;

        let keys = DerivedKeys::derive(&self.cipher, nonce);
        let enc_cipher = BlockCipher::new(keys.enc_key())
            .expect("infallible: derived key length is 16 or 32 bytes");

        let mut tag = [0u8; TAG_SIZE];
        compute_tag(&enc_cipher, keys.auth_key(), nonce, aad, plaintext, &mut tag);

        let mut out = vec![0u8; plaintext.len() + TAG_SIZE];
        out[..plaintext.len()].copy_from_slice(plaintext);

        let mut seed = tag;
        seed[TAG_SIZE - 1] |= 0x80;
        let mut ctr = Ctr32::new(&seed);
        ctr.apply_keystream(&enc_cipher, &mut out[..plaintext.len()]);
        seed.zeroize();

        out[plaintext.len()..].copy_from_slice(&tag);

        Ok(out)
    }

    /// Verifies and decrypts `input` (`ciphertext || tag`), returning the
    /// plaintext.
    ///
    /// On authentication failure the candidate plaintext is zeroized before
    /// the error is returned; nothing about the mismatch position leaks.
    pub fn open(&self, nonce: &[u8], input: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| AeadError::InvalidNonceSize)?;

        if input.len() < TAG_SIZE {
            return Err(AeadError::CiphertextTooShort);
        }

        let (ciphertext, received_tag) = input.split_at(input.len() - TAG_SIZE);

        let keys = DerivedKeys::derive(&self.cipher, nonce);
        let enc_cipher = BlockCipher::new(keys.enc_key())
            .expect("infallible: derived key length is 16 or 32 bytes");

        let mut seed: [u8; TAG_SIZE] = received_tag
            .try_into()
            .expect("infallible: split leaves exactly 16 bytes");
        seed[TAG_SIZE - 1] |= 0x80;

        let mut plaintext = ciphertext.to_vec();
        let mut ctr = Ctr32::new(&seed);
        ctr.apply_keystream(&enc_cipher, &mut plaintext);
        seed.zeroize();

        let mut expected_tag = [0u8; TAG_SIZE];
        compute_tag(
            &enc_cipher,
            keys.auth_key(),
            nonce,
            aad,
            &plaintext,
            &mut expected_tag,
        );

        if !constant_time_eq(&expected_tag, received_tag) {
            plaintext.zeroize();
            expected_tag.zeroize();
            return Err(AeadError::AuthenticationFailed);
        }

        Ok(plaintext)
    }

    /// Seals with a fresh random nonce, returning `nonce || ciphertext || tag`.
    ///
    /// The nonce comes from the operating system CSPRNG; the nonce-misuse
    /// resistance of the scheme is only as good as that source.
    pub fn seal_auto(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        self.seal_auto_with(&SystemEntropySource, plaintext, aad)
    }

    /// Seals with a fresh nonce drawn from the supplied entropy source.
    pub fn seal_auto_with(
        &self,
        entropy: &impl EntropySource,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let mut nonce = [0u8; NONCE_SIZE];
        entropy.fill_bytes(&mut nonce)?;

        let sealed = self.seal(&nonce, plaintext, aad)?;

        let mut out = Vec::with_capacity(NONCE_SIZE + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);

        Ok(out)
    }

    /// Opens a `nonce || ciphertext || tag` message produced by
    /// [`AesGcmSiv::seal_auto`].
    ///
    /// Inputs too short to carry a nonce are reported as too short, the same
    /// failure family as a bad tag; callers cannot turn truncation into a
    /// distinguishable argument error.
    pub fn open_auto(&self, input: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        if input.len() < NONCE_SIZE {
            return Err(AeadError::CiphertextTooShort);
        }

        let (nonce, rest) = input.split_at(NONCE_SIZE);
        self.open(nonce, rest, aad)
    }
}

impl Aead for AesGcmSiv {
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        AesGcmSiv::seal(self, nonce, plaintext, aad)
    }

    fn open(&self, nonce: &[u8], input: &[u8], aad: &[u8]) -> Result<Vec<u8>, AeadError> {
        AesGcmSiv::open(self, nonce, input, aad)
    }
}

impl core::fmt::Debug for AesGcmSiv {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AesGcmSiv {{ [protected] }}")
    }
}

/// Computes the tag over the framed (aad, text) pair.
///
/// POLYVAL input format:
/// - aad || pad16(aad)
/// - text || pad16(text)
/// - len(aad) in bits as u64 little-endian || len(text) in bits as u64
///   little-endian
///
/// The digest is XORed with the nonce in bytes 0..11, the top bit of byte 15
/// is cleared, and the block is encrypted under the message-encryption key.
fn compute_tag(
    enc_cipher: &BlockCipher,
    auth_key: &[u8; BLOCK_SIZE],
    nonce: &[u8; NONCE_SIZE],
    aad: &[u8],
    text: &[u8],
    tag: &mut [u8; TAG_SIZE],
) {
    let mut polyval = Polyval::new(auth_key);
    polyval.update(aad);
    polyval.update(text);

    let mut len_block = SensitiveArrayU8::<BLOCK_SIZE>::new();
    let mut aad_bits = (aad.len() as u64) * 8;
    let mut text_bits = (text.len() as u64) * 8;
    u64_to_le(
        &mut aad_bits,
        (&mut len_block[0..8])
            .try_into()
            .expect("infallible: len_block[0..8] is exactly 8 bytes"),
    );
    u64_to_le(
        &mut text_bits,
        (&mut len_block[8..16])
            .try_into()
            .expect("infallible: len_block[8..16] is exactly 8 bytes"),
    );
    polyval.update(&len_block[..]);
    len_block.zeroize();

    polyval.digest(tag);

    for (tag_byte, nonce_byte) in tag.iter_mut().zip(nonce.iter()) {
        *tag_byte ^= nonce_byte;
    }
    tag[TAG_SIZE - 1] &= 0x7f;

    enc_cipher.encrypt_block(tag);
}
