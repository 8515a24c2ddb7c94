// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_fail_behaviour() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtFillBytes);
    let mut bytes = [0u8; 12];

    assert_eq!(
        mock.fill_bytes(&mut bytes),
        Err(EntropyError::EntropyNotAvailable)
    );
}

#[test]
fn test_fill_with_byte_behaviour() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FillWithByte(0xAB));
    let mut bytes = [0u8; 12];

    mock.fill_bytes(&mut bytes).expect("mock never fails here");

    assert_eq!(bytes, [0xAB; 12]);
}

#[test]
fn test_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtFillBytes);
    let mut bytes = [0u8; 12];

    assert!(mock.fill_bytes(&mut bytes).is_err());

    mock.change_behaviour(MockEntropySourceBehaviour::FillWithByte(0x01));

    assert!(mock.fill_bytes(&mut bytes).is_ok());
    assert_eq!(bytes, [0x01; 12]);
}
