// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::consts::BLOCK_LEN;
use crate::{pad, padded_len, sha256, sha256_hex, to_hex, weak_checksum};

proptest! {
    #[test]
    fn sha256_hex_is_deterministic(text in ".*") {
        let first = sha256_hex(text.as_str()).expect("text input is present");
        let second = sha256_hex(text.as_str()).expect("text input is present");

        prop_assert_eq!(first, second);
    }

    #[test]
    fn sha256_hex_is_64_lowercase_hex_digits(text in ".*") {
        let digest = sha256_hex(text.as_str()).expect("text input is present");

        prop_assert_eq!(digest.len(), 64);
        prop_assert!(digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn sha256_hex_hashes_utf8_bytes(text in ".*") {
        let digest = sha256_hex(text.as_str()).expect("text input is present");

        prop_assert_eq!(digest, to_hex(sha256(text.as_bytes()).as_bytes()));
    }

    #[test]
    fn pad_is_block_aligned_and_longer(message in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let padded = pad(&message);

        prop_assert_eq!(padded.len() % BLOCK_LEN, 0);
        prop_assert!(padded.len() > message.len());
        prop_assert!(padded.len() - message.len() <= BLOCK_LEN + 8);
        prop_assert_eq!(padded.len(), padded_len(message.len()));
    }

    #[test]
    fn weak_checksum_is_below_modulus(text in ".*") {
        let checksum = weak_checksum(text.as_str()).expect("text input is present");

        prop_assert!(checksum < 100);
    }

    #[test]
    fn weak_checksum_ignores_character_order(text in ".*") {
        let reversed: String = text.chars().rev().collect();

        prop_assert_eq!(
            weak_checksum(text.as_str()).expect("text input is present"),
            weak_checksum(reversed.as_str()).expect("text input is present")
        );
    }
}
