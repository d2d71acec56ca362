// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::checksum::{compare_checksums, weak_checksum};
use crate::error::DigestError;

#[test]
fn test_weak_checksum_ab_ba_collide() {
    // 97 + 98 = 195, 195 mod 100 = 95
    assert_eq!(weak_checksum("ab"), Ok(95));
    assert_eq!(weak_checksum("ba"), Ok(95));
}

#[test]
fn test_weak_checksum_empty() {
    assert_eq!(weak_checksum(""), Ok(0));
}

#[test]
fn test_weak_checksum_uses_code_points() {
    // U+00E9 = 233, U+1F600 = 128512
    assert_eq!(weak_checksum("é"), Ok(33));
    assert_eq!(weak_checksum("😀"), Ok(12));
}

#[test]
fn test_weak_checksum_wraps_at_modulus() {
    // 'd' = 100
    assert_eq!(weak_checksum("d"), Ok(0));
    assert_eq!(weak_checksum("dd"), Ok(0));
    assert_eq!(weak_checksum("c"), Ok(99));
}

#[test]
fn test_weak_checksum_absent() {
    assert_eq!(weak_checksum(None::<&str>), Err(DigestError::InvalidArgument));
}

#[test]
fn test_compare_checksums_collision() {
    let comparison = compare_checksums("ab", "ba").expect("both inputs present");

    assert_eq!(comparison.first, 95);
    assert_eq!(comparison.second, 95);
    assert!(comparison.is_collision());
}

#[test]
fn test_compare_checksums_no_collision() {
    let comparison = compare_checksums("a", "b").expect("both inputs present");

    assert_eq!(comparison.first, 97);
    assert_eq!(comparison.second, 98);
    assert!(!comparison.is_collision());
}

#[test]
fn test_compare_checksums_absent_input() {
    assert_eq!(
        compare_checksums("a", None::<&str>),
        Err(DigestError::InvalidArgument)
    );
    assert_eq!(
        compare_checksums(None::<&str>, "b"),
        Err(DigestError::InvalidArgument)
    );
}
