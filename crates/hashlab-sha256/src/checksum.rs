// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deliberately weak checksum used to show how easily short digests collide.
//!
//! Not a cryptographic primitive. Any two inputs whose code point sums agree
//! modulo 100 collide, e.g. every permutation of the same characters.

use crate::error::DigestError;

/// Modulus of the weak checksum
pub const CHECKSUM_MODULUS: u64 = 100;

/// Sum of the Unicode scalar values of `text`, modulo 100.
///
/// # Errors
/// Returns `DigestError::InvalidArgument` if `text` is absent.
pub fn weak_checksum<'a>(text: impl Into<Option<&'a str>>) -> Result<u8, DigestError> {
    let text = text.into().ok_or(DigestError::InvalidArgument)?;

    let sum = text
        .chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))));

    // Result is < 100, fits in u8
    Ok((sum % CHECKSUM_MODULUS) as u8)
}

/// Weak checksums of two inputs side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumComparison {
    /// Checksum of the first input
    pub first: u8,
    /// Checksum of the second input
    pub second: u8,
}

impl ChecksumComparison {
    /// Whether both inputs share a checksum
    pub fn is_collision(&self) -> bool {
        self.first == self.second
    }
}

/// Computes the weak checksum of both inputs.
///
/// # Errors
/// Returns `DigestError::InvalidArgument` if either input is absent.
pub fn compare_checksums<'a, 'b>(
    first: impl Into<Option<&'a str>>,
    second: impl Into<Option<&'b str>>,
) -> Result<ChecksumComparison, DigestError> {
    let comparison = ChecksumComparison {
        first: weak_checksum(first)?,
        second: weak_checksum(second)?,
    };

    tracing::debug!(
        first = comparison.first,
        second = comparison.second,
        collision = comparison.is_collision(),
        "compared weak checksums"
    );

    Ok(comparison)
}
