// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the hashlab crates.
//!
//! Big-endian conversions are written as explicit shifts and masks so the
//! result never depends on the byte order of the host.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::string::String;
#[cfg(any(test, feature = "test-utils"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;

#[cfg(test)]
mod tests;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Generates `{type}_from_be` and `{type}_to_be` functions for integer types.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Packs ", stringify!($size), " big-endian bytes into a `", stringify!($type), "`.")]
        ///
        /// The first byte becomes the most significant one.
        #[inline(always)]
        pub fn $fn_from(bytes: &[u8; $size]) -> $type {
            let mut value: $type = 0;
            for &byte in bytes.iter() {
                value = (value << 8) | (byte as $type);
            }
            value
        }

        #[doc = concat!("Unpacks a `", stringify!($type), "` into ", stringify!($size), " big-endian bytes.")]
        #[inline(always)]
        pub fn $fn_to(value: $type) -> [u8; $size] {
            let mut bytes = [0u8; $size];
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = ((value >> (8 * ($size - 1 - i))) & 0xff) as u8;
            }
            bytes
        }
    };
}

impl_be_conversions!(u32, 4, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, u64_from_be, u64_to_be);

/// Encodes bytes as lowercase hexadecimal, two digits per byte.
///
/// The output is always `2 * bytes.len()` characters long.
///
/// # Example
///
/// ```
/// use hashlab_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad, 0x0b, 0x01]), "dead0b01");
/// assert_eq!(bytes_to_hex(&[]), "");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal immediately; lengths are not
/// treated as secret.
///
/// # Example
///
/// ```
/// use hashlab_util::constant_time_eq;
///
/// assert!(constant_time_eq(b"digest", b"digest"));
/// assert!(!constant_time_eq(b"digest", b"digesT"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    bool::from(a.ct_eq(b))
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
#[cfg(any(test, feature = "test-utils"))]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string has odd length");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
