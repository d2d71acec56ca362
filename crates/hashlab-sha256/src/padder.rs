// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1.1

use hashlab_util::u64_to_be;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN, PAD_TERMINATOR};

/// Number of bytes between the end of the message and the length field,
/// terminator included. Always in `1..=64`.
#[inline]
fn pad_len(message_len: usize) -> usize {
    let tail = message_len % BLOCK_LEN;
    let room = BLOCK_LEN - LENGTH_FIELD_LEN;

    // (56 - tail) mod 64, without going negative
    let len = (room + BLOCK_LEN - tail) % BLOCK_LEN;
    if len == 0 { BLOCK_LEN } else { len }
}

/// Length of the buffer `pad` produces for a message of `message_len` bytes.
#[inline]
pub fn padded_len(message_len: usize) -> usize {
    message_len + pad_len(message_len) + LENGTH_FIELD_LEN
}

/// Pads `message` to a whole number of 64-byte blocks.
///
/// Output = message || 0x80 || 0x00 * (pad_len - 1) || bit_length (64-bit BE).
///
/// Bit lengths of 2^64 and above are out of scope; the length field wraps.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);
    let pad_len = pad_len(message.len());

    let mut padded = Vec::with_capacity(padded_len(message.len()));
    padded.extend_from_slice(message);
    padded.push(PAD_TERMINATOR);
    padded.resize(message.len() + pad_len, 0);
    padded.extend_from_slice(&u64_to_be(bit_len));

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded
}
