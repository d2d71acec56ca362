// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::compressor::{compress, compress_block, message_schedule};
use crate::consts::{BLOCK_LEN, H0};
use crate::padder::pad;

#[test]
fn test_message_schedule_abc() {
    // FIPS 180-4 example: W values for the single "abc" block
    let padded = pad(b"abc");
    let mut block = [0u8; BLOCK_LEN];
    block.copy_from_slice(&padded);

    let w = message_schedule(&block);

    assert_eq!(w[0], 0x6162_6380);
    assert!(w[1..15].iter().all(|&x| x == 0));
    assert_eq!(w[15], 0x0000_0018);
    assert_eq!(w[16], 0x6162_6380);
    assert_eq!(w[17], 0x000f_0000);
}

#[test]
fn test_compress_abc() {
    let h = compress(&pad(b"abc"));

    assert_eq!(
        h,
        [
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
            0xf20015ad,
        ]
    );
}

#[test]
fn test_compress_empty() {
    let h = compress(&pad(b""));

    assert_eq!(
        h,
        [
            0xe3b0c442, 0x98fc1c14, 0x9afbf4c8, 0x996fb924, 0x27ae41e4, 0x649b934c, 0xa495991b,
            0x7852b855,
        ]
    );
}

#[test]
fn test_compress_block_chains_state() {
    // Two blocks through compress() equal two manual compress_block() calls
    let padded = pad(&[0x5au8; 100]);
    assert_eq!(padded.len(), 2 * BLOCK_LEN);

    let mut h = H0;
    for chunk in padded.chunks_exact(BLOCK_LEN) {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        compress_block(&mut h, &block);
    }

    assert_eq!(compress(&padded), h);
}

#[test]
fn test_compress_leaves_h0_untouched() {
    let before = H0;

    let _ = compress(&pad(b"seed must stay constant"));

    assert_eq!(H0, before);
    assert_eq!(H0[0], 0x6a09e667);
}

#[test]
fn test_compress_block_wraps_instead_of_overflowing() {
    // All-ones state and block exercise every wrapping addition
    let mut h = [u32::MAX; 8];
    compress_block(&mut h, &[0xffu8; BLOCK_LEN]);

    assert_ne!(h, [u32::MAX; 8]);
}
