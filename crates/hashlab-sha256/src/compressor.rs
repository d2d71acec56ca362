// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression per FIPS 180-4 Section 6.2.2

use hashlab_util::u32_from_be;

use crate::consts::{BLOCK_LEN, H0, K};
use crate::word::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// Builds the message schedule W[0..63] for one block.
pub(crate) fn message_schedule(block: &[u8; BLOCK_LEN]) -> [u32; 64] {
    let mut w = [0u32; 64];

    // W[0..15] from block (big-endian)
    for (t, word) in block.chunks_exact(4).enumerate() {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(word);
        w[t] = u32_from_be(&bytes);
    }

    // W[16..63]: W[t] = W[t-16] + σ0(W[t-15]) + W[t-7] + σ1(W[t-2])
    for t in 16..64 {
        w[t] = w[t - 16]
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig1(w[t - 2]));
    }

    w
}

/// Mixes one 64-byte block into the hash state.
pub fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let w = message_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

    for (k, wt) in K.iter().zip(w.iter()) {
        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*wt);
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (acc, v) in h.iter_mut().zip([a, b, c, d, e, f, g, hh]) {
        *acc = acc.wrapping_add(v);
    }
}

/// Runs the compression function over every block of a padded buffer,
/// starting from H(0).
///
/// `padded` must come from `pad`; a trailing partial block is ignored.
pub fn compress(padded: &[u8]) -> [u32; 8] {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0, "buffer is not block aligned");

    let mut h = H0;
    let mut blocks = 0usize;

    for chunk in padded.chunks_exact(BLOCK_LEN) {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        compress_block(&mut h, &block);
        blocks += 1;
    }

    tracing::trace!(blocks, "compressed padded buffer");
    h
}
