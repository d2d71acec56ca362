// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use hashlab_util::{constant_time_eq, u32_to_be};

use crate::consts::{DIGEST_LEN, HEX_DIGEST_LEN};
use crate::encoder::to_hex;

/// A finished SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wraps raw digest bytes
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// 64-character lowercase hex rendering
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Compares against an expected hex digest in constant time.
    ///
    /// Case-insensitive. Returns `false` for strings of the wrong length.
    pub fn matches_hex(&self, expected: &str) -> bool {
        if expected.len() != HEX_DIGEST_LEN {
            return false;
        }
        let expected = expected.to_ascii_lowercase();
        constant_time_eq(self.to_hex().as_bytes(), expected.as_bytes())
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Serializes the final hash state H(N), each word big-endian, in index order.
pub fn finalize(h: [u32; 8]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(h) {
        chunk.copy_from_slice(&u32_to_be(word));
    }
    Digest(out)
}
