// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text to bytes on the way in, bytes to hex on the way out.

use crate::error::DigestError;

/// Returns the UTF-8 bytes of `text`.
///
/// # Errors
/// Returns `DigestError::InvalidArgument` if `text` is absent.
pub fn encode_utf8<'a>(text: impl Into<Option<&'a str>>) -> Result<Vec<u8>, DigestError> {
    let text = text.into().ok_or(DigestError::InvalidArgument)?;
    Ok(text.as_bytes().to_vec())
}

/// Lowercase hex rendering, two digits per byte in input order.
#[inline]
pub fn to_hex(bytes: &[u8]) -> String {
    hashlab_util::bytes_to_hex(bytes)
}
