// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 written from scratch, over text input.
//!
//! The pipeline is strictly sequential and holds no state between calls:
//!
//! ```text
//! text --encode_utf8--> bytes --pad--> blocks --compress--> H(N) --finalize--> Digest --to_hex--> hex
//! ```
//!
//! A deliberately weak modulo-100 checksum lives alongside for collision
//! demonstrations.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//!
//! # Example
//!
//! ```
//! use hashlab_sha256::{sha256_hex, weak_checksum};
//!
//! assert_eq!(
//!     sha256_hex("abc").unwrap(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! assert_eq!(weak_checksum("ab").unwrap(), weak_checksum("ba").unwrap());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod checksum;
mod compressor;
mod consts;
mod digest;
mod encoder;
mod error;
mod padder;
mod word;

pub use checksum::{CHECKSUM_MODULUS, ChecksumComparison, compare_checksums, weak_checksum};
pub use compressor::{compress, compress_block};
pub use consts::{BLOCK_LEN, DIGEST_LEN, HEX_DIGEST_LEN, SELF_TEST_DIGEST, SELF_TEST_INPUT};
pub use digest::{Digest, finalize};
pub use encoder::{encode_utf8, to_hex};
pub use error::DigestError;
pub use padder::{pad, padded_len};

/// SHA-256 of already-encoded bytes.
pub fn sha256(message: &[u8]) -> Digest {
    tracing::trace!(message_len = message.len(), "hashing message");

    let padded = pad(message);
    finalize(compress(&padded))
}

/// SHA-256 of the UTF-8 encoding of `text`.
///
/// # Errors
/// Returns `DigestError::InvalidArgument` if `text` is absent.
pub fn sha256_digest<'a>(text: impl Into<Option<&'a str>>) -> Result<Digest, DigestError> {
    let message = encode_utf8(text)?;
    Ok(sha256(&message))
}

/// SHA-256 of `text` as a 64-character lowercase hex string.
///
/// # Errors
/// Returns `DigestError::InvalidArgument` if `text` is absent; never fails
/// otherwise.
pub fn sha256_hex<'a>(text: impl Into<Option<&'a str>>) -> Result<String, DigestError> {
    sha256_digest(text).map(|digest| digest.to_hex())
}

/// Checks the implementation against the FIPS 180-4 "abc" vector.
///
/// # Errors
/// Returns `DigestError::SelfTestFailed` carrying both digests on mismatch.
pub fn self_test() -> Result<(), DigestError> {
    let digest = sha256_digest(SELF_TEST_INPUT)?;

    if digest.matches_hex(SELF_TEST_DIGEST) {
        tracing::debug!("self-test passed");
        Ok(())
    } else {
        Err(DigestError::SelfTestFailed {
            expected: SELF_TEST_DIGEST.to_string(),
            actual: digest.to_hex(),
        })
    }
}
