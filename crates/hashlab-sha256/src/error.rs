// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors returned by the hashing and checksum operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// A required text input was absent
    #[error("invalid argument: input text is required")]
    InvalidArgument,

    /// The built-in known-answer check produced a different digest
    #[error("self-test failed: expected {expected}, got {actual}")]
    SelfTestFailed {
        /// Digest the check expected
        expected: String,
        /// Digest the implementation produced
        actual: String,
    },
}
