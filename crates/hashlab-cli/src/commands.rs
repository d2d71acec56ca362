// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot subcommands. Output goes to the given writer so tests can
//! capture it.
//!
//! The report writers are shared with the interactive menu, so both print
//! the same lines.

use std::io::{self, Write};

use anyhow::{Context, Result};
use hashlab_sha256::{
    ChecksumComparison, SELF_TEST_INPUT, compare_checksums, self_test, sha256_hex, weak_checksum,
};

/// Writes the digest and weak checksum of one input.
pub fn write_hash_report<W: Write>(out: &mut W, digest: &str, checksum: u8) -> io::Result<()> {
    writeln!(out, "SHA-256: {digest}")?;
    writeln!(out, "Weak checksum (mod 100): {checksum}")
}

/// Writes both checksums followed by the collision verdict.
pub fn write_comparison<W: Write>(
    out: &mut W,
    first: &str,
    second: &str,
    comparison: &ChecksumComparison,
) -> io::Result<()> {
    writeln!(out, "checksum({first:?}) = {}", comparison.first)?;
    writeln!(out, "checksum({second:?}) = {}", comparison.second)?;
    writeln!(
        out,
        "Collision: {}",
        if comparison.is_collision() { "YES" } else { "NO" }
    )
}

pub fn hash<W: Write>(out: &mut W, text: &str) -> Result<()> {
    let digest = sha256_hex(text).context("hash text")?;
    let checksum = weak_checksum(text).context("checksum text")?;

    write_hash_report(out, &digest, checksum)?;
    Ok(())
}

pub fn compare<W: Write>(out: &mut W, first: &str, second: &str) -> Result<()> {
    let comparison = compare_checksums(first, second).context("compare checksums")?;

    write_comparison(out, first, second, &comparison)?;
    Ok(())
}

/// Prints PASSED/FAILED and returns the failure as an error.
pub fn run_self_test<W: Write>(out: &mut W) -> Result<()> {
    match self_test() {
        Ok(()) => {
            writeln!(out, "SHA-256 self-test on {SELF_TEST_INPUT:?}: PASSED")?;
            Ok(())
        }
        Err(err) => {
            tracing::warn!(%err, "self-test failed");
            writeln!(out, "SHA-256 self-test on {SELF_TEST_INPUT:?}: FAILED")?;
            Err(err).context("self-test")
        }
    }
}
