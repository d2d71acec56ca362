// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Interactive menu loop.
//!
//! Reads choices and text lines from any `BufRead` and writes the transcript
//! to any `Write`. End of input at the menu prompt ends the session without
//! error. End of input at a text prompt is reported as an invalid argument
//! and the menu is shown again.

use std::io::{BufRead, Write};

use anyhow::Result;
use hashlab_sha256::{compare_checksums, sha256_hex, weak_checksum};

use crate::commands;

const BANNER: &str = "=== Hash demo: SHA-256 (from scratch) + weak checksum ===";

/// Outcome of one pass through the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    self_test: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            self_test: true,
        }
    }

    /// Enables or disables the startup known-answer check
    pub fn with_self_test(mut self, enabled: bool) -> Self {
        self.self_test = enabled;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user picks "exit" or input ends.
    ///
    /// A failing self-test is reported but does not stop the menu.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output)?;

        if self.self_test {
            if let Err(err) = commands::run_self_test(&mut self.output) {
                tracing::warn!(%err, "continuing after failed self-test");
            }
            writeln!(self.output)?;
        }

        loop {
            if self.step()? == Step::Exit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn step(&mut self) -> Result<Step> {
        writeln!(self.output, "Choose an action:")?;
        writeln!(self.output, "1. Compute hashes for one string")?;
        writeln!(
            self.output,
            "2. Check two strings for a collision (weak checksum)"
        )?;
        writeln!(self.output, "3. Exit")?;
        write!(self.output, "Your choice (1/2/3): ")?;
        self.output.flush()?;

        let Some(choice) = self.read_line()? else {
            tracing::debug!("input closed at menu prompt");
            writeln!(self.output)?;
            return Ok(Step::Exit);
        };

        match choice.trim() {
            "1" => self.hash_one()?,
            "2" => self.compare_two()?,
            "3" => {
                writeln!(self.output)?;
                writeln!(self.output, "Goodbye!")?;
                return Ok(Step::Exit);
            }
            other => {
                tracing::info!(choice = other, "unrecognized menu choice");
                writeln!(self.output)?;
                writeln!(self.output, "Invalid choice. Try again.")?;
                writeln!(self.output)?;
            }
        }

        Ok(Step::Continue)
    }

    fn hash_one(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "Enter a string to hash: ")?;
        self.output.flush()?;

        let text = self.read_line()?;

        let results = sha256_hex(text.as_deref())
            .and_then(|digest| Ok((digest, weak_checksum(text.as_deref())?)));

        match results {
            Ok((digest, checksum)) => {
                writeln!(self.output)?;
                writeln!(self.output, "--- Results ---")?;
                commands::write_hash_report(&mut self.output, &digest, checksum)?;
                writeln!(self.output)?;
            }
            Err(err) => self.report(&err)?,
        }

        Ok(())
    }

    fn compare_two(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "Enter the first string: ")?;
        self.output.flush()?;
        let first = self.read_line()?;

        write!(self.output, "Enter the second string: ")?;
        self.output.flush()?;
        let second = self.read_line()?;

        match compare_checksums(first.as_deref(), second.as_deref()) {
            Ok(comparison) => {
                // Both present, otherwise compare_checksums would have failed
                let first = first.unwrap_or_default();
                let second = second.unwrap_or_default();

                writeln!(self.output)?;
                writeln!(self.output, "--- Comparison ---")?;
                commands::write_comparison(&mut self.output, &first, &second, &comparison)?;
                writeln!(self.output)?;
            }
            Err(err) => self.report(&err)?,
        }

        Ok(())
    }

    fn report(&mut self, err: &dyn std::error::Error) -> Result<()> {
        tracing::warn!(%err, "menu action failed");
        writeln!(self.output)?;
        writeln!(self.output, "Error: {err}")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Next line without its line terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
