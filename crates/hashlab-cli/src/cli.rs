// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "hashlab",
    about = "SHA-256 from scratch, plus a weak checksum that collides on purpose",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct HashlabCli {
    /// Global: path to config (TOML); default: ~/.hashlab/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: tracing filter, e.g. "info" or "hashlab_sha256=trace"
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,

    /// Global: skip the startup known-answer check
    #[arg(long = "no-self-test", action = ArgAction::SetTrue, global = true)]
    pub no_self_test: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu (default when no subcommand is given)
    Menu,

    /// Print the SHA-256 digest and weak checksum of TEXT
    Hash {
        /// Text to hash (hashed as UTF-8)
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Compare the weak checksums of two strings
    Compare {
        #[arg(value_name = "FIRST")]
        first: String,
        #[arg(value_name = "SECOND")]
        second: String,
    },

    /// Run the "abc" known-answer check; non-zero exit on mismatch
    SelfTest,
}
