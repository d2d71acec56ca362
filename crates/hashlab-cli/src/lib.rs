// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Console front end for the hashlab SHA-256 core.
//!
//! Offers the interactive menu (hash one string, check two strings for a
//! weak-checksum collision, exit) and one-shot subcommands for scripting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod menu;

#[cfg(test)]
mod tests;
