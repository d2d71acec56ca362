// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::logging::DEFAULT_FILTER;

/// Environment variable consulted for the log filter
pub const LOG_ENV: &str = "HASHLAB_LOG";

/// Settings read from the optional TOML config file.
///
/// ```toml
/// self_test = true
/// log_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Run the "abc" known-answer check before the menu starts
    pub self_test: bool,
    /// `tracing` filter directive
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            self_test: true,
            log_level: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Picks the log filter: command line, then environment, then this file.
    ///
    /// Blank values are skipped, so an empty `--log-level` does not hide
    /// the environment.
    pub fn log_filter(&self, cli: Option<&str>, env: Option<&str>) -> String {
        let non_blank = |f: &&str| !f.trim().is_empty();

        cli.filter(non_blank)
            .or(env.filter(non_blank))
            .unwrap_or(self.log_level.as_str())
            .to_string()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.hashlab/config.toml
    dirs_next::home_dir().map(|h| h.join(".hashlab").join("config.toml"))
}

/// Loads settings from `explicit`, or from the default path when it exists.
///
/// A missing default file yields `Settings::default()`; an explicit path
/// that cannot be read or parsed is an error.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => read_settings(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => read_settings(&path),
            _ => Ok(Settings::default()),
        },
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Parse config {}", path.display()))
}
