// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tracing_subscriber::EnvFilter;

/// Filter used when nothing else is configured
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// An unparsable filter falls back to `DEFAULT_FILTER`. Calling this twice is
/// harmless; the second subscriber is simply not installed.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter, "logging initialized");
    }
}
