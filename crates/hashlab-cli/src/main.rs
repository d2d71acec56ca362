// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use clap::Parser;

use hashlab_cli::cli::{Command, HashlabCli};
use hashlab_cli::config::{self, LOG_ENV};
use hashlab_cli::menu::Menu;
use hashlab_cli::{commands, logging};

fn main() -> anyhow::Result<()> {
    let args = HashlabCli::parse();

    let settings = config::load(args.config.as_deref())?;
    let env_filter = std::env::var(LOG_ENV).ok();
    logging::init(&settings.log_filter(args.log_level.as_deref(), env_filter.as_deref()));

    let run_self_test = settings.self_test && !args.no_self_test;
    tracing::info!(run_self_test, "hashlab starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.cmd.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            Menu::new(stdin.lock(), out)
                .with_self_test(run_self_test)
                .run()
        }
        Command::Hash { text } => commands::hash(&mut out, &text),
        Command::Compare { first, second } => commands::compare(&mut out, &first, &second),
        Command::SelfTest => commands::run_self_test(&mut out),
    }
}
