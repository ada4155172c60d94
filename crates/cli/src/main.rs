// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use nfrs::Cli;

fn main() {
    let cli = Cli::parse();
    nfrs::logging::init(cli.verbose);
    if let Err(e) = nfrs::run(cli.command) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
