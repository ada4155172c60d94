// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Filter directives come from `NF_LOG`, then `RUST_LOG`. Without either the
//! CLI logs warnings only, or debug output with `--verbose`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::env;

pub const DEFAULT_FILTER: &str = "warn";
pub const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directives to use.
pub fn directives(verbose: bool, nf_log: Option<String>, rust_log: Option<String>) -> String {
    nf_log.or(rust_log).unwrap_or_else(|| {
        if verbose {
            VERBOSE_FILTER.to_string()
        } else {
            DEFAULT_FILTER.to_string()
        }
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let directives = directives(verbose, env::log_filter(), env::rust_log());
    let (filter, invalid) = match EnvFilter::try_new(&directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
    };
    let ansi = !env::no_color() && (env::force_color() || std::io::stderr().is_terminal());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .is_ok();

    if let (true, Some(e)) = (installed, invalid) {
        tracing::warn!(directives = %directives, error = %e, "ignoring invalid log filter");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
