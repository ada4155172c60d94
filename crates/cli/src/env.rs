// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the Notion integration secret if `NOTION_API_SECRET` is set and non-empty.
pub fn notion_api_secret() -> Option<String> {
    non_empty(vars::NOTION_API_SECRET)
}

/// Returns the API base URL override from `NF_API_URL`.
pub fn api_url() -> Option<String> {
    non_empty(vars::NF_API_URL)
}

/// Returns the config file path from `NF_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::NF_CONFIG).map(PathBuf::from)
}

/// Returns the log filter directives from `NF_LOG`.
pub fn log_filter() -> Option<String> {
    non_empty(vars::NF_LOG)
}

/// Returns the standard `RUST_LOG` filter, consulted after `NF_LOG`.
pub fn rust_log() -> Option<String> {
    non_empty(vars::RUST_LOG)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
