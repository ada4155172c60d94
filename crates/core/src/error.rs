// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for nf-core operations.

use thiserror::Error;

/// All possible errors that can occur in nf-core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid transition: cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("a request is already in flight\n  hint: wait for it to complete before submitting again")]
    RequestInFlight,

    #[error("no request is in flight to complete")]
    NoRequestInFlight,

    #[error("no search result #{} ({available} available)", .index + 1)]
    NoSuchResult { index: usize, available: usize },

    #[error("invalid category: '{0}'\n  hint: valid categories are: income, food, entertainment, other, school, gifts, home")]
    InvalidCategory(String),

    #[error("invalid date: '{0}'\n  hint: dates use the yyyy-mm-dd format")]
    InvalidDate(String),

    #[error("invalid amount: '{0}'\n  hint: amounts are finite numbers such as 4.5 or -12")]
    InvalidAmount(String),
}

/// A specialized Result type for nf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
