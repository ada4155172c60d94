// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use chrono::NaiveDate;
use clap::Args;

use nf_core::ExpenseCategory;

/// Parse an expense category name, case-insensitively.
fn parse_category(s: &str) -> Result<ExpenseCategory, String> {
    s.parse::<ExpenseCategory>().map_err(|e| e.to_string())
}

/// Parse a finite amount.
fn parse_amount(s: &str) -> Result<f64, String> {
    nf_core::parse_amount(s).map_err(|e| e.to_string())
}

/// Parse a `yyyy-mm-dd` date.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    nf_core::parse_date(s).map_err(|e| e.to_string())
}

/// Fields of the expense being recorded.
#[derive(Args, Clone, Debug, PartialEq)]
pub struct RecordArgs {
    /// Amount to record (may be negative)
    #[arg(long, short, default_value_t = 0.0, allow_negative_numbers = true, value_parser = parse_amount)]
    pub amount: f64,

    /// Category: income, food, entertainment, other, school, gifts, home
    #[arg(long, short, value_parser = parse_category)]
    pub category: Option<ExpenseCategory>,

    /// Which search result to use (1-based)
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pick: u32,

    /// Date of the expense as yyyy-mm-dd (default: today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}
