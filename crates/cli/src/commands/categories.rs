// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use serde::Serialize;

use nf_core::ExpenseCategory;

use crate::cli::OutputFormat;
use crate::colors::Painter;
use crate::error::Result;

#[derive(Serialize)]
struct CategoryJson {
    name: &'static str,
    default: bool,
}

pub fn run(format: OutputFormat, default: ExpenseCategory) -> Result<()> {
    let mut out = io::stdout().lock();
    run_impl(format, default, &mut out, &Painter::detect())
}

pub(crate) fn run_impl(
    format: OutputFormat,
    default: ExpenseCategory,
    out: &mut impl Write,
    p: &Painter,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for category in ExpenseCategory::ALL {
                if category == default {
                    writeln!(out, "{} {}", category, p.context("(default)"))?;
                } else {
                    writeln!(out, "{}", category)?;
                }
            }
        }
        OutputFormat::Json => {
            let rows: Vec<CategoryJson> = ExpenseCategory::ALL
                .into_iter()
                .map(|c| CategoryJson {
                    name: c.as_str(),
                    default: c == default,
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "categories_tests.rs"]
mod tests;
