// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use nf_core::DatabaseLocator;

use super::{open_client, results_or_error, run_search};
use crate::cli::OutputFormat;
use crate::client::{NotionClient, Transport};
use crate::colors::Painter;
use crate::config::Config;
use crate::display::{format_result_line, DatabaseJson};
use crate::error::Result;

pub fn run(name: &str, format: OutputFormat, config: &Config) -> Result<()> {
    let client = open_client(config)?;
    let mut out = io::stdout().lock();
    run_impl(&client, name, format, &mut out, &Painter::detect())
}

/// Search for databases matching `name` and print them.
///
/// An empty result list is not an error.
pub(crate) fn run_impl<T: Transport>(
    client: &NotionClient<T>,
    name: &str,
    format: OutputFormat,
    out: &mut impl Write,
    p: &Painter,
) -> Result<()> {
    let mut locator = DatabaseLocator::new();
    locator.set_input(name)?;
    run_search(client, &mut locator)?;
    let results = results_or_error(&locator)?;

    match format {
        OutputFormat::Text => {
            if results.is_empty() {
                writeln!(out, "No databases match '{}'.", name)?;
                return Ok(());
            }
            for (i, item) in results.iter().enumerate() {
                writeln!(out, "{}", format_result_line(p, i + 1, item))?;
            }
        }
        OutputFormat::Json => {
            let rows: Vec<DatabaseJson> = results
                .iter()
                .enumerate()
                .map(|(i, item)| DatabaseJson::new(i + 1, item))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
