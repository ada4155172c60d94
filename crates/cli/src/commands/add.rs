// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use chrono::NaiveDate;
use tracing::warn;

use nf_core::{DatabaseLocator, ExpenseCategory, ExpenseDraft, ExpenseRecorder, RecorderState};

use super::{open_client, results_or_error, run_search, run_submit};
use crate::cli::OutputFormat;
use crate::client::{NotionClient, Transport};
use crate::colors::Painter;
use crate::config::Config;
use crate::display::{format_amount, success_banner, ExpenseJson};
use crate::error::{Error, Result};

/// Everything needed to record one expense without prompting.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOptions {
    /// Name searched for; the picked result becomes the target database.
    pub database: String,
    pub expense: String,
    /// 1-based position in the search results.
    pub pick: usize,
    pub amount: f64,
    /// Falls back to the configured default category.
    pub category: Option<ExpenseCategory>,
    /// Falls back to today's local date.
    pub date: Option<NaiveDate>,
}

pub fn run(opts: AddOptions, format: OutputFormat, config: &Config) -> Result<()> {
    let client = open_client(config)?;
    let today = chrono::Local::now().date_naive();
    let mut out = io::stdout().lock();
    run_impl(
        &client,
        opts,
        config.default_category,
        today,
        format,
        &mut out,
        &Painter::detect(),
    )
}

pub(crate) fn run_impl<T: Transport>(
    client: &NotionClient<T>,
    opts: AddOptions,
    default_category: ExpenseCategory,
    today: NaiveDate,
    format: OutputFormat,
    out: &mut impl Write,
    p: &Painter,
) -> Result<()> {
    let mut locator = DatabaseLocator::new();
    locator.set_input(opts.database.as_str())?;
    run_search(client, &mut locator)?;
    let results = results_or_error(&locator)?;
    if results.is_empty() {
        return Err(Error::NoResults {
            query: opts.database,
        });
    }
    if results.len() > 1 && opts.pick == 1 {
        warn!(
            matches = results.len(),
            "several databases match, using the first; pass --pick to choose"
        );
    }
    let database = locator.select(opts.pick.saturating_sub(1))?;

    let draft = ExpenseDraft {
        expense: opts.expense,
        amount: opts.amount,
        category: opts.category.unwrap_or(default_category),
    };
    let date = opts.date.unwrap_or(today);
    let mut recorder = ExpenseRecorder::with_draft(database, draft);
    run_submit(client, &mut recorder, date)?;

    match recorder.state() {
        RecorderState::Succeeded { page } => {
            let draft = recorder.draft();
            match format {
                OutputFormat::Text => writeln!(
                    out,
                    "{} Added {} {} [{}] to {}",
                    success_banner(p),
                    p.literal(&format!("'{}'", draft.expense)),
                    format_amount(draft.amount),
                    draft.category,
                    recorder.database_title()
                )?,
                OutputFormat::Json => {
                    let json = ExpenseJson::new(recorder.database(), draft, date, page);
                    writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
                }
            }
            Ok(())
        }
        RecorderState::Failed { error } => Err(Error::SubmitFailed(error.clone())),
        other => Err(Error::Core(nf_core::Error::InvalidTransition {
            action: "finish adding",
            state: other.name(),
        })),
    }
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
