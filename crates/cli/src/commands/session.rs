// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive line-based session: find a database, then record an expense.
//!
//! The session walks two screens in order. The locator screen prompts for a
//! database name, searches, and lets the user pick a result by number. The
//! recorder screen edits a draft with short commands until it is submitted.
//! End of input quits from any prompt.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use nf_core::{
    DatabaseLocator, ExpenseCategory, ExpenseDraft, ExpenseRecorder, LocatorState, RecorderState,
    SearchResultItem, StepDirection,
};

use super::{open_client, run_search, run_submit};
use crate::client::{NotionClient, Transport};
use crate::colors::Painter;
use crate::config::Config;
use crate::display::{
    failure_banner, format_amount, format_draft, format_result_line, success_banner,
};
use crate::error::{Error, Result};

const RECORDER_HELP: &str = "\
Commands:
  +             Add 0.50 to the amount
  -             Subtract 0.50 from the amount
  a <amount>    Set the amount
  c <category>  Set the category
  e <text>      Set the expense description
  s             Submit the expense
  q             Quit";

/// How a session ended without error.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The expense was created; holds the page returned by Notion.
    Recorded { page: Value },
    Quit,
}

/// One line typed on the recorder screen.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecorderCommand {
    Step(StepDirection),
    Amount(f64),
    Category(ExpenseCategory),
    Expense(String),
    Submit,
    Help,
    Quit,
}

/// Parse a recorder screen command, or describe why it is invalid.
pub(crate) fn parse_recorder_command(line: &str) -> std::result::Result<RecorderCommand, String> {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };
    match cmd {
        "+" => Ok(RecorderCommand::Step(StepDirection::Increment)),
        "-" => Ok(RecorderCommand::Step(StepDirection::Decrement)),
        "a" if arg.is_empty() => Err("usage: a <amount>".to_string()),
        "a" => nf_core::parse_amount(arg.trim_start_matches('$'))
            .map(RecorderCommand::Amount)
            .map_err(|e| e.to_string()),
        "c" if arg.is_empty() => Err(format!(
            "usage: c <category> (one of: {})",
            category_list()
        )),
        "c" => arg
            .parse()
            .map(RecorderCommand::Category)
            .map_err(|e: nf_core::Error| e.to_string()),
        "e" => Ok(RecorderCommand::Expense(arg.to_string())),
        "s" => Ok(RecorderCommand::Submit),
        "h" | "?" | "help" => Ok(RecorderCommand::Help),
        "q" => Ok(RecorderCommand::Quit),
        "" => Err("type h for help".to_string()),
        other => Err(format!("unknown command '{other}', type h for help")),
    }
}

fn category_list() -> String {
    ExpenseCategory::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run(config: &Config) -> Result<()> {
    let client = open_client(config)?;
    let mut session = Session {
        client: &client,
        input: io::stdin().lock(),
        out: io::stdout().lock(),
        p: Painter::detect(),
        today: chrono::Local::now().date_naive(),
        default_category: config.default_category,
    };
    match session.run()? {
        SessionOutcome::Recorded { page } => {
            let page_id = page.get("id").and_then(Value::as_str).unwrap_or("");
            debug!(page_id, "session recorded expense");
        }
        SessionOutcome::Quit => debug!("session quit"),
    }
    Ok(())
}

/// Both screens, reading commands from `input` and drawing to `out`.
pub(crate) struct Session<'a, T: Transport, R: BufRead, W: Write> {
    pub client: &'a NotionClient<T>,
    pub input: R,
    pub out: W,
    pub p: Painter,
    /// Date stamped on the recorded expense.
    pub today: NaiveDate,
    pub default_category: ExpenseCategory,
}

impl<T: Transport, R: BufRead, W: Write> Session<'_, T, R, W> {
    pub fn run(&mut self) -> Result<SessionOutcome> {
        writeln!(self.out, "{}", self.p.header("Welcome!"))?;
        writeln!(self.out, "Find your expenses database to get started.")?;
        let Some(database) = self.locate()? else {
            return Ok(SessionOutcome::Quit);
        };
        self.record(database)
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// The locator screen. Returns the picked database, or `None` on quit.
    fn locate(&mut self) -> Result<Option<SearchResultItem>> {
        let mut locator = DatabaseLocator::new();
        loop {
            match locator.state() {
                LocatorState::Idle { input } => {
                    let prompt = if input.is_empty() {
                        "Database name: ".to_string()
                    } else {
                        format!("Database name [{input}]: ")
                    };
                    let Some(line) = self.ask(&prompt)? else {
                        return Ok(None);
                    };
                    if !line.is_empty() {
                        locator.set_input(line)?;
                    }
                    writeln!(self.out, "{}", self.p.context("Searching..."))?;
                    run_search(self.client, &mut locator)?;
                }
                LocatorState::Succeeded { results } => {
                    if results.is_empty() {
                        writeln!(self.out, "No databases found. Try another name.")?;
                        locator.reset()?;
                        continue;
                    }
                    for (i, item) in results.iter().enumerate() {
                        writeln!(self.out, "{}", format_result_line(&self.p, i + 1, item))?;
                    }
                    let count = results.len();
                    let prompt = format!("Pick a database [1-{count}], n for a new search, q to quit: ");
                    let Some(line) = self.ask(&prompt)? else {
                        return Ok(None);
                    };
                    match line.as_str() {
                        "q" => return Ok(None),
                        "n" => locator.reset()?,
                        _ => match line.parse::<usize>() {
                            Ok(n) if n >= 1 => match locator.select(n - 1) {
                                Ok(database) => return Ok(Some(database)),
                                Err(e) => writeln!(self.out, "{e}")?,
                            },
                            _ => writeln!(self.out, "enter a number between 1 and {count}")?,
                        },
                    }
                }
                LocatorState::Failed { error, .. } => {
                    writeln!(self.out, "{}", failure_banner(&self.p, error))?;
                    let error = error.clone();
                    match self.ask("r to retry, q to quit: ")?.as_deref() {
                        Some("r") => locator.retry()?,
                        None | Some("q") => return Err(Error::SearchFailed(error)),
                        Some(_) => {}
                    }
                }
                LocatorState::Searching { .. } => {
                    return Err(Error::Core(nf_core::Error::RequestInFlight));
                }
            }
        }
    }

    /// The recorder screen for the picked database.
    fn record(&mut self, database: SearchResultItem) -> Result<SessionOutcome> {
        let draft = ExpenseDraft {
            category: self.default_category,
            ..ExpenseDraft::default()
        };
        let mut recorder = ExpenseRecorder::with_draft(database, draft);
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.p.header(recorder.database_title()))?;
        writeln!(self.out, "{}", self.p.context("Type h for help."))?;
        self.show_draft(recorder.draft())?;

        loop {
            match recorder.state() {
                RecorderState::Editing => {
                    let Some(line) = self.ask("> ")? else {
                        return Ok(SessionOutcome::Quit);
                    };
                    let command = match parse_recorder_command(&line) {
                        Ok(command) => command,
                        Err(msg) => {
                            writeln!(self.out, "{msg}")?;
                            continue;
                        }
                    };
                    match command {
                        RecorderCommand::Step(direction) => {
                            recorder.adjust_amount(direction)?;
                        }
                        RecorderCommand::Amount(amount) => recorder.set_amount(amount)?,
                        RecorderCommand::Category(category) => recorder.set_category(category)?,
                        RecorderCommand::Expense(text) => recorder.set_expense(text)?,
                        RecorderCommand::Submit => {
                            writeln!(self.out, "{}", self.p.context("Submitting..."))?;
                            run_submit(self.client, &mut recorder, self.today)?;
                            continue;
                        }
                        RecorderCommand::Help => {
                            writeln!(self.out, "{}", self.p.examples(RECORDER_HELP))?;
                            continue;
                        }
                        RecorderCommand::Quit => return Ok(SessionOutcome::Quit),
                    }
                    self.show_draft(recorder.draft())?;
                }
                RecorderState::Succeeded { page } => {
                    let draft = recorder.draft();
                    writeln!(
                        self.out,
                        "{} Added '{}' {} to {}",
                        success_banner(&self.p),
                        draft.expense,
                        format_amount(draft.amount),
                        recorder.database_title()
                    )?;
                    return Ok(SessionOutcome::Recorded { page: page.clone() });
                }
                RecorderState::Failed { error } => {
                    writeln!(self.out, "{}", failure_banner(&self.p, error))?;
                    let error = error.clone();
                    match self.ask("r to retry, q to quit: ")?.as_deref() {
                        Some("r") => {
                            recorder.retry()?;
                            self.show_draft(recorder.draft())?;
                        }
                        None | Some("q") => return Err(Error::SubmitFailed(error)),
                        Some(_) => {}
                    }
                }
                RecorderState::Submitting { .. } => {
                    return Err(Error::Core(nf_core::Error::RequestInFlight));
                }
            }
        }
    }

    fn show_draft(&mut self, draft: &ExpenseDraft) -> Result<()> {
        let expense = if draft.expense.is_empty() {
            self.p.context("(no description)")
        } else {
            draft.expense.clone()
        };
        writeln!(self.out, "{}  {}", expense, format_draft(&self.p, draft))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
