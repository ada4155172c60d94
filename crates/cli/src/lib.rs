// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nfrs - Record expenses in a Notion database from the terminal.
//!
//! This crate provides the `nf` CLI: it finds a database shared with a Notion
//! integration and appends expense rows to it. The screen workflows and wire
//! formats live in `nf-core`; this crate adds the HTTP client, configuration,
//! and the terminal front end.
//!
//! # Main Components
//!
//! - [`client`] - [`NotionClient`] over a pluggable [`Transport`](client::Transport)
//! - [`Config`] - Settings from the config file and environment
//! - [`Error`] - Error types for all operations
//!
//! # Recording an expense
//!
//! ```rust,ignore
//! use nfrs::{Config, NotionClient};
//! use nf_core::{DatabaseLocator, ExpenseRecorder};
//!
//! let config = Config::load()?;
//! let client = NotionClient::new(config.client_config())?;
//!
//! let mut locator = DatabaseLocator::new();
//! locator.set_input("Expenses")?;
//! let query = locator.submit()?;
//! locator.complete(client.search(&query).await)?;
//!
//! let mut recorder = ExpenseRecorder::new(locator.select(0)?);
//! recorder.set_expense("Coffee")?;
//! let record = recorder.submit(today)?;
//! recorder.complete(client.create_page(&record).await)?;
//! ```

mod cli;
pub mod client;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, RecordArgs};
pub use client::{ClientConfig, NotionClient};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::add::AddOptions;

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "nf", &mut std::io::stdout());
            Ok(())
        }
        command => {
            let config = Config::load()?;
            tracing::debug!(?config, "loaded config");
            dispatch(command, &config)
        }
    }
}

fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Session => commands::session::run(config),
        Command::Search { name, output } => commands::search::run(&name, output, config),
        Command::Add {
            database,
            expense,
            record,
            output,
        } => commands::add::run(add_options(database, expense, record), output, config),
        Command::Categories { output } => commands::categories::run(output, config.default_category),
        Command::Completion { .. } => Ok(()),
    }
}

fn add_options(database: String, expense: String, record: RecordArgs) -> AddOptions {
    AddOptions {
        database,
        expense,
        pick: record.pick as usize,
        amount: record.amount,
        category: record.category,
        date: record.date,
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
