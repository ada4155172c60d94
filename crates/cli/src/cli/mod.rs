// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors::Painter;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::RecordArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "nf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Record expenses in a Notion database from the terminal")]
#[command(
    long_about = "Record expenses in a Notion database from the terminal.\n\n\
    Find a database shared with your integration, then append a row with an\n\
    expense description, today's date, a category and an amount."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find a database and record an expense interactively
    #[command(after_help = Painter::detect().examples("\
Examples:
  nf session                      Start the interactive session
  nf session -v                   Same, logging requests to stderr"))]
    Session,

    /// Search databases by name
    #[command(after_help = Painter::detect().examples("\
Examples:
  nf search Expenses              List databases matching 'Expenses'
  nf search \"\"                    List every shared database
  nf search Expenses -o json      Output results as JSON"))]
    Search {
        /// Name to search for (may be empty)
        name: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Record an expense in a database
    #[command(
        arg_required_else_help = true,
        after_help = Painter::detect().examples("\
Examples:
  nf add Expenses \"Coffee\" -a 4.5              Record a coffee in the first match
  nf add Expenses \"Rent\" -a 900 -c home        Record with a category
  nf add Expenses \"Refund\" -a -12 -c income    Record a negative amount
  nf add Budget \"Books\" -a 30 -p 2             Use the second search result
  nf add Expenses \"Lunch\" --date 2024-03-01    Record for another day")
    )]
    Add {
        /// Name of the database to search for
        database: String,

        /// Expense description
        expense: String,

        #[command(flatten)]
        record: RecordArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List expense categories
    Categories {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = Painter::detect().examples("\
Examples:
  nf completion bash > ~/.local/share/bash-completion/completions/nf
  nf completion zsh > ~/.zfunc/_nf
  nf completion fish > ~/.config/fish/completions/nf.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
