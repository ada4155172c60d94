// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors::{self, Painter};
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));
    let error = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::FAILURE))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
        .error(error)
}

/// Main help template with a colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        Painter::detect().header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let p = Painter::detect();
    format!(
        "\
{header_expenses}
  {session}     Find a database and record an expense interactively
  {search}      Search databases by name
  {add}         Record an expense in a database
  {categories}  List expense categories

{header_setup}
  {completion}  Generate shell completions
",
        header_expenses = p.header("Expenses:"),
        header_setup = p.header("Setup:"),
        session = p.literal("session"),
        search = p.literal("search"),
        add = p.literal("add"),
        categories = p.literal("categories"),
        completion = p.literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    Painter::detect().examples(
        "\
Get started:
  export NOTION_API_SECRET=secret_...    Authenticate with your integration
  nf search Expenses                     Find your expenses database
  nf add Expenses \"Coffee\" -a 4.5        Record an expense
  nf session                             Step through it interactively",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
