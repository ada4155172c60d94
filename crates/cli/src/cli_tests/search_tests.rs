// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_search_with_name() {
    let cli = parse(&["nf", "search", "Expenses"]).unwrap();
    let Command::Search { name, output } = cli.command else {
        unreachable!("expected search command");
    };
    assert_eq!(name, "Expenses");
    assert_eq!(output, OutputFormat::Text);
}

#[test]
fn test_search_accepts_empty_name() {
    let cli = parse(&["nf", "search", ""]).unwrap();
    assert!(matches!(cli.command, Command::Search { name, .. } if name.is_empty()));
}

#[test]
fn test_search_requires_name() {
    assert!(parse(&["nf", "search"]).is_err());
}

#[test]
fn test_session_takes_no_arguments() {
    assert!(matches!(parse(&["nf", "session"]).unwrap().command, Command::Session));
    assert!(parse(&["nf", "session", "extra"]).is_err());
}

#[test]
fn test_completion_shell() {
    let cli = parse(&["nf", "completion", "zsh"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Completion {
            shell: clap_complete::Shell::Zsh
        }
    ));
}
