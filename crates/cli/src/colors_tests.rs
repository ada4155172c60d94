// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn colored() -> Painter {
    Painter { enabled: true }
}

#[test]
fn color_codes() {
    assert_eq!(codes::HEADER, 74);
    assert_eq!(codes::LITERAL, 250);
    assert_eq!(codes::CONTEXT, 245);
    assert_eq!(codes::SUCCESS, 114);
    assert_eq!(codes::FAILURE, 203);
}

#[test]
fn fg256_produces_correct_escape_sequence() {
    assert_eq!(fg256(0), "\x1b[38;5;0m");
    assert_eq!(fg256(203), "\x1b[38;5;203m");
}

#[test]
fn plain_painter_passes_text_through() {
    let p = Painter::plain();
    assert!(!p.enabled());
    assert_eq!(p.header("Results:"), "Results:");
    assert_eq!(p.success("✓"), "✓");
    assert_eq!(p.failure("✗"), "✗");
}

#[test]
fn enabled_painter_wraps_with_code_and_reset() {
    let p = colored();
    assert_eq!(p.success("ok"), "\x1b[38;5;114mok\x1b[0m");
    assert_eq!(p.failure("no"), "\x1b[38;5;203mno\x1b[0m");
    assert_eq!(p.context("x"), "\x1b[38;5;245mx\x1b[0m");
}

#[parameterized(
    command_and_description = { "nf search Expenses    List databases", Some(18) },
    no_description = { "nf categories", None },
    trailing_spaces_only = { "nf search   ", None },
)]
fn description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

#[test]
fn examples_colors_headers_and_commands() {
    let text = "Examples:\n  nf categories    List categories";
    let out = colored().examples(text);
    assert!(out.contains("\x1b[38;5;74mExamples:\x1b[0m"));
    assert!(out.contains("\x1b[38;5;250mnf categories\x1b[0m    List categories"));
}

#[test]
fn examples_plain_is_unchanged() {
    let text = "Examples:\n  nf categories    List categories";
    assert_eq!(Painter::plain().examples(text), text);
}
