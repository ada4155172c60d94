// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and screen output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Success marks: soft green
    pub const SUCCESS: u8 = 114;
    /// Failure marks: soft red
    pub const FAILURE: u8 = 203;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Applies colors when enabled and passes text through otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Colors decided by [`should_colorize`].
    pub fn detect() -> Self {
        Painter {
            enabled: should_colorize(),
        }
    }

    /// Never colors.
    pub fn plain() -> Self {
        Painter { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, code: u8, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", fg256(code), text, codes::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(codes::HEADER, text)
    }

    pub fn literal(&self, text: &str) -> String {
        self.paint(codes::LITERAL, text)
    }

    pub fn context(&self, text: &str) -> String {
        self.paint(codes::CONTEXT, text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(codes::SUCCESS, text)
    }

    pub fn failure(&self, text: &str) -> String {
        self.paint(codes::FAILURE, text)
    }

    /// Colorize an examples help block.
    ///
    /// Lines ending with `:` become headers; in `  command    description`
    /// lines the command part is shown as a literal.
    pub fn examples(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len() + 128);
        for line in text.lines() {
            if !result.is_empty() {
                result.push('\n');
            }

            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];

            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                result.push_str(indent);
                result.push_str(&self.header(trimmed));
            } else if let Some(cmd_end) = find_description_start(trimmed) {
                result.push_str(indent);
                result.push_str(&self.literal(&trimmed[..cmd_end]));
                result.push_str(&trimmed[cmd_end..]);
            } else {
                result.push_str(line);
            }
        }
        result
    }
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    line[start..]
        .find(|c: char| c != ' ')
        .map(|_| start)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
