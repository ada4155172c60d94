// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notion rich-text segments.
//!
//! A title or description in Notion is an ordered list of [`TextRun`]s, each
//! carrying its own styling. Only the fields needed to show a title are
//! required; everything else falls back to defaults so abbreviated payloads
//! still decode.

use serde::{Deserialize, Serialize};

/// One styled segment of rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(rename = "type", default = "default_run_type")]
    pub kind: String,
    /// Absent on `mention` and `equation` runs.
    #[serde(default)]
    pub text: TextContent,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

fn default_run_type() -> String {
    "text".to_string()
}

impl TextRun {
    /// Creates an unstyled text run.
    pub fn plain(content: impl Into<String>) -> Self {
        let content = content.into();
        TextRun {
            kind: default_run_type(),
            plain_text: content.clone(),
            text: TextContent {
                content,
                link: None,
            },
            annotations: Annotations::default(),
            href: None,
        }
    }

    /// Text to show for this run: its literal content, or `plain_text` for
    /// runs that carry no `text` object.
    pub fn content(&self) -> &str {
        if self.text.content.is_empty() {
            &self.plain_text
        } else {
            &self.text.content
        }
    }
}

/// The literal content of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Styling flags for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "default".to_string()
}

impl Default for Annotations {
    fn default() -> Self {
        Annotations {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: default_color(),
        }
    }
}

#[cfg(test)]
#[path = "rich_text_tests.rs"]
mod tests;
