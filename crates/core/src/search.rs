// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request and response bodies for Notion's `POST /v1/search`.
//!
//! The request is always narrowed to database objects sorted by last edit;
//! only the free-text `query` varies. Responses are decoded leniently: fields
//! this client never reads fall back to defaults when Notion omits them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::property::PropertyDescriptor;
use crate::rich_text::TextRun;

/// Title shown for a database whose title is empty.
pub const UNTITLED: &str = "Untitled";

/// Restricts search results to one object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub value: String,
    pub property: String,
}

impl SearchFilter {
    /// Only return databases, never pages.
    pub fn databases() -> Self {
        SearchFilter {
            value: "database".to_string(),
            property: "object".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSort {
    pub direction: SortDirection,
    pub timestamp: String,
}

impl SearchSort {
    /// Oldest edits first.
    pub fn last_edited_ascending() -> Self {
        SearchSort {
            direction: SortDirection::Ascending,
            timestamp: "last_edited_time".to_string(),
        }
    }
}

/// Body of a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub filter: SearchFilter,
    pub sort: SearchSort,
}

impl SearchQuery {
    /// Builds the database search for a user-typed name.
    ///
    /// The name is sent as-is; an empty name lists every shared database.
    pub fn for_databases(name: impl Into<String>) -> Self {
        SearchQuery {
            query: name.into(),
            filter: SearchFilter::databases(),
            sort: SearchSort::last_edited_ascending(),
        }
    }
}

/// Reference to a Notion user or bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub id: String,
}

/// Where a database lives in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<bool>,
}

/// A database returned by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(default = "default_object")]
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub cover: Option<Value>,
    #[serde(default)]
    pub icon: Option<Value>,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub last_edited_time: String,
    #[serde(default)]
    pub created_by: Actor,
    #[serde(default)]
    pub last_edited_by: Actor,
    #[serde(default)]
    pub title: Vec<TextRun>,
    #[serde(default)]
    pub description: Vec<TextRun>,
    #[serde(default)]
    pub is_inline: bool,
    /// Column schema keyed by column name.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyDescriptor>,
    #[serde(default)]
    pub parent: Parent,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

fn default_object() -> String {
    "database".to_string()
}

impl SearchResultItem {
    /// Content of the first title run, or [`UNTITLED`].
    pub fn display_title(&self) -> &str {
        self.title
            .first()
            .map(TextRun::content)
            .unwrap_or(UNTITLED)
    }
}

/// Body of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub object: String,
    pub results: Vec<SearchResultItem>,
    /// Never followed; only the first page is used.
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub request_id: String,
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
