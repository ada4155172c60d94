// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for nf-core unit tests.

#![allow(clippy::unwrap_used)]

use serde_json::json;

use crate::search::{SearchResponse, SearchResultItem};

/// A database result with the given id and single-run title.
pub fn database(id: &str, title: &str) -> SearchResultItem {
    serde_json::from_value(json!({
        "id": id,
        "title": [{ "text": { "content": title } }]
    }))
    .unwrap()
}

/// A first-page search response holding `items`.
pub fn response(items: Vec<SearchResultItem>) -> SearchResponse {
    SearchResponse {
        object: "list".to_string(),
        results: items,
        next_cursor: None,
        has_more: false,
        kind: "page_or_database".to_string(),
        request_id: "req-1".to_string(),
    }
}
