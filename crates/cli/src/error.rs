// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use nf_core::RequestError;
use thiserror::Error;

/// All possible errors that can occur in the nfrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] nf_core::Error),

    #[error("search failed: {}{}", .0, auth_hint(.0))]
    SearchFailed(RequestError),

    #[error("could not add expense: {}{}", .0, auth_hint(.0))]
    SubmitFailed(RequestError),

    #[error("no databases match '{query}'\n  hint: share the database with your Notion integration")]
    NoResults { query: String },

    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("http client error: {0}")]
    HttpClient(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for nfrs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Suggest setting the secret when Notion rejects the credentials.
fn auth_hint(e: &RequestError) -> &'static str {
    match e {
        RequestError::HttpStatus { status: 401, .. } => {
            "\n  hint: set NOTION_API_SECRET to your integration's secret"
        }
        _ => "",
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
