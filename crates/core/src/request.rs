// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure outcomes of a single outbound request.
//!
//! Both workflows receive one of these as the completion of a failed
//! request. The variants mirror the three ways a call to the Notion API can
//! go wrong, independent of the HTTP client that produced them.

use thiserror::Error;

/// Why an outbound request did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never got a response (DNS, connect, TLS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a status outside 200-299.
    #[error("server returned HTTP {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    HttpStatus {
        status: u16,
        /// Human-readable message from the service's error body, if any.
        message: Option<String>,
    },

    /// The response body did not match the expected JSON shape.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Short lowercase name of the failure kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::Transport(_) => "transport",
            RequestError::HttpStatus { .. } => "http_status",
            RequestError::Decode(_) => "decode",
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Decode(e.to_string())
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
