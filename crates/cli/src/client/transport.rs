// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for HTTP communication.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTPS requests through `reqwest` for production
//! - Mock transports for unit testing

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Error type for transport operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Could not establish a connection.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// No response within the client timeout.
    #[error("request timed out: {0}")]
    TimedOut(String),

    /// Any other failure while sending or reading.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The HTTP client could not be built.
    #[error("http client setup failed: {0}")]
    Setup(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// An outbound POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// First header with `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response with its body fully read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// True when the media type is `application/json`, ignoring parameters.
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| {
            ct.split(';')
                .next()
                .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        })
    }
}

/// Transport trait for request/response communication.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations.
pub trait Transport: Send + Sync {
    /// Send a POST and read the whole response.
    fn post(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<HttpReply>> + Send + '_>>;
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("nf/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn post(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<HttpReply>> + Send + '_>> {
        Box::pin(async move {
            let mut builder = self.client.post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.body(request.body).send().await.map_err(classify)?;

            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.bytes().await.map_err(classify)?.to_vec();

            Ok(HttpReply {
                status,
                content_type,
                body,
            })
        })
    }
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::TimedOut(e.to_string())
    } else if e.is_connect() {
        TransportError::ConnectionFailed(e.to_string())
    } else {
        TransportError::RequestFailed(e.to_string())
    }
}
