// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed calls to the two Notion endpoints this tool uses.
//!
//! Every request carries `Content-Type: application/json`, the
//! `Notion-Version` header, and `Authorization: Bearer <secret>` when a secret
//! was configured. Without a secret the request goes out unauthenticated and
//! Notion's 401 surfaces as an HTTP status failure.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use nf_core::{ExpenseRecord, RequestError, SearchQuery, SearchResponse};

use super::transport::{HttpReply, HttpRequest, HttpTransport, Transport};
use crate::error::{Error, Result};

pub const NOTION_VERSION_HEADER: &str = "Notion-Version";

const SEARCH_PATH: &str = "v1/search";
const PAGES_PATH: &str = "v1/pages";

/// Connection settings for [`NotionClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `https://api.notion.com`.
    pub api_url: String,
    pub notion_version: String,
    /// Integration secret; `None` sends requests unauthenticated.
    pub secret: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("notion_version", &self.notion_version)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Error body returned by Notion for non-2xx responses.
#[derive(Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// Client for Notion's search and create-page endpoints.
pub struct NotionClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl NotionClient<HttpTransport> {
    /// Create a client backed by a real HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport =
            HttpTransport::new(config.timeout).map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(NotionClient { config, transport })
    }
}

impl<T: Transport> NotionClient<T> {
    /// Create a client with a custom transport (for testing).
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        NotionClient { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /v1/search`, decoding the body as a [`SearchResponse`].
    pub async fn search(
        &self,
        query: &SearchQuery,
    ) -> std::result::Result<SearchResponse, RequestError> {
        let reply = self.post_json(SEARCH_PATH, query).await?;
        let response: SearchResponse = serde_json::from_slice(&reply.body)?;
        tracing::info!(
            query = %query.query,
            results = response.results.len(),
            has_more = response.has_more,
            "search succeeded"
        );
        Ok(response)
    }

    /// `POST /v1/pages`. Any JSON body counts as success; its shape is not checked.
    pub async fn create_page(
        &self,
        record: &ExpenseRecord,
    ) -> std::result::Result<Value, RequestError> {
        let reply = self.post_json(PAGES_PATH, record).await?;
        if !reply.is_json() {
            let found = reply.content_type.as_deref().unwrap_or("no content type");
            tracing::warn!(content_type = found, "create page returned non-JSON body");
            return Err(RequestError::Decode(format!(
                "expected an application/json response, got {found}"
            )));
        }
        let page: Value = serde_json::from_slice(&reply.body)?;
        let page_id = page.get("id").and_then(Value::as_str).unwrap_or("?");
        tracing::info!(
            database_id = %record.parent.database_id,
            page_id,
            "page created"
        );
        Ok(page)
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                NOTION_VERSION_HEADER.to_string(),
                self.config.notion_version.clone(),
            ),
        ];
        if let Some(secret) = &self.config.secret {
            headers.push(("Authorization".to_string(), format!("Bearer {secret}")));
        }
        headers
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> std::result::Result<HttpReply, RequestError> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);
        let body = serde_json::to_vec(body)
            .map_err(|e| RequestError::Decode(format!("could not encode request: {e}")))?;

        tracing::debug!(
            url = %url,
            authenticated = self.config.secret.is_some(),
            "POST"
        );
        tracing::trace!(body = %String::from_utf8_lossy(&body), "request body");

        let request = HttpRequest {
            url: url.clone(),
            headers: self.headers(),
            body,
        };
        let reply = self.transport.post(request).await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "transport failure");
            RequestError::Transport(e.to_string())
        })?;

        if !reply.is_success() {
            let notion_error = serde_json::from_slice::<NotionErrorBody>(&reply.body).ok();
            tracing::warn!(
                url = %url,
                status = reply.status,
                code = notion_error.as_ref().and_then(|e| e.code.as_deref()).unwrap_or("-"),
                "request rejected"
            );
            return Err(RequestError::HttpStatus {
                status: reply.status,
                message: notion_error.map(|e| e.message),
            });
        }
        Ok(reply)
    }
}
