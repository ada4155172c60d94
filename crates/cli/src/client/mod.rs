// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notion API client.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ NotionClient │────►│  Transport  │────►│  Notion API │
//! │  (headers,   │◄────│   (trait)   │◄────│  (HTTPS)    │
//! │   decoding)  │     └─────────────┘     └─────────────┘
//! └──────────────┘
//! ```
//!
//! The client owns request shaping and response classification; the
//! transport only moves bytes. Tests swap in a mock transport.

mod notion;
mod transport;

pub use notion::{ClientConfig, NotionClient, NOTION_VERSION_HEADER};
pub use transport::{HttpReply, HttpRequest, HttpTransport, Transport, TransportError};
