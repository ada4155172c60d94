// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `nf` with a clean environment: no secret, no config file, no colors.
pub fn nf() -> Command {
    let mut cmd = cargo_bin_cmd!("nf");
    cmd.env("NF_CONFIG", "/nonexistent/nf-tests/config.toml")
        .env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("NOTION_API_SECRET")
        .env_remove("NF_API_URL")
        .env_remove("NF_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config file into a fresh temp directory.
pub fn config_file(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (temp, path)
}

/// A base URL nothing is listening on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    url
}

/// One request received by [`FakeNotion`].
#[derive(Debug, Clone)]
pub struct Received {
    pub path: String,
    /// Header names are lowercased.
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl Received {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Local HTTP server answering each connection with the next queued reply.
pub struct FakeNotion {
    pub url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl FakeNotion {
    pub fn start(replies: Vec<(u16, Value)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        thread::spawn(move || {
            for (status, body) in replies {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                if let Some(request) = read_request(&stream) {
                    log.lock().unwrap().push(request);
                }
                let body = body.to_string();
                let response = format!(
                    "HTTP/1.1 {status} Fake\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        FakeNotion { url, received }
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

fn read_request(stream: &TcpStream) -> Option<Received> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let path = request_line.split_whitespace().nth(1)?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            if name == "content-length" {
                content_length = value.trim().parse().ok()?;
            }
            headers.push((name, value.trim().to_string()));
        }
    }

    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).ok()?;
    Some(Received {
        path,
        headers,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    })
}

pub fn search_reply(databases: &[(&str, &str)]) -> (u16, Value) {
    let results: Vec<Value> = databases
        .iter()
        .map(|(id, title)| {
            serde_json::json!({
                "object": "database",
                "id": id,
                "title": [{ "type": "text", "text": { "content": title }, "plain_text": title }],
                "url": format!("https://www.notion.so/{id}")
            })
        })
        .collect();
    (
        200,
        serde_json::json!({ "object": "list", "results": results, "has_more": false }),
    )
}

pub fn page_reply(id: &str) -> (u16, Value) {
    (200, serde_json::json!({ "object": "page", "id": id }))
}

pub fn error_reply(status: u16, message: &str) -> (u16, Value) {
    (
        status,
        serde_json::json!({ "object": "error", "status": status, "code": "object_not_found", "message": message }),
    )
}
