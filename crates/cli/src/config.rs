// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration.
//!
//! Settings come from an optional TOML file (`NF_CONFIG`, or
//! `<config dir>/notion-finances/config.toml`) overlaid with environment
//! variables:
//! - `api_url`: Notion API base URL, overridden by `NF_API_URL`
//! - `notion_version`: value of the `Notion-Version` header
//! - `timeout_secs`: HTTP client timeout
//! - `default_category`: category preselected for new expenses
//!
//! The integration secret is only ever read from `NOTION_API_SECRET`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use nf_core::ExpenseCategory;

use crate::client::ClientConfig;
use crate::env;
use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.notion.com";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_DIR_NAME: &str = "notion-finances";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub notion_version: Option<String>,
    pub timeout_secs: Option<u64>,
    pub default_category: Option<String>,
}

impl FileConfig {
    /// Reads a config file. A missing file yields `None`.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let parsed = toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(parsed))
    }
}

/// Values taken from the process environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub secret: Option<String>,
    pub api_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        EnvOverrides {
            secret: env::notion_api_secret(),
            api_url: env::api_url(),
        }
    }
}

impl fmt::Debug for EnvOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvOverrides")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Resolved configuration.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub notion_version: String,
    pub timeout: Duration,
    pub default_category: ExpenseCategory,
    pub secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_category: ExpenseCategory::default(),
            secret: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("notion_version", &self.notion_version)
            .field("timeout", &self.timeout)
            .field("default_category", &self.default_category)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Loads the config file (if any) and applies the environment.
    pub fn load() -> Result<Self> {
        let file = match config_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading config");
                FileConfig::read(&path)?
            }
            None => None,
        };
        Self::resolve(file.unwrap_or_default(), EnvOverrides::from_env())
    }

    /// Combines file values and environment values over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a non-HTTP API URL, a zero timeout, or an
    /// empty Notion version, and [`Error::Core`] for an unknown category.
    pub fn resolve(file: FileConfig, env: EnvOverrides) -> Result<Self> {
        let defaults = Config::default();

        let api_url = env
            .api_url
            .or(file.api_url)
            .unwrap_or(defaults.api_url)
            .trim_end_matches('/')
            .to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "invalid api_url '{api_url}': must start with http:// or https://"
            )));
        }

        let notion_version = file.notion_version.unwrap_or(defaults.notion_version);
        if notion_version.trim().is_empty() {
            return Err(Error::Config("notion_version cannot be empty".to_string()));
        }

        let timeout = match file.timeout_secs {
            Some(0) => return Err(Error::Config("timeout_secs must be at least 1".to_string())),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.timeout,
        };

        let default_category = match file.default_category {
            Some(name) => name.parse::<ExpenseCategory>()?,
            None => defaults.default_category,
        };

        Ok(Config {
            api_url,
            notion_version,
            timeout,
            default_category,
            secret: env.secret,
        })
    }

    /// Settings for the Notion client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            notion_version: self.notion_version.clone(),
            secret: self.secret.clone(),
            timeout: self.timeout,
        }
    }
}

/// Config file location: `NF_CONFIG`, else the per-user config directory.
pub fn config_path() -> Option<PathBuf> {
    env::config_path().or_else(default_config_path)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
