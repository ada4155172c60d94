// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Database Locator workflow.
//!
//! Drives the "find a database by name" screen:
//!
//! ```text
//!   Idle ──submit──► Searching ──complete(Ok)──► Succeeded ──select──► SearchResultItem
//!    ▲                   │
//!    │                   └──complete(Err)──► Failed
//!    └──────────retry / reset──────────────────┘
//! ```
//!
//! The locator never performs I/O. [`DatabaseLocator::submit`] hands back the
//! request body to send and [`DatabaseLocator::complete`] takes the outcome.
//! Between those two calls the locator is loading and refuses another submit.

use crate::error::{Error, Result};
use crate::request::RequestError;
use crate::search::{SearchQuery, SearchResponse, SearchResultItem};

/// Current screen state.
#[derive(Debug, Clone, PartialEq)]
pub enum LocatorState {
    /// Waiting for the user to type a name and submit.
    Idle { input: String },
    /// A search request is in flight.
    Searching { query: SearchQuery },
    /// Results are available for selection.
    Succeeded { results: Vec<SearchResultItem> },
    /// The search failed; `input` is kept for retry.
    Failed { input: String, error: RequestError },
}

impl LocatorState {
    /// Short lowercase name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            LocatorState::Idle { .. } => "idle",
            LocatorState::Searching { .. } => "searching",
            LocatorState::Succeeded { .. } => "showing results",
            LocatorState::Failed { .. } => "failed",
        }
    }
}

/// State machine for the database search screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseLocator {
    state: LocatorState,
}

impl Default for DatabaseLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseLocator {
    pub fn new() -> Self {
        DatabaseLocator {
            state: LocatorState::Idle {
                input: String::new(),
            },
        }
    }

    pub fn state(&self) -> &LocatorState {
        &self.state
    }

    /// True while a search is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LocatorState::Searching { .. })
    }

    /// The text typed so far, when editing or after a failure.
    pub fn input(&self) -> Option<&str> {
        match &self.state {
            LocatorState::Idle { input } | LocatorState::Failed { input, .. } => Some(input),
            _ => None,
        }
    }

    /// Results of the last successful search.
    pub fn results(&self) -> &[SearchResultItem] {
        match &self.state {
            LocatorState::Succeeded { results } => results,
            _ => &[],
        }
    }

    /// Replaces the typed database name.
    pub fn set_input(&mut self, name: impl Into<String>) -> Result<()> {
        match &mut self.state {
            LocatorState::Idle { input } => {
                *input = name.into();
                Ok(())
            }
            other => Err(invalid("edit the name", other)),
        }
    }

    /// Starts a search for the typed name and returns the body to send.
    ///
    /// Empty names are not rejected.
    pub fn submit(&mut self) -> Result<SearchQuery> {
        let input = match &self.state {
            LocatorState::Idle { input } => input.clone(),
            LocatorState::Searching { .. } => return Err(Error::RequestInFlight),
            other => return Err(invalid("submit", other)),
        };
        let query = SearchQuery::for_databases(input);
        self.state = LocatorState::Searching {
            query: query.clone(),
        };
        Ok(query)
    }

    /// Delivers the outcome of the in-flight search.
    ///
    /// Every failure kind lands in [`LocatorState::Failed`]; an empty result
    /// list is a success.
    pub fn complete(
        &mut self,
        outcome: std::result::Result<SearchResponse, RequestError>,
    ) -> Result<()> {
        let query = match &self.state {
            LocatorState::Searching { query } => query.query.clone(),
            _ => return Err(Error::NoRequestInFlight),
        };
        self.state = match outcome {
            Ok(response) => LocatorState::Succeeded {
                results: response.results,
            },
            Err(error) => LocatorState::Failed {
                input: query,
                error,
            },
        };
        Ok(())
    }

    /// Picks the result at `index` (zero-based) to hand to the recorder.
    pub fn select(&self, index: usize) -> Result<SearchResultItem> {
        match &self.state {
            LocatorState::Succeeded { results } => {
                results.get(index).cloned().ok_or(Error::NoSuchResult {
                    index,
                    available: results.len(),
                })
            }
            other => Err(invalid("select a result", other)),
        }
    }

    /// Returns from a failure to editing, keeping the typed name.
    pub fn retry(&mut self) -> Result<()> {
        let input = match &mut self.state {
            LocatorState::Failed { input, .. } => std::mem::take(input),
            other => return Err(invalid("retry", other)),
        };
        self.state = LocatorState::Idle { input };
        Ok(())
    }

    /// Starts over with an empty name.
    pub fn reset(&mut self) -> Result<()> {
        if self.is_loading() {
            return Err(Error::RequestInFlight);
        }
        *self = Self::new();
        Ok(())
    }
}

fn invalid(action: &'static str, state: &LocatorState) -> Error {
    Error::InvalidTransition {
        action,
        state: state.name(),
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
