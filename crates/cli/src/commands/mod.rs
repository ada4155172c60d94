// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod categories;
pub mod search;
pub mod session;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::future::Future;

use chrono::NaiveDate;
use tracing::{debug, info};

use nf_core::{DatabaseLocator, ExpenseRecorder, LocatorState, SearchResultItem};

use crate::client::{NotionClient, Transport};
use crate::config::Config;
use crate::error::{Error, Result};

/// Helper to open a Notion client from the resolved config.
pub fn open_client(config: &Config) -> Result<NotionClient> {
    NotionClient::new(config.client_config())
}

/// Drive a future to completion on a single-threaded runtime.
///
/// Each screen waits on one request at a time, so a fresh current-thread
/// runtime per request is enough.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(future))
}

/// Submit the locator's typed name and feed the outcome back into it.
///
/// Request failures land in the locator's failed state rather than in the
/// returned error.
pub fn run_search<T: Transport>(
    client: &NotionClient<T>,
    locator: &mut DatabaseLocator,
) -> Result<()> {
    let query = locator.submit()?;
    info!(query = %query.query, "searching databases");
    let outcome = block_on(client.search(&query))?;
    match &outcome {
        Ok(response) => debug!(results = response.results.len(), "search finished"),
        Err(e) => debug!(kind = e.kind(), error = %e, "search failed"),
    }
    locator.complete(outcome)?;
    Ok(())
}

/// Submit the recorder's draft dated `today` and feed the outcome back.
pub fn run_submit<T: Transport>(
    client: &NotionClient<T>,
    recorder: &mut ExpenseRecorder,
    today: NaiveDate,
) -> Result<()> {
    let record = recorder.submit(today)?;
    info!(
        database = %record.parent.database_id,
        amount = recorder.draft().amount,
        category = %recorder.draft().category,
        "creating expense page"
    );
    let outcome = block_on(client.create_page(&record))?;
    if let Err(e) = &outcome {
        debug!(kind = e.kind(), error = %e, "create page failed");
    }
    recorder.complete(outcome)?;
    Ok(())
}

/// Results of a finished search, or the failure as a command error.
pub fn results_or_error(locator: &DatabaseLocator) -> Result<&[SearchResultItem]> {
    match locator.state() {
        LocatorState::Succeeded { results } => Ok(results),
        LocatorState::Failed { error, .. } => Err(Error::SearchFailed(error.clone())),
        other => Err(Error::Core(nf_core::Error::InvalidTransition {
            action: "read results",
            state: other.name(),
        })),
    }
}
