// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nf-core: Shared library for the nf expense recorder
//!
//! This crate provides the Notion request/response data contracts and the two
//! screen workflows (database locator and expense recorder) used by the `nf`
//! CLI. It performs no I/O: workflows hand out request bodies and accept the
//! outcome of the request once it completes.

pub mod category;
pub mod error;
pub mod locator;
pub mod page;
pub mod property;
pub mod recorder;
pub mod request;
pub mod rich_text;
pub mod search;

#[cfg(test)]
mod test_helpers;

pub use category::ExpenseCategory;
pub use error::{Error, Result};
pub use locator::{DatabaseLocator, LocatorState};
pub use page::{parse_date, ExpenseRecord};
pub use property::{PropertyDescriptor, PropertyKind, SelectOption};
pub use recorder::{
    parse_amount, ExpenseDraft, ExpenseRecorder, RecorderState, StepDirection, AMOUNT_STEP,
};
pub use request::RequestError;
pub use rich_text::TextRun;
pub use search::{SearchQuery, SearchResponse, SearchResultItem};
