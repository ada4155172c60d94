// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expense Recorder workflow.
//!
//! Drives the "add an expense" screen for one selected database:
//!
//! ```text
//!   Editing ──submit──► Submitting ──complete(Ok)──► Succeeded
//!      ▲                    │
//!      │                    └──complete(Err)──► Failed
//!      └───────────retry──────────────────────────┘
//! ```
//!
//! Like the locator, the recorder performs no I/O: [`ExpenseRecorder::submit`]
//! returns the page body to send and [`ExpenseRecorder::complete`] takes the
//! outcome. Success is final. A failure is never retried automatically; the
//! user has to call [`ExpenseRecorder::retry`] and submit again.

use chrono::NaiveDate;
use serde_json::Value;

use crate::category::ExpenseCategory;
use crate::error::{Error, Result};
use crate::page::ExpenseRecord;
use crate::request::RequestError;
use crate::search::SearchResultItem;

/// Amount change per stepper press.
pub const AMOUNT_STEP: f64 = 0.5;

/// Parses a typed amount. Non-finite values are rejected since Notion
/// would store them as an empty number.
pub fn parse_amount(s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(s.to_string())),
    }
}

fn ensure_finite(amount: f64) -> Result<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount.to_string()))
    }
}

/// Stepper button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// Fields the user edits before submitting.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub expense: String,
    pub amount: f64,
    pub category: ExpenseCategory,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        ExpenseDraft {
            expense: String::new(),
            amount: 0.0,
            category: ExpenseCategory::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecorderState {
    Editing,
    /// The create-page request is in flight.
    Submitting { record: ExpenseRecord },
    /// Notion accepted the page; holds the created page object.
    Succeeded { page: Value },
    Failed { error: RequestError },
}

impl RecorderState {
    pub fn name(&self) -> &'static str {
        match self {
            RecorderState::Editing => "editing",
            RecorderState::Submitting { .. } => "submitting",
            RecorderState::Succeeded { .. } => "succeeded",
            RecorderState::Failed { .. } => "failed",
        }
    }
}

/// State machine for recording one expense into a selected database.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecorder {
    database: SearchResultItem,
    draft: ExpenseDraft,
    state: RecorderState,
}

impl ExpenseRecorder {
    /// Opens the recorder for a database picked from search results.
    pub fn new(database: SearchResultItem) -> Self {
        Self::with_draft(database, ExpenseDraft::default())
    }

    pub fn with_draft(database: SearchResultItem, draft: ExpenseDraft) -> Self {
        ExpenseRecorder {
            database,
            draft,
            state: RecorderState::Editing,
        }
    }

    pub fn database(&self) -> &SearchResultItem {
        &self.database
    }

    /// Title shown at the top of the screen.
    pub fn database_title(&self) -> &str {
        self.database.display_title()
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RecorderState::Submitting { .. })
    }

    pub fn set_expense(&mut self, expense: impl Into<String>) -> Result<()> {
        self.ensure_editing("edit the expense")?;
        self.draft.expense = expense.into();
        Ok(())
    }

    pub fn set_category(&mut self, category: ExpenseCategory) -> Result<()> {
        self.ensure_editing("change the category")?;
        self.draft.category = category;
        Ok(())
    }

    /// Sets the amount directly. Any finite value is accepted, negative included.
    pub fn set_amount(&mut self, amount: f64) -> Result<()> {
        self.ensure_editing("change the amount")?;
        self.draft.amount = ensure_finite(amount)?;
        Ok(())
    }

    /// Moves the amount by [`AMOUNT_STEP`] without clamping.
    pub fn adjust_amount(&mut self, direction: StepDirection) -> Result<f64> {
        self.ensure_editing("change the amount")?;
        match direction {
            StepDirection::Increment => self.draft.amount += AMOUNT_STEP,
            StepDirection::Decrement => self.draft.amount -= AMOUNT_STEP,
        }
        Ok(self.draft.amount)
    }

    /// Builds the page for `today` and starts submitting it.
    pub fn submit(&mut self, today: NaiveDate) -> Result<ExpenseRecord> {
        match &self.state {
            RecorderState::Editing => {}
            RecorderState::Submitting { .. } => return Err(Error::RequestInFlight),
            other => {
                return Err(Error::InvalidTransition {
                    action: "submit",
                    state: other.name(),
                })
            }
        }
        ensure_finite(self.draft.amount)?;
        let record = ExpenseRecord::new(
            self.database.id.clone(),
            self.draft.expense.clone(),
            today,
            self.draft.category,
            self.draft.amount,
        );
        self.state = RecorderState::Submitting {
            record: record.clone(),
        };
        Ok(record)
    }

    /// Delivers the outcome of the in-flight submission.
    ///
    /// The response body is not checked against any schema.
    pub fn complete(&mut self, outcome: std::result::Result<Value, RequestError>) -> Result<()> {
        if !self.is_loading() {
            return Err(Error::NoRequestInFlight);
        }
        self.state = match outcome {
            Ok(page) => RecorderState::Succeeded { page },
            Err(error) => RecorderState::Failed { error },
        };
        Ok(())
    }

    /// Returns from a failure to editing with the draft intact.
    pub fn retry(&mut self) -> Result<()> {
        match &self.state {
            RecorderState::Failed { .. } => {
                self.state = RecorderState::Editing;
                Ok(())
            }
            other => Err(Error::InvalidTransition {
                action: "retry",
                state: other.name(),
            }),
        }
    }

    fn ensure_editing(&self, action: &'static str) -> Result<()> {
        match &self.state {
            RecorderState::Editing => Ok(()),
            other => Err(Error::InvalidTransition {
                action,
                state: other.name(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
