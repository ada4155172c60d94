// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Category assigned to an expense.
///
/// The names are the option names of the target database's `Category`
/// multi-select column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Income,
    #[default]
    Food,
    Entertainment,
    Other,
    School,
    Gifts,
    Home,
}

impl ExpenseCategory {
    /// Every category, in picker order.
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Income,
        ExpenseCategory::Food,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Other,
        ExpenseCategory::School,
        ExpenseCategory::Gifts,
        ExpenseCategory::Home,
    ];

    /// Returns the option name sent to Notion.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Income => "Income",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Other => "Other",
            ExpenseCategory::School => "School",
            ExpenseCategory::Gifts => "Gifts",
            ExpenseCategory::Home => "Home",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
