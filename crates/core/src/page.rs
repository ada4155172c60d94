// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Body of Notion's `POST /v1/pages` for one expense row.
//!
//! The property keys `Expense`, `Date`, `Category` and `Amount` are the column
//! names the target database must define; they are not derived from its
//! schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::ExpenseCategory;
use crate::error::{Error, Result};

/// Date format used by the `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A new page to append to an expenses database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub parent: DatabaseParent,
    pub properties: ExpenseProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseParent {
    pub database_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseProperties {
    #[serde(rename = "Expense")]
    pub expense: TitleValue,
    #[serde(rename = "Date")]
    pub date: DateValue,
    #[serde(rename = "Category")]
    pub category: MultiSelectValue,
    #[serde(rename = "Amount")]
    pub amount: NumberValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleValue {
    pub title: Vec<TitleText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleText {
    pub text: TextValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub date: DateStart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStart {
    #[serde(with = "iso_date")]
    pub start: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelectValue {
    pub multi_select: Vec<OptionName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberValue {
    pub number: f64,
}

impl ExpenseRecord {
    /// Builds the row for `database_id`.
    pub fn new(
        database_id: impl Into<String>,
        expense: impl Into<String>,
        date: NaiveDate,
        category: ExpenseCategory,
        amount: f64,
    ) -> Self {
        ExpenseRecord {
            parent: DatabaseParent {
                database_id: database_id.into(),
            },
            properties: ExpenseProperties {
                expense: TitleValue {
                    title: vec![TitleText {
                        text: TextValue {
                            content: expense.into(),
                        },
                    }],
                },
                date: DateValue {
                    date: DateStart { start: date },
                },
                category: MultiSelectValue {
                    multi_select: vec![OptionName {
                        name: category.as_str().to_string(),
                    }],
                },
                amount: NumberValue { number: amount },
            },
        }
    }
}

/// Parses a `yyyy-mm-dd` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(d)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
