// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering shared by the commands and the session screens.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use nf_core::{ExpenseCategory, ExpenseDraft, RequestError, SearchResultItem};

use crate::colors::Painter;

/// Marker shown before each selectable database.
pub const ROW_ICON: &str = "▸";

/// Formats an amount the way the stepper shows it: `$4.50`, `$-1.00`.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// One numbered row of the results list (1-based).
pub fn format_result_line(p: &Painter, position: usize, item: &SearchResultItem) -> String {
    format!(
        "{:>3}. {} {}  {}",
        position,
        p.success(ROW_ICON),
        item.display_title(),
        p.context(&item.id)
    )
}

/// Amount and category line of the recorder screen.
pub fn format_draft(p: &Painter, draft: &ExpenseDraft) -> String {
    format!(
        "{}  {}",
        p.literal(&format_amount(draft.amount)),
        p.context(&format!("[{}]", draft.category))
    )
}

pub fn success_banner(p: &Painter) -> String {
    format!("{} Success!", p.success("✓"))
}

pub fn failure_banner(p: &Painter, error: &RequestError) -> String {
    format!("{} Error! {}", p.failure("✗"), error)
}

/// JSON shape of one search result.
#[derive(Debug, Serialize)]
pub struct DatabaseJson<'a> {
    pub position: usize,
    pub id: &'a str,
    pub title: &'a str,
    pub url: &'a str,
    pub last_edited_time: &'a str,
}

impl<'a> DatabaseJson<'a> {
    pub fn new(position: usize, item: &'a SearchResultItem) -> Self {
        DatabaseJson {
            position,
            id: &item.id,
            title: item.display_title(),
            url: &item.url,
            last_edited_time: &item.last_edited_time,
        }
    }
}

/// JSON shape of a recorded expense.
#[derive(Debug, Serialize)]
pub struct ExpenseJson<'a> {
    pub database_id: &'a str,
    pub database: &'a str,
    pub expense: &'a str,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub page_id: Option<&'a str>,
    pub url: Option<&'a str>,
}

impl<'a> ExpenseJson<'a> {
    pub fn new(
        database: &'a SearchResultItem,
        draft: &'a ExpenseDraft,
        date: NaiveDate,
        page: &'a Value,
    ) -> Self {
        ExpenseJson {
            database_id: &database.id,
            database: database.display_title(),
            expense: &draft.expense,
            amount: draft.amount,
            category: draft.category,
            date,
            page_id: page.get("id").and_then(Value::as_str),
            url: page.get("url").and_then(Value::as_str),
        }
    }
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&date.format(nf_core::page::DATE_FORMAT))
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
