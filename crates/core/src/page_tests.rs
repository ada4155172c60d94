// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn serializes_exact_notion_body() {
    let record = ExpenseRecord::new("db123", "Coffee", march_first(), ExpenseCategory::Food, 4.5);

    similar_asserts::assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"parent":{"database_id":"db123"},"properties":{"Expense":{"title":[{"text":{"content":"Coffee"}}]},"Date":{"date":{"start":"2024-03-01"}},"Category":{"multi_select":[{"name":"Food"}]},"Amount":{"number":4.5}}}"#
    );
}

#[test]
fn negative_and_whole_amounts_serialize_as_numbers() {
    let record = ExpenseRecord::new("db", "Refund", march_first(), ExpenseCategory::Income, -2.0);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["properties"]["Amount"]["number"], serde_json::json!(-2.0));
}

#[test]
fn category_name_is_notion_option_name() {
    let record = ExpenseRecord::new("db", "Movie", march_first(), ExpenseCategory::Entertainment, 12.0);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value["properties"]["Category"]["multi_select"][0]["name"],
        "Entertainment"
    );
}

#[test]
fn empty_expense_text_is_sent_as_is() {
    let record = ExpenseRecord::new("db", "", march_first(), ExpenseCategory::Food, 0.0);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["properties"]["Expense"]["title"][0]["text"]["content"], "");
}

#[test]
fn record_decodes_back() {
    let record = ExpenseRecord::new("db123", "Coffee", march_first(), ExpenseCategory::Food, 4.5);
    let json = serde_json::to_string(&record).unwrap();
    let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[parameterized(
    plain = { "2024-03-01", 2024, 3, 1 },
    padded = { " 2023-12-26 ", 2023, 12, 26 },
)]
fn parse_date_valid(input: &str, y: i32, m: u32, d: u32) {
    assert_eq!(parse_date(input).unwrap(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
}

#[parameterized(
    slashes = { "03/01/2024" },
    impossible = { "2024-02-30" },
    empty = { "" },
)]
fn parse_date_invalid(input: &str) {
    assert!(matches!(parse_date(input), Err(Error::InvalidDate(_))));
}
