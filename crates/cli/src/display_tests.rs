// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

fn groceries() -> SearchResultItem {
    serde_json::from_value(json!({
        "id": "dbX",
        "title": [{ "text": { "content": "Groceries" } }],
        "url": "https://www.notion.so/dbX",
        "last_edited_time": "2024-02-29T10:00:00.000Z"
    }))
    .unwrap()
}

#[parameterized(
    zero = { 0.0, "$0.00" },
    half = { 4.5, "$4.50" },
    negative = { -1.0, "$-1.00" },
    large = { 1234.5, "$1234.50" },
)]
fn test_format_amount(amount: f64, expected: &str) {
    assert_eq!(format_amount(amount), expected);
}

#[test]
fn test_format_result_line_plain() {
    let line = format_result_line(&Painter::plain(), 1, &groceries());
    assert_eq!(line, "  1. ▸ Groceries  dbX");
}

#[test]
fn test_format_draft_plain() {
    let draft = ExpenseDraft {
        expense: "Coffee".into(),
        amount: 4.5,
        category: ExpenseCategory::Food,
    };
    assert_eq!(format_draft(&Painter::plain(), &draft), "$4.50  [Food]");
}

#[test]
fn test_banners_plain() {
    let p = Painter::plain();
    assert_eq!(success_banner(&p), "✓ Success!");
    assert_eq!(
        failure_banner(
            &p,
            &RequestError::HttpStatus {
                status: 404,
                message: None
            }
        ),
        "✗ Error! server returned HTTP 404"
    );
}

#[test]
fn test_database_json() {
    let item = groceries();
    let value = serde_json::to_value(DatabaseJson::new(1, &item)).unwrap();
    assert_eq!(
        value,
        json!({
            "position": 1,
            "id": "dbX",
            "title": "Groceries",
            "url": "https://www.notion.so/dbX",
            "last_edited_time": "2024-02-29T10:00:00.000Z"
        })
    );
}

#[test]
fn test_expense_json() {
    let item = groceries();
    let draft = ExpenseDraft {
        expense: "Coffee".into(),
        amount: 4.5,
        category: ExpenseCategory::Food,
    };
    let page = json!({ "object": "page", "id": "p1", "url": "https://www.notion.so/p1" });
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let value = serde_json::to_value(ExpenseJson::new(&item, &draft, date, &page)).unwrap();

    assert_eq!(
        value,
        json!({
            "database_id": "dbX",
            "database": "Groceries",
            "expense": "Coffee",
            "amount": 4.5,
            "category": "Food",
            "date": "2024-03-01",
            "page_id": "p1",
            "url": "https://www.notion.so/p1"
        })
    );
}
