// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::locator::DatabaseLocator;
use crate::test_helpers::{database, response};
use serde_json::json;
use yare::parameterized;

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn submitting() -> ExpenseRecorder {
    let mut recorder = ExpenseRecorder::new(database("db123", "Expenses"));
    recorder.submit(march_first()).unwrap();
    recorder
}

#[test]
fn starts_editing_with_defaults() {
    let recorder = ExpenseRecorder::new(database("db123", "Expenses"));
    assert_eq!(recorder.state(), &RecorderState::Editing);
    assert_eq!(recorder.draft(), &ExpenseDraft::default());
    assert_eq!(recorder.draft().category, ExpenseCategory::Food);
    assert_eq!(recorder.draft().amount, 0.0);
}

#[parameterized(
    once = { 1 },
    three = { 3 },
    ten = { 10 },
)]
fn increment_steps_by_half(k: u32) {
    let mut recorder = ExpenseRecorder::new(database("db", "Expenses"));
    for _ in 0..k {
        recorder.adjust_amount(StepDirection::Increment).unwrap();
    }
    assert_eq!(recorder.draft().amount, 0.5 * f64::from(k));
}

#[parameterized(
    once = { 1 },
    three = { 3 },
    ten = { 10 },
)]
fn decrement_goes_negative_without_clamping(k: u32) {
    let mut recorder = ExpenseRecorder::new(database("db", "Expenses"));
    for _ in 0..k {
        recorder.adjust_amount(StepDirection::Decrement).unwrap();
    }
    assert_eq!(recorder.draft().amount, -0.5 * f64::from(k));
}

#[test]
fn adjust_returns_new_amount() {
    let mut recorder = ExpenseRecorder::new(database("db", "Expenses"));
    recorder.set_amount(4.0).unwrap();
    assert_eq!(recorder.adjust_amount(StepDirection::Increment).unwrap(), 4.5);
}

#[test]
fn submit_builds_exact_body() {
    let mut recorder = ExpenseRecorder::new(database("db123", "Expenses"));
    recorder.set_expense("Coffee").unwrap();
    recorder.set_amount(4.5).unwrap();
    recorder.set_category(ExpenseCategory::Food).unwrap();

    let record = recorder.submit(march_first()).unwrap();

    similar_asserts::assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"parent":{"database_id":"db123"},"properties":{"Expense":{"title":[{"text":{"content":"Coffee"}}]},"Date":{"date":{"start":"2024-03-01"}},"Category":{"multi_select":[{"name":"Food"}]},"Amount":{"number":4.5}}}"#
    );
    assert!(recorder.is_loading());
}

#[test]
fn stepper_amount_reaches_submitted_body() {
    let mut recorder = ExpenseRecorder::new(database("db", "Expenses"));
    for _ in 0..9 {
        recorder.adjust_amount(StepDirection::Increment).unwrap();
    }
    let record = recorder.submit(march_first()).unwrap();
    assert_eq!(record.properties.amount.number, 4.5);
}

#[test]
fn selected_database_flows_from_locator() {
    let mut locator = DatabaseLocator::new();
    locator.set_input("Groceries").unwrap();
    locator.submit().unwrap();
    locator
        .complete(Ok(response(vec![database("dbX", "Groceries")])))
        .unwrap();

    let mut recorder = ExpenseRecorder::new(locator.select(0).unwrap());

    assert_eq!(recorder.database_title(), "Groceries");
    let record = recorder.submit(march_first()).unwrap();
    assert_eq!(record.parent.database_id, "dbX");
}

#[test]
fn double_submit_is_rejected() {
    let mut recorder = submitting();
    assert_eq!(recorder.submit(march_first()), Err(Error::RequestInFlight));
}

#[test]
fn edits_while_submitting_are_rejected() {
    let mut recorder = submitting();
    assert!(recorder.set_expense("Tea").is_err());
    assert!(recorder.set_amount(1.0).is_err());
    assert!(recorder.set_category(ExpenseCategory::Home).is_err());
    assert!(recorder.adjust_amount(StepDirection::Increment).is_err());
}

#[test]
fn json_response_succeeds() {
    let mut recorder = submitting();
    recorder
        .complete(Ok(json!({ "object": "page", "id": "p1" })))
        .unwrap();

    assert!(matches!(recorder.state(), RecorderState::Succeeded { page } if page["id"] == "p1"));
    assert!(!recorder.is_loading());
}

#[test]
fn not_found_fails_and_never_succeeds() {
    let mut recorder = submitting();
    let error = RequestError::HttpStatus {
        status: 404,
        message: None,
    };

    recorder.complete(Err(error.clone())).unwrap();

    assert_eq!(recorder.state(), &RecorderState::Failed { error });
    // No automatic resubmission: nothing is in flight afterwards.
    assert!(!recorder.is_loading());
    assert_eq!(
        recorder.complete(Ok(json!({}))),
        Err(Error::NoRequestInFlight)
    );
    assert!(matches!(recorder.state(), RecorderState::Failed { .. }));
}

#[test]
fn transport_failure_fails() {
    let mut recorder = submitting();
    recorder
        .complete(Err(RequestError::Transport("connection refused".into())))
        .unwrap();
    assert_eq!(recorder.state().name(), "failed");
}

#[test]
fn retry_returns_to_editing_with_draft() {
    let mut recorder = ExpenseRecorder::new(database("db", "Expenses"));
    recorder.set_expense("Coffee").unwrap();
    recorder.set_amount(3.0).unwrap();
    recorder.submit(march_first()).unwrap();
    recorder
        .complete(Err(RequestError::HttpStatus {
            status: 502,
            message: None,
        }))
        .unwrap();

    recorder.retry().unwrap();

    assert_eq!(recorder.state(), &RecorderState::Editing);
    assert_eq!(recorder.draft().expense, "Coffee");
    assert_eq!(recorder.draft().amount, 3.0);
    assert!(recorder.submit(march_first()).is_ok());
}

#[test]
fn success_is_terminal() {
    let mut recorder = submitting();
    recorder.complete(Ok(json!({}))).unwrap();

    assert!(recorder.retry().is_err());
    assert!(matches!(
        recorder.submit(march_first()),
        Err(Error::InvalidTransition { state: "succeeded", .. })
    ));
}

#[test]
fn complete_while_editing_is_rejected() {
    let mut recorder = ExpenseRecorder::new(database("db", "Expenses"));
    assert_eq!(recorder.complete(Ok(json!({}))), Err(Error::NoRequestInFlight));
}

#[parameterized(
    decimal = { "4.5", 4.5 },
    negative = { "-12", -12.0 },
    padded = { " 3 ", 3.0 },
)]
fn parse_amount_accepts_finite(input: &str, expected: f64) {
    assert_eq!(parse_amount(input).unwrap(), expected);
}

#[parameterized(
    infinity = { "inf" },
    negative_infinity = { "-inf" },
    not_a_number = { "NaN" },
    garbage = { "lots" },
    empty = { "" },
)]
fn parse_amount_rejects(input: &str) {
    assert_eq!(parse_amount(input), Err(Error::InvalidAmount(input.to_string())));
}

#[test]
fn non_finite_amount_is_rejected_when_set() {
    let mut recorder = ExpenseRecorder::new(database("db", "Expenses"));
    recorder.set_amount(2.0).unwrap();
    assert!(matches!(
        recorder.set_amount(f64::INFINITY),
        Err(Error::InvalidAmount(_))
    ));
    assert_eq!(recorder.draft().amount, 2.0);
}

#[test]
fn non_finite_draft_is_never_submitted() {
    let draft = ExpenseDraft {
        amount: f64::NAN,
        ..ExpenseDraft::default()
    };
    let mut recorder = ExpenseRecorder::with_draft(database("db", "Expenses"), draft);
    assert!(matches!(
        recorder.submit(march_first()),
        Err(Error::InvalidAmount(_))
    ));
    assert_eq!(recorder.state(), &RecorderState::Editing);
}
