// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    in_flight = { Error::RequestInFlight, "in flight" },
    not_in_flight = { Error::NoRequestInFlight, "no request" },
    category = { Error::InvalidCategory("snacks".into()), "snacks" },
    date = { Error::InvalidDate("03/01/2024".into()), "yyyy-mm-dd" },
    amount = { Error::InvalidAmount("inf".into()), "finite" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_invalid_transition_display() {
    let err = Error::InvalidTransition {
        action: "select",
        state: "searching",
    };
    let msg = err.to_string();
    assert!(msg.contains("select"));
    assert!(msg.contains("searching"));
}

#[test]
fn error_no_such_result_display() {
    let err = Error::NoSuchResult {
        index: 4,
        available: 2,
    };
    assert_eq!(err.to_string(), "no search result #5 (2 available)");
}
