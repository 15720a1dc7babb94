// src/tests/router_tests/mortgage_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, make_state};

#[test]
fn default_calculator_shows_breakdown() {
    let state = make_state();
    let resp = handle(get("/mortgage"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("$2,878"));
    assert!(body.contains("$2,528"));
    assert!(body.contains("$400,000"));
    assert!(!body.contains("Check your inputs"));
}

#[test]
fn form_values_are_applied() {
    let state = make_state();
    let body = body_string(
        handle(
            get("/mortgage?homePrice=120000&downPayment=0&loanTerm=10&interestRate=0&propertyTax=0&homeInsurance=0"),
            &state,
        )
        .unwrap(),
    );

    assert!(body.contains("$1,000"));
    assert!(body.contains("Total of 120 Payments"));
}

#[test]
fn formatted_money_is_accepted() {
    let state = make_state();
    let body = body_string(handle(get("/mortgage?homePrice=%24500%2C000"), &state).unwrap());
    assert!(body.contains("$2,878"));
}

#[test]
fn down_payment_above_price_shows_validation() {
    let state = make_state();
    let resp = handle(get("/mortgage?homePrice=300000&downPayment=400000"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Check your inputs"));
    assert!(body.contains("exceeds home price"));
    assert!(!body.contains("Estimated Monthly Payment"));
}

#[test]
fn unparseable_input_shows_validation() {
    let state = make_state();
    let body = body_string(handle(get("/mortgage?interestRate=six"), &state).unwrap());

    assert!(body.contains("Check your inputs"));
    assert!(body.contains("Interest rate is not a number"));
}

#[test]
fn negative_rate_shows_validation() {
    let state = make_state();
    let body = body_string(handle(get("/mortgage?interestRate=-1"), &state).unwrap());
    assert!(body.contains("Interest rate cannot be negative"));
}

#[test]
fn absurd_loan_term_shows_validation() {
    let state = make_state();
    let resp = handle(get("/mortgage?loanTerm=1000000000"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("cannot be longer than 50 years"));
    assert!(!body.contains("Estimated Monthly Payment"));
}

#[test]
fn overflowing_payment_is_never_rendered() {
    let state = make_state();
    let body = body_string(handle(get("/mortgage?interestRate=1000000000"), &state).unwrap());

    assert!(body.contains("Check your inputs"));
    assert!(body.contains("must be a finite number"));
    assert!(!body.contains("$18,446,744"));
}
