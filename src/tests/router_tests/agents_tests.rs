// src/tests/router_tests/agents_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, make_state};

#[test]
fn agents_default_to_experience_order() {
    let state = make_state();
    let body = body_string(handle(get("/agents"), &state).unwrap());

    let david = body.find("David Thompson").unwrap();
    let sarah = body.find("Sarah Johnson").unwrap();
    let brian = body.find("Brian O&#39;Neil").or_else(|| body.find("Brian O'Neil")).unwrap();
    assert!(david < sarah && sarah < brian);
}

#[test]
fn agents_filter_by_specialty() {
    let state = make_state();
    let body = body_string(handle(get("/agents?specialty=Condos&sort=name"), &state).unwrap());

    assert!(body.contains("2 agents"));
    assert!(body.find("Emily Rodriguez").unwrap() < body.find("Michael Chen").unwrap());
    assert!(!body.contains("Aisha Patel"));
}

#[test]
fn agent_detail_page() {
    let state = make_state();
    let body = body_string(handle(get("/agents/3"), &state).unwrap());

    assert!(body.contains("Emily Rodriguez"));
    assert!(body.contains("Portuguese"));
    assert!(body.contains("68 reviews"));
}

#[test]
fn unknown_agent_is_404() {
    let state = make_state();
    assert_eq!(handle(get("/agents/99"), &state).unwrap_err().status(), 404);
}
