// src/tests/router_tests/properties_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, make_state};

#[test]
fn home_page_lists_featured_properties() {
    let state = make_state();
    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Featured Properties"));
    assert!(body.contains("Modern Lakefront Villa"));
    assert!(body.contains("/properties?priceRange=500k-1m"));
}

#[test]
fn properties_page_shows_whole_catalog_by_default() {
    let state = make_state();
    let body = body_string(handle(get("/properties"), &state).unwrap());

    assert!(body.contains("Showing <strong>14</strong> of 14 properties"));
}

#[test]
fn url_params_drive_the_initial_filter() {
    let state = make_state();
    let body = body_string(handle(get("/properties?city=Miami&type=condo"), &state).unwrap());

    assert!(body.contains("Brickell Bay Condo"));
    assert!(!body.contains("Coral Gables Mediterranean Estate"));
    assert!(body.contains("Showing <strong>1</strong>"));
}

#[test]
fn price_range_token_filters_by_bucket() {
    let state = make_state();
    let body = body_string(handle(get("/properties?priceRange=500k-1m&sort=price-low"), &state).unwrap());

    assert!(body.contains("Showing <strong>6</strong>"));
    let cheapest = body.find("Highlands Mountain-View House").unwrap();
    let priciest = body.find("Brickell Bay Condo").unwrap();
    assert!(cheapest < priciest);
}

#[test]
fn bogus_params_are_ignored() {
    let state = make_state();
    let resp = handle(get("/properties?priceRange=bogus&sort=cheapest&foo=bar"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Showing <strong>14</strong>"));
}

#[test]
fn empty_result_renders_no_results_state() {
    let state = make_state();
    let body = body_string(handle(get("/properties?search=castle"), &state).unwrap());
    assert!(body.contains("No properties found"));
}

#[test]
fn property_detail_shows_related_listings_and_estimate() {
    let state = make_state();
    let body = body_string(handle(get("/properties/2"), &state).unwrap());

    assert!(body.contains("Downtown Skyline Condo"));
    assert!(body.contains("$685,000"));
    assert!(body.contains("Quick Estimate"));
    assert!(body.contains("Similar Properties in Austin"));
    assert!(body.contains("Craftsman Family Home"));
    assert!(!body.contains("Brickell Bay Condo"));
}

#[test]
fn unknown_property_is_404() {
    let state = make_state();
    let err = handle(get("/properties/does-not-exist"), &state).unwrap_err();
    assert_eq!(err.status(), 404);
}

#[test]
fn unknown_route_is_404() {
    let state = make_state();
    let err = handle(get("/careers"), &state).unwrap_err();
    assert_eq!(err.status(), 404);
}
