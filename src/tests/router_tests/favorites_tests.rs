// src/tests/router_tests/favorites_tests.rs

use crate::router::handle;
use crate::tests::utils::{
    body_string, get, location, make_state, post, request, request_as, session_id, visitor,
};
use http::Method;

#[test]
fn toggle_redirects_and_persists_across_requests() {
    let state = make_state();

    let resp = handle(post("/favorites/toggle?id=2"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/favorites");

    let body = body_string(handle(get("/favorites"), &state).unwrap());
    assert!(body.contains("Downtown Skyline Condo"));
    assert!(body.contains("1 saved property"));
}

#[test]
fn toggling_twice_removes_the_favorite() {
    let state = make_state();

    handle(post("/favorites/toggle?id=5"), &state).unwrap();
    handle(post("/favorites/toggle?id=5"), &state).unwrap();

    let body = body_string(handle(get("/favorites"), &state).unwrap());
    assert!(body.contains("No favorites yet"));
    assert!(!body.contains("Coral Gables Mediterranean Estate"));
}

#[test]
fn toggle_returns_to_the_referring_page() {
    let state = make_state();
    let mut req = post("/favorites/toggle?id=3");
    req.headers_mut()
        .insert("Referer", "http://localhost:3000/properties?city=Austin".parse().unwrap());

    let resp = handle(req, &state).unwrap();
    assert_eq!(location(&resp), "/properties?city=Austin");
}

#[test]
fn saved_listing_shows_pressed_heart_on_browse_page() {
    let state = make_state();
    let before = body_string(handle(get("/properties?city=Denver"), &state).unwrap());
    assert!(!before.contains("aria-pressed=\"true\""));

    handle(post("/favorites/toggle?id=10"), &state).unwrap();

    let after = body_string(handle(get("/properties?city=Denver"), &state).unwrap());
    assert_eq!(after.matches("aria-pressed=\"true\"").count(), 1);
}

#[test]
fn favorites_keep_catalog_order() {
    let state = make_state();
    handle(post("/favorites/toggle?id=12"), &state).unwrap();
    handle(post("/favorites/toggle?id=1"), &state).unwrap();

    let body = body_string(handle(get("/favorites"), &state).unwrap());
    assert!(body.contains("2 saved properties"));
    let villa = body.find("Modern Lakefront Villa").unwrap();
    let cliffside = body.find("La Jolla Cliffside Villa").unwrap();
    assert!(villa < cliffside);
}

#[test]
fn remove_and_clear() {
    let state = make_state();
    for id in ["1", "2", "3"] {
        handle(post(&format!("/favorites/toggle?id={id}")), &state).unwrap();
    }

    let resp = handle(post("/favorites/remove?id=2"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    let body = body_string(handle(get("/favorites"), &state).unwrap());
    assert!(body.contains("2 saved properties"));
    assert!(!body.contains("Downtown Skyline Condo"));

    // Removing something that is not saved changes nothing.
    handle(post("/favorites/remove?id=9"), &state).unwrap();
    assert_eq!(state.favorites_session(&visitor()).count(), 2);

    let resp = handle(post("/favorites/clear"), &state).unwrap();
    assert_eq!(location(&resp), "/favorites");
    assert_eq!(state.favorites_session(&visitor()).count(), 0);
}

#[test]
fn layout_badge_tracks_favorites_count() {
    let state = make_state();
    handle(post("/favorites/toggle?id=4"), &state).unwrap();
    handle(post("/favorites/toggle?id=6"), &state).unwrap();

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains(r#"id="favorites-count">2</span>"#));

    handle(post("/favorites/clear"), &state).unwrap();
    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(!body.contains("favorites-count"));
}

#[test]
fn toggle_without_id_is_bad_request() {
    let state = make_state();
    let err = handle(post("/favorites/toggle"), &state).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn favorites_routes_reject_get() {
    let state = make_state();
    assert_eq!(handle(get("/favorites/clear"), &state).unwrap_err().status(), 404);
}

#[test]
fn each_browser_keeps_its_own_favorites() {
    let state = make_state();
    let alice = session_id("alice");
    let bob = session_id("bob");

    handle(request_as(Method::POST, "/favorites/toggle?id=2", &alice), &state).unwrap();
    handle(request_as(Method::POST, "/favorites/toggle?id=7", &bob), &state).unwrap();

    let alice_page =
        body_string(handle(request_as(Method::GET, "/favorites", &alice), &state).unwrap());
    assert!(alice_page.contains("Downtown Skyline Condo"));
    assert!(!alice_page.contains("Capitol Hill Townhouse"));

    let bob_page =
        body_string(handle(request_as(Method::GET, "/favorites", &bob), &state).unwrap());
    assert!(bob_page.contains("Capitol Hill Townhouse"));
    assert!(!bob_page.contains("Downtown Skyline Condo"));
}

#[test]
fn first_visit_is_issued_a_session_cookie() {
    let state = make_state();

    let resp = handle(request(Method::POST, "/favorites/toggle?id=3"), &state).unwrap();
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.contains("HttpOnly"));

    let session = cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("session="))
        .unwrap()
        .to_string();

    let body =
        body_string(handle(request_as(Method::GET, "/favorites", &session), &state).unwrap());
    assert!(body.contains("Craftsman Family Home"));

    // Someone else's visit starts empty.
    let body = body_string(handle(get("/favorites"), &state).unwrap());
    assert!(body.contains("No favorites yet"));
}

#[test]
fn returning_browser_is_not_reissued_a_cookie() {
    let state = make_state();
    let resp = handle(get("/"), &state).unwrap();
    assert!(resp.headers().get("Set-Cookie").is_none());
}
