use crate::app::AppState;
use crate::db::connection::{init_db, Database};
use crate::domain::StaticCatalog;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicU64 = AtomicU64::new(0);

/// Fresh app state over a throwaway SQLite file using the production schema.
pub fn make_state() -> AppState {
    let path = std::env::temp_dir().join(format!(
        "estatehub_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    let catalog = StaticCatalog::bundled().expect("bundled catalog");
    AppState::new(db, catalog)
}

/// A well-formed session id derived from a readable name.
pub fn session_id(name: &str) -> String {
    format!("{name:_<43}")
}

/// Session used by `get`/`post`.
pub fn visitor() -> String {
    session_id("visitor")
}

/// Request without any cookies, like a first visit.
pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn request_as(method: Method, uri: &str, session: &str) -> Request {
    let mut req = request(method, uri);
    req.headers_mut()
        .insert("Cookie", format!("session={session}").parse().unwrap());
    req
}

pub fn get(uri: &str) -> Request {
    request_as(Method::GET, uri, &visitor())
}

pub fn post(uri: &str) -> Request {
    request_as(Method::POST, uri, &visitor())
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
