// src/session.rs
//
// Anonymous browsing sessions. Each browser gets a random id in the
// `session` cookie; favorites are stored per id.

use astra::Request;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};

pub const SESSION_COOKIE: &str = "session";

const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365; // 1 year

/// 32 random bytes, URL-safe base64 without padding.
const SESSION_ID_LEN: usize = 43;

pub fn new_session_id() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

/// The session id from the request's cookies, if present and well-formed.
pub fn session_from_request(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| is_valid_session_id(value))
        .map(str::to_string)
}

pub fn session_cookie(session_id: &str) -> String {
    format!(
        "{SESSION_COOKIE}={session_id}; Path=/; Max-Age={SESSION_MAX_AGE_SECS}; HttpOnly; SameSite=Lax"
    )
}

fn is_valid_session_id(value: &str) -> bool {
    value.len() == SESSION_ID_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
