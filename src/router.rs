use crate::app::AppState;
use crate::domain::Catalog;
use crate::errors::ServerError;
use crate::mortgage::{self, MortgageParams};
use crate::query::{self, agent_filter_from_params, listing_filter_from_params};
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::session;
use crate::templates::pages::{self, AgentsVm, PropertiesVm};
use astra::Request;
use http::header::{HeaderValue, SET_COOKIE};
use std::collections::HashMap;

const FEATURED_COUNT: usize = 3;
const RELATED_COUNT: usize = 3;
const AGENT_LISTING_COUNT: usize = 6;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let (session_id, issued) = match session::session_from_request(&req) {
        Some(id) => (id, false),
        None => (session::new_session_id(), true),
    };

    let mut resp = route(req, state, &session_id)?;

    if issued {
        tracing::debug!("new browsing session");
        let cookie = HeaderValue::from_str(&session::session_cookie(&session_id))
            .map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().insert(SET_COOKIE, cookie);
    }

    Ok(resp)
}

fn route(req: Request, state: &AppState, session: &str) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    tracing::debug!(method, path, "request");

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", [""]) => home(state, session),
        ("GET", ["properties"]) => properties(state, session, &params),
        ("GET", ["properties", id]) => property_detail(state, session, id),
        ("GET", ["agents"]) => agents(state, session, &params),
        ("GET", ["agents", id]) => agent_detail(state, session, id),
        ("GET", ["favorites"]) => favorites(state, session),
        ("POST", ["favorites", "toggle"]) => {
            let id = required(&params, "id")?;
            state.favorites_session(session).toggle_favorite(id);
            redirect_response(&back_location(&req, "/favorites"))
        }
        ("POST", ["favorites", "remove"]) => {
            let id = required(&params, "id")?;
            state.favorites_session(session).remove_favorite(id);
            redirect_response(&back_location(&req, "/favorites"))
        }
        ("POST", ["favorites", "clear"]) => {
            state.favorites_session(session).clear_all_favorites();
            redirect_response("/favorites")
        }
        ("GET", ["mortgage"]) => mortgage_calculator(state, session, &params),
        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState, session: &str) -> ResultResp {
    let favorites = state.favorites_session(session);
    let featured = state.catalog.featured_listings(FEATURED_COUNT);
    html_response(pages::home_page(&featured, &favorites))
}

fn properties(state: &AppState, session: &str, params: &HashMap<String, String>) -> ResultResp {
    let favorites = state.favorites_session(session);
    let filter = listing_filter_from_params(params);
    let results = query::query_listings(state.catalog.listings(), &filter)?;

    let vm = PropertiesVm {
        filter: &filter,
        results: &results,
        cities: state.catalog.cities(),
        catalog_size: state.catalog.listings().len(),
    };
    html_response(pages::properties_page(&vm, &favorites))
}

fn property_detail(state: &AppState, session: &str, id: &str) -> ResultResp {
    let listing = state.catalog.listing(id).ok_or(ServerError::NotFound)?;
    let favorites = state.favorites_session(session);
    let related = state.catalog.related_listings(listing, RELATED_COUNT);
    html_response(pages::property_detail_page(listing, &related, &favorites))
}

fn agents(state: &AppState, session: &str, params: &HashMap<String, String>) -> ResultResp {
    let favorites = state.favorites_session(session);
    let filter = agent_filter_from_params(params);
    let results = query::query_agents(state.catalog.agents(), &filter)?;

    let vm = AgentsVm {
        filter: &filter,
        results: &results,
        specialties: state.catalog.specialties(),
    };
    html_response(pages::agents_page(&vm, &favorites))
}

fn agent_detail(state: &AppState, session: &str, id: &str) -> ResultResp {
    let agent = state.catalog.agent(id).ok_or(ServerError::NotFound)?;
    let favorites = state.favorites_session(session);
    // Sample data has no listing -> agent link; show the first few listings.
    let listings: Vec<_> = state
        .catalog
        .listings()
        .iter()
        .take(AGENT_LISTING_COUNT)
        .cloned()
        .collect();
    html_response(pages::agent_detail_page(agent, &listings, &favorites))
}

fn favorites(state: &AppState, session: &str) -> ResultResp {
    let favorites = state.favorites_session(session);
    let listings = state.catalog.listings_by_ids(&favorites.favorites());
    html_response(pages::favorites_page(&listings, &favorites))
}

fn mortgage_calculator(state: &AppState, session: &str, params: &HashMap<String, String>) -> ResultResp {
    let favorites = state.favorites_session(session);
    let (loan, result) = match MortgageParams::from_params(params) {
        Ok(loan) => {
            let result = mortgage::calculate(&loan);
            (loan, result)
        }
        Err(e) => (MortgageParams::default(), Err(e)),
    };
    html_response(pages::mortgage_page(&loan, &result, &favorites))
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ServerError> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing '{key}' parameter")))
}

/// Where to send the browser after a form POST: the page it came from when
/// that is a local path, otherwise `fallback`.
fn back_location(req: &Request, fallback: &str) -> String {
    let referer = req
        .headers()
        .get("Referer")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if referer.starts_with('/') && !referer.starts_with("//") {
        return referer.to_string();
    }

    match url::Url::parse(referer) {
        Ok(url) => match url.query() {
            Some(q) => format!("{}?{}", url.path(), q),
            None => url.path().to_string(),
        },
        Err(_) => fallback.to_string(),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
