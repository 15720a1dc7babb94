// src/query/url_state.rs
//
// Navigation parameters -> initial filter specs. Read-only: nothing here
// writes state back into a URL. Bad or unknown input is ignored, never an error.

use crate::domain::ListingStatus;
use crate::query::filter::{bucket_index_for_token, AgentFilter, ListingFilter, SortKey};
use std::collections::HashMap;

/// Values the filter dropdowns submit for "no constraint".
const ALL_SENTINELS: [&str; 4] = ["All Cities", "All Types", "All Specialties", "all"];

/// Present, non-empty and not one of the "all" sentinels.
fn constraint<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && !ALL_SENTINELS.contains(v))
}

/// Build the listing filter for `/properties`.
///
/// `bedrooms` and `status` become first-class predicates (minimum bedrooms,
/// exact status) rather than being appended to the search text.
pub fn listing_filter_from_params(params: &HashMap<String, String>) -> ListingFilter {
    let mut filter = ListingFilter::default();

    if let Some(search) = params.get("search").filter(|s| !s.is_empty()) {
        filter.search = search.clone();
    }
    if let Some(property_type) = constraint(params, "type") {
        filter.property_type = Some(property_type.to_string());
    }
    if let Some(city) = constraint(params, "city") {
        filter.city = Some(city.to_string());
    }
    if let Some(index) = constraint(params, "priceRange").and_then(bucket_index_for_token) {
        filter.price_bucket = index;
    }
    if let Some(bedrooms) = constraint(params, "bedrooms").and_then(|v| v.parse::<u32>().ok()) {
        filter.min_bedrooms = Some(bedrooms);
    }
    if let Some(status) = constraint(params, "status").and_then(|v| v.parse::<ListingStatus>().ok()) {
        filter.status = Some(status);
    }
    if let Some(sort) = constraint(params, "sort")
        .and_then(|v| v.parse::<SortKey>().ok())
        .filter(|key| SortKey::LISTING_KEYS.contains(key))
    {
        filter.sort = sort;
    }

    tracing::debug!(?filter, "listing filter from url params");
    filter
}

/// Build the agent filter for `/agents`.
pub fn agent_filter_from_params(params: &HashMap<String, String>) -> AgentFilter {
    let mut filter = AgentFilter::default();

    if let Some(search) = params.get("search").filter(|s| !s.is_empty()) {
        filter.search = search.clone();
    }
    if let Some(specialty) = constraint(params, "specialty") {
        filter.specialty = Some(specialty.to_string());
    }
    if let Some(sort) = constraint(params, "sort")
        .and_then(|v| v.parse::<SortKey>().ok())
        .filter(|key| SortKey::AGENT_KEYS.contains(key))
    {
        filter.sort = sort;
    }

    filter
}
