// src/query/engine.rs

use crate::domain::{AgentRecord, ListingRecord};
use crate::query::filter::{price_bucket, AgentFilter, ListingFilter, SortKey};
use crate::query::QueryError;
use std::cmp::Ordering;

/// A filter spec the engine can run against one record kind.
pub trait FilterSpec {
    type Record: Clone;

    /// Used in error messages.
    const RECORD_KIND: &'static str;

    /// Reject specs the engine can't answer predictably.
    fn validate(&self) -> Result<(), QueryError>;

    /// AND of every active predicate.
    fn matches(&self, record: &Self::Record) -> bool;

    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;
}

/// Filter then stable-sort the catalog. Equal sort keys keep catalog order.
/// Always rescans the full catalog and returns owned records.
pub fn query<F: FilterSpec>(catalog: &[F::Record], spec: &F) -> Result<Vec<F::Record>, QueryError> {
    spec.validate()?;

    let mut results: Vec<F::Record> = catalog
        .iter()
        .filter(|record| spec.matches(record))
        .cloned()
        .collect();

    // `sort_by` is stable.
    results.sort_by(|a, b| spec.compare(a, b));

    tracing::debug!(
        kind = F::RECORD_KIND,
        scanned = catalog.len(),
        matched = results.len(),
        "query complete"
    );

    Ok(results)
}

pub fn query_listings(
    catalog: &[ListingRecord],
    filter: &ListingFilter,
) -> Result<Vec<ListingRecord>, QueryError> {
    query(catalog, filter)
}

pub fn query_agents(
    catalog: &[AgentRecord],
    filter: &AgentFilter,
) -> Result<Vec<AgentRecord>, QueryError> {
    query(catalog, filter)
}

/// Case-insensitive substring match over any of `fields`. Empty term matches.
fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Case-folded order first, raw order only to separate names that differ by case.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl FilterSpec for ListingFilter {
    type Record = ListingRecord;
    const RECORD_KIND: &'static str = "listings";

    fn validate(&self) -> Result<(), QueryError> {
        price_bucket(self.price_bucket)?;
        if !SortKey::LISTING_KEYS.contains(&self.sort) {
            return Err(QueryError::SortKeyNotApplicable {
                key: self.sort,
                record_kind: Self::RECORD_KIND,
            });
        }
        Ok(())
    }

    fn matches(&self, listing: &ListingRecord) -> bool {
        // validate() ran first, so the bucket lookup can't miss.
        let in_price_range = price_bucket(self.price_bucket)
            .map(|bucket| bucket.contains(listing.price))
            .unwrap_or(false);

        matches_search(&self.search, &[listing.title.as_str(), listing.address.as_str()])
            && self.city.as_ref().map_or(true, |city| listing.city == *city)
            && self
                .property_type
                .as_ref()
                .map_or(true, |t| listing.property_type.matches_name(t))
            && in_price_range
            && self.min_bedrooms.map_or(true, |min| listing.bedrooms >= min)
            && self.status.map_or(true, |status| listing.status == status)
    }

    fn compare(&self, a: &ListingRecord, b: &ListingRecord) -> Ordering {
        match self.sort {
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Sqft => b.sqft.cmp(&a.sqft),
            // validate() restricts the rest to Newest.
            _ => b.year_built.cmp(&a.year_built),
        }
    }
}

impl FilterSpec for AgentFilter {
    type Record = AgentRecord;
    const RECORD_KIND: &'static str = "agents";

    fn validate(&self) -> Result<(), QueryError> {
        if !SortKey::AGENT_KEYS.contains(&self.sort) {
            return Err(QueryError::SortKeyNotApplicable {
                key: self.sort,
                record_kind: Self::RECORD_KIND,
            });
        }
        Ok(())
    }

    fn matches(&self, agent: &AgentRecord) -> bool {
        matches_search(&self.search, &[agent.name.as_str(), agent.bio.as_str()])
            && self
                .specialty
                .as_ref()
                .map_or(true, |specialty| agent.has_specialty(specialty))
    }

    fn compare(&self, a: &AgentRecord, b: &AgentRecord) -> Ordering {
        match self.sort {
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Listings => b.active_listings.cmp(&a.active_listings),
            SortKey::Name => compare_names(&a.name, &b.name),
            _ => b.years_experience.cmp(&a.years_experience),
        }
    }
}
