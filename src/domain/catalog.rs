// src/domain/catalog.rs

use crate::domain::{AgentRecord, ListingRecord, ListingStatus};
use serde::Deserialize;
use std::collections::HashSet;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Invalid {kind} record {id}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        reason: String,
    },
}

/// Read-only source of listing and agent records.
///
/// Record order is significant: it is the tiebreaker for every sort the
/// query engine performs.
pub trait Catalog {
    fn listings(&self) -> &[ListingRecord];
    fn agents(&self) -> &[AgentRecord];

    fn listing(&self, id: &str) -> Option<&ListingRecord> {
        self.listings().iter().find(|l| l.id == id)
    }

    fn agent(&self, id: &str) -> Option<&AgentRecord> {
        self.agents().iter().find(|a| a.id == id)
    }

    /// Distinct cities in first-seen order.
    fn cities(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.listings()
            .iter()
            .filter(|l| seen.insert(l.city.as_str()))
            .map(|l| l.city.clone())
            .collect()
    }

    /// Distinct agent specialties in first-seen order.
    fn specialties(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.agents()
            .iter()
            .flat_map(|a| a.specialties.iter())
            .filter(|s| seen.insert(s.as_str()))
            .cloned()
            .collect()
    }

    /// Other listings in the same city, catalog order, at most `limit`.
    fn related_listings(&self, listing: &ListingRecord, limit: usize) -> Vec<ListingRecord> {
        self.listings()
            .iter()
            .filter(|l| l.id != listing.id && l.city == listing.city)
            .take(limit)
            .cloned()
            .collect()
    }

    fn featured_listings(&self, limit: usize) -> Vec<ListingRecord> {
        self.listings()
            .iter()
            .filter(|l| l.status == ListingStatus::Featured)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Resolve identifiers against the catalog, keeping catalog order.
    /// Unknown identifiers are skipped.
    fn listings_by_ids(&self, ids: &[String]) -> Vec<ListingRecord> {
        self.listings()
            .iter()
            .filter(|l| ids.iter().any(|id| *id == l.id))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    listings: Vec<ListingRecord>,
    #[serde(default)]
    agents: Vec<AgentRecord>,
}

impl StaticCatalog {
    /// The sample dataset compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: StaticCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn new(
        listings: Vec<ListingRecord>,
        agents: Vec<AgentRecord>,
    ) -> Result<Self, CatalogError> {
        let catalog = StaticCatalog { listings, agents };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for listing in &self.listings {
            if !ids.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "listing",
                    id: listing.id.clone(),
                });
            }
            if listing.sqft == 0 || listing.year_built == 0 {
                return Err(CatalogError::InvalidRecord {
                    kind: "listing",
                    id: listing.id.clone(),
                    reason: "sqft and yearBuilt must be positive".into(),
                });
            }
        }

        let mut ids = HashSet::new();
        for agent in &self.agents {
            if !ids.insert(agent.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "agent",
                    id: agent.id.clone(),
                });
            }
            if !(0.0..=5.0).contains(&agent.rating) {
                return Err(CatalogError::InvalidRecord {
                    kind: "agent",
                    id: agent.id.clone(),
                    reason: format!("rating {} outside 0-5", agent.rating),
                });
            }
        }

        Ok(())
    }
}

impl Catalog for StaticCatalog {
    fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    fn agents(&self) -> &[AgentRecord] {
        &self.agents
    }
}
