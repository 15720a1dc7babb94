// src/query/filter.rs

use crate::domain::ListingStatus;
use crate::query::QueryError;
use std::fmt;
use std::str::FromStr;

/// One entry in the fixed, ordered list of price ranges.
/// `max: None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBucket {
    pub label: &'static str,
    /// Token accepted in the `priceRange` URL parameter.
    pub token: &'static str,
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceBucket {
    /// Inclusive on both ends.
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// Bucket 0 is "All Prices" and never constrains anything.
pub const PRICE_BUCKETS: [PriceBucket; 5] = [
    PriceBucket {
        label: "All Prices",
        token: "all",
        min: 0,
        max: None,
    },
    PriceBucket {
        label: "Under $500K",
        token: "under-500k",
        min: 0,
        max: Some(500_000),
    },
    PriceBucket {
        label: "$500K - $1M",
        token: "500k-1m",
        min: 500_000,
        max: Some(1_000_000),
    },
    PriceBucket {
        label: "$1M - $2M",
        token: "1m-2m",
        min: 1_000_000,
        max: Some(2_000_000),
    },
    PriceBucket {
        label: "$2M+",
        token: "2m-plus",
        min: 2_000_000,
        max: None,
    },
];

pub fn price_bucket(index: usize) -> Result<&'static PriceBucket, QueryError> {
    PRICE_BUCKETS
        .get(index)
        .ok_or(QueryError::InvalidPriceBucket {
            index,
            available: PRICE_BUCKETS.len(),
        })
}

pub fn bucket_index_for_token(token: &str) -> Option<usize> {
    PRICE_BUCKETS
        .iter()
        .position(|b| b.token.eq_ignore_ascii_case(token.trim()))
}

/// Closed set of sort orders. Listings accept the first four, agents the
/// last four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Sqft,
    Experience,
    Rating,
    Listings,
    Name,
}

impl SortKey {
    pub const LISTING_KEYS: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Sqft,
    ];

    pub const AGENT_KEYS: [SortKey; 4] = [
        SortKey::Experience,
        SortKey::Rating,
        SortKey::Listings,
        SortKey::Name,
    ];

    pub fn as_token(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Sqft => "sqft",
            SortKey::Experience => "experience",
            SortKey::Rating => "rating",
            SortKey::Listings => "listings",
            SortKey::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Sqft => "Largest",
            SortKey::Experience => "Experience",
            SortKey::Rating => "Rating",
            SortKey::Listings => "Active Listings",
            SortKey::Name => "Name (A-Z)",
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::LISTING_KEYS
            .into_iter()
            .chain(SortKey::AGENT_KEYS)
            .find(|key| key.as_token() == s.trim())
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Constraints for one listing query. `None` on an optional dimension is
/// the "all" sentinel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFilter {
    /// Matched against title and address; empty matches everything.
    pub search: String,
    pub city: Option<String>,
    /// Compared case-insensitively with the listing's type label.
    pub property_type: Option<String>,
    /// Index into [`PRICE_BUCKETS`].
    pub price_bucket: usize,
    pub min_bedrooms: Option<u32>,
    pub status: Option<ListingStatus>,
    pub sort: SortKey,
}

impl ListingFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn with_price_bucket(mut self, index: usize) -> Self {
        self.price_bucket = index;
        self
    }

    pub fn with_min_bedrooms(mut self, bedrooms: u32) -> Self {
        self.min_bedrooms = Some(bedrooms);
        self
    }

    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Number of non-sentinel dimensions, shown next to "Clear All".
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.is_empty(),
            self.city.is_some(),
            self.property_type.is_some(),
            self.price_bucket != 0,
            self.min_bedrooms.is_some(),
            self.status.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Constraints for one agent query.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentFilter {
    /// Matched against name and bio.
    pub search: String,
    pub specialty: Option<String>,
    pub sort: SortKey,
}

impl Default for AgentFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            specialty: None,
            sort: SortKey::Experience,
        }
    }
}

impl AgentFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}
