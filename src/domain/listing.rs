// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single property listing as supplied by the catalog.
/// Read-only: nothing in the app mutates a listing after the catalog loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    /// Whole dollars.
    pub price: u64,
    pub address: String,
    pub city: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub year_built: u32,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ListingRecord {
    /// Price per square foot, rounded to whole dollars.
    pub fn price_per_sqft(&self) -> u64 {
        if self.sqft == 0 {
            return 0;
        }
        (self.price as f64 / self.sqft as f64).round() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    ForSale,
    ForRent,
    Sold,
    Pending,
    New,
    Featured,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 6] = [
        ListingStatus::ForSale,
        ListingStatus::ForRent,
        ListingStatus::Sold,
        ListingStatus::Pending,
        ListingStatus::New,
        ListingStatus::Featured,
    ];

    /// The token used in URLs and in the catalog JSON.
    pub fn as_token(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "for-sale",
            ListingStatus::ForRent => "for-rent",
            ListingStatus::Sold => "sold",
            ListingStatus::Pending => "pending",
            ListingStatus::New => "new",
            ListingStatus::Featured => "featured",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::ForRent => "For Rent",
            ListingStatus::Sold => "Sold",
            ListingStatus::Pending => "Pending",
            ListingStatus::New => "New",
            ListingStatus::Featured => "Featured",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingStatus::ALL
            .into_iter()
            .find(|status| status.as_token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown listing status: {s}"))
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Villa,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Villa,
        PropertyType::Townhouse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Villa => "Villa",
            PropertyType::Townhouse => "Townhouse",
        }
    }

    /// Case-insensitive comparison against a free-form type name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.label().to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
