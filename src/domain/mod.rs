pub mod agent;
pub mod catalog;
pub mod listing;

pub use agent::AgentRecord;
pub use catalog::{Catalog, CatalogError, StaticCatalog};
pub use listing::{GeoPoint, ListingRecord, ListingStatus, PropertyType};
