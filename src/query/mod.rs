mod engine;
mod filter;
mod query_error;
mod url_state;

pub use engine::{query, query_agents, query_listings, FilterSpec};
pub use filter::{
    bucket_index_for_token, price_bucket, AgentFilter, ListingFilter, PriceBucket, SortKey,
    PRICE_BUCKETS,
};
pub use query_error::QueryError;
pub use url_state::{agent_filter_from_params, listing_filter_from_params};
