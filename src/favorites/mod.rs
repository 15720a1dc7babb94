mod kv;
mod store;

pub use kv::{KeyValueStore, PersistenceError};
#[cfg(test)]
pub use kv::MemoryKvStore;
pub use store::{session_key, FavoritesEvent, FavoritesStore, SubscriptionId, FAVORITES_KEY};
