pub mod connection;
pub mod kv;

pub use connection::{init_db, Database};
pub use kv::SqliteKvStore;
