// src/app.rs

use crate::db::{Database, SqliteKvStore};
use crate::domain::StaticCatalog;
use crate::favorites::{session_key, FavoritesStore};
use std::rc::Rc;

/// Everything a request handler needs. Shared read-only across workers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog: StaticCatalog,
}

impl AppState {
    pub fn new(db: Database, catalog: StaticCatalog) -> Self {
        Self { db, catalog }
    }

    /// The favorites of one browser session, hydrated from the database for
    /// this request. Handlers pass the handle to every template that needs it.
    pub fn favorites_session(&self, session_id: &str) -> Rc<FavoritesStore> {
        let store = FavoritesStore::hydrate_with_key(
            Rc::new(SqliteKvStore::new(self.db.clone())),
            session_key(session_id),
        );
        store.subscribe(|event| tracing::info!(?event, "favorites updated"));
        store
    }
}
