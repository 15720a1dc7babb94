// src/db/kv.rs

use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::favorites::{KeyValueStore, PersistenceError};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

const UPSERT_SQL: &str = r#"
    INSERT INTO kv_store (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at
"#;

/// `KeyValueStore` backed by the `kv_store` table.
#[derive(Debug, Clone)]
pub struct SqliteKvStore {
    db: Database,
}

impl SqliteKvStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn read_value(conn: &Connection, key: &str) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        params![key],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("kv read failed: {e}")))
}

fn write_value(conn: &Connection, key: &str, value: &str) -> Result<(), ServerError> {
    let now = Utc::now().naive_utc();
    conn.execute(UPSERT_SQL, params![key, value, now])
        .map_err(|e| ServerError::DbError(format!("kv write failed: {e}")))?;
    Ok(())
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.db
            .with_conn(|conn| read_value(conn, key))
            .map_err(|e| PersistenceError::Read(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.db
            .with_conn(|conn| write_value(conn, key, value))
            .map_err(|e| PersistenceError::Write(e.to_string()))
    }

    /// Runs inside `BEGIN IMMEDIATE`, which takes the write lock up front,
    /// so concurrent workers serialize on the key.
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> String,
    ) -> Result<(), PersistenceError> {
        self.db
            .with_conn(|conn| {
                let tx = conn
                    .transaction_with_behavior(TransactionBehavior::Immediate)
                    .map_err(|e| ServerError::DbError(format!("kv begin failed: {e}")))?;

                let next = apply(read_value(&tx, key)?);
                write_value(&tx, key, &next)?;

                tx.commit()
                    .map_err(|e| ServerError::DbError(format!("kv commit failed: {e}")))
            })
            .map_err(|e| PersistenceError::Write(e.to_string()))
    }
}
