//! Item Store for ReadLater.
//!
//! Implements `ItemStoreTrait` — durable, whole-list persistence in a single
//! key-value slot, backed by SQLite via `rusqlite`. The list is serialized as
//! one JSON array and overwritten wholesale on every save; there is no
//! append-only log and no partial update.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::errors::PersistenceError;
use crate::types::item::Item;

/// Well-known key of the durable slot holding the saved list.
pub const SLOT_KEY: &str = "readItLaterItems";

/// Trait defining item store operations.
pub trait ItemStoreTrait {
    /// Reads the persisted list. A missing slot is the normal empty state,
    /// never an error.
    fn load(&self) -> Result<Vec<Item>, PersistenceError>;
    /// Overwrites the durable slot with the full given list.
    fn save(&mut self, items: &[Item]) -> Result<(), PersistenceError>;
}

/// Item store backed by a SQLite connection.
pub struct ItemStore<'a> {
    conn: &'a Connection,
}

impl<'a> ItemStore<'a> {
    /// Creates a new `ItemStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

impl<'a> ItemStoreTrait for ItemStore<'a> {
    /// Loads the full list from the slot, or an empty list if the slot is absent.
    fn load(&self) -> Result<Vec<Item>, PersistenceError> {
        let value: Option<String> = match self.conn.query_row(
            "SELECT value FROM kv_slots WHERE key = ?1",
            params![SLOT_KEY],
            |row| row.get(0),
        ) {
            Ok(v) => Some(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(PersistenceError::Storage(e.to_string())),
        };

        match value {
            None => Ok(Vec::new()),
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| PersistenceError::Serialization(e.to_string())),
        }
    }

    /// Serializes and overwrites the slot with the full given list.
    ///
    /// On failure the caller must not assume in-memory and durable state are
    /// in sync; re-load to recover the authoritative list.
    fn save(&mut self, items: &[Item]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(items)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;

        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![SLOT_KEY, json, Self::now_ms()],
            )
            .map_err(|e| PersistenceError::Storage(e.to_string()))?;

        Ok(())
    }
}
