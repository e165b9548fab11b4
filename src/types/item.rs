use serde::{Deserialize, Serialize};

/// Represents one saved read-it-later entry.
///
/// Serialized with camelCase field names so the persisted JSON layout
/// matches what the panel UI consumes (`createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque unique identifier, generated at creation and never mutated.
    /// The sole identity key for removal.
    pub id: String,
    /// Display title; `"Untitled"` when the source page has none.
    pub title: String,
    /// Absolute URL of the saved page. Deduplication key (exact string equality).
    pub url: String,
    /// Creation time in milliseconds since epoch. Display only, never identity.
    pub created_at: i64,
}
