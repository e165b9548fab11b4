//! List Controller for ReadLater.
//!
//! Implements `ListControllerTrait` — enforces every business rule (capacity,
//! URL deduplication, id generation) before a mutation reaches the item
//! store, and mediates the host's active-tab lookup and tab opening.
//!
//! The controller carries no internal list state: each operation takes the
//! authoritative list from the caller and returns the new list, so it reads
//! as a pure validate → transform → persist pipeline. Either the rules pass
//! and both the returned and persisted lists reflect the change, or they fail
//! and neither does.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::host::HostEnvironment;
use crate::managers::item_store::{ItemStore, ItemStoreTrait};
use crate::types::errors::{AddError, PersistenceError};
use crate::types::item::Item;

/// Hard cap on the number of saved items.
pub const MAX_ITEMS: usize = 100;

/// Active-tab info after display fallbacks are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    pub title: String,
    pub url: String,
}

/// Trait defining list controller operations.
pub trait ListControllerTrait {
    fn get_current_page(&self) -> ResolvedPage;
    fn add_current_page(&mut self, current: &[Item]) -> Result<Vec<Item>, AddError>;
    fn remove_item(&mut self, current: &[Item], id: &str) -> Result<Vec<Item>, PersistenceError>;
    fn open_item(&self, url: &str);
}

/// List controller wired to an item store and an injected host capability.
pub struct ListController<'a> {
    store: ItemStore<'a>,
    host: &'a dyn HostEnvironment,
}

impl<'a> ListController<'a> {
    /// Creates a new `ListController` over the given store and host.
    pub fn new(store: ItemStore<'a>, host: &'a dyn HostEnvironment) -> Self {
        Self { store, host }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Generates a fresh item id. Collisions are overwhelmingly improbable
    /// and not checked against existing ids.
    fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

impl<'a> ListControllerTrait for ListController<'a> {
    /// Resolves the currently active page, falling back to `"Untitled"` for a
    /// missing title and `""` for a missing URL.
    fn get_current_page(&self) -> ResolvedPage {
        let page = self.host.query_active_tab();
        ResolvedPage {
            title: page.title.unwrap_or_else(|| "Untitled".to_string()),
            url: page.url.unwrap_or_default(),
        }
    }

    /// Saves the currently active page at the front of the list.
    ///
    /// Validation short-circuits before any state change: a full list fails
    /// with `LimitReached` and an already-saved URL with `Duplicate`, neither
    /// touching the store. Returns the new list on success.
    fn add_current_page(&mut self, current: &[Item]) -> Result<Vec<Item>, AddError> {
        if current.len() >= MAX_ITEMS {
            return Err(AddError::LimitReached);
        }

        let page = self.get_current_page();

        if current.iter().any(|item| item.url == page.url) {
            return Err(AddError::Duplicate(page.url));
        }

        let item = Item {
            id: Self::generate_id(),
            title: page.title,
            url: page.url,
            created_at: Self::now_ms(),
        };

        // Newest-first: prepend
        let mut updated = Vec::with_capacity(current.len() + 1);
        updated.push(item);
        updated.extend_from_slice(current);

        self.store
            .save(&updated)
            .map_err(|e| AddError::PersistenceFailed(e.to_string()))?;

        Ok(updated)
    }

    /// Removes the item with the given id, persisting the result.
    ///
    /// An absent id is idempotent, not an error: the returned list equals
    /// the input.
    fn remove_item(&mut self, current: &[Item], id: &str) -> Result<Vec<Item>, PersistenceError> {
        let updated: Vec<Item> = current
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();

        self.store.save(&updated)?;
        Ok(updated)
    }

    /// Asks the host to open the URL in a new tab. Fire-and-forget; no
    /// validation of URL well-formedness.
    fn open_item(&self, url: &str) {
        self.host.open_tab(url);
    }
}
