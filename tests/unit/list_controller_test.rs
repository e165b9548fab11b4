//! Unit tests for the ListController public API.
//!
//! These tests exercise capacity enforcement, URL deduplication, id
//! generation, page resolution fallbacks, and persistence propagation
//! through the `ListControllerTrait` interface, using an in-memory SQLite
//! database and a fake host environment.

use std::sync::Mutex;

use rstest::rstest;

use readlater::database::Database;
use readlater::host::{HostEnvironment, PageInfo};
use readlater::managers::item_store::{ItemStore, ItemStoreTrait};
use readlater::managers::list_controller::{ListController, ListControllerTrait, MAX_ITEMS};
use readlater::types::errors::AddError;
use readlater::types::item::Item;

/// Fake host: a fixed active page, opened URLs recorded for assertions.
struct FakeHost {
    page: PageInfo,
    opened: Mutex<Vec<String>>,
}

impl FakeHost {
    fn with_page(title: Option<&str>, url: Option<&str>) -> Self {
        Self {
            page: PageInfo {
                title: title.map(String::from),
                url: url.map(String::from),
            },
            opened: Mutex::new(Vec::new()),
        }
    }
}

impl HostEnvironment for FakeHost {
    fn query_active_tab(&self) -> PageInfo {
        self.page.clone()
    }

    fn open_tab(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

fn item(id: &str, url: &str) -> Item {
    Item {
        id: id.to_string(),
        title: format!("Page {}", id),
        url: url.to_string(),
        created_at: 1_700_000_000_000,
    }
}

fn full_list() -> Vec<Item> {
    (0..MAX_ITEMS)
        .map(|i| item(&format!("id-{}", i), &format!("https://site{}.example", i)))
        .collect()
}

// === get_current_page ===

/// Missing title falls back to "Untitled"; missing URL falls back to "".
#[rstest]
#[case(Some("Example"), Some("https://example.com"), "Example", "https://example.com")]
#[case(None, Some("https://example.com"), "Untitled", "https://example.com")]
#[case(Some("Example"), None, "Example", "")]
#[case(None, None, "Untitled", "")]
fn test_current_page_fallbacks(
    #[case] title: Option<&str>,
    #[case] url: Option<&str>,
    #[case] expected_title: &str,
    #[case] expected_url: &str,
) {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(title, url);
    let controller = ListController::new(ItemStore::new(db.connection()), &host);

    let page = controller.get_current_page();
    assert_eq!(page.title, expected_title);
    assert_eq!(page.url, expected_url);
}

// === add_current_page ===

/// Adding to an empty list yields exactly one item carrying the resolved page.
#[test]
fn test_add_to_empty_list() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(Some("Example"), Some("https://example.com"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let list = controller.add_current_page(&[]).unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Example");
    assert_eq!(list[0].url, "https://example.com");
    assert!(!list[0].id.is_empty());
    assert!(list[0].created_at > 0);
}

/// New items land at index 0 (newest-first) and existing order is preserved.
#[test]
fn test_add_prepends_newest_first() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(Some("New"), Some("https://new.example"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let existing = vec![item("a", "https://a.example"), item("b", "https://b.example")];
    let list = controller.add_current_page(&existing).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0].url, "https://new.example");
    assert_eq!(list[1].id, "a");
    assert_eq!(list[2].id, "b");
}

/// A successful add persists the new list; the store reflects it on re-load.
#[test]
fn test_add_persists_new_list() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(Some("Example"), Some("https://example.com"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let list = controller.add_current_page(&[]).unwrap();

    let persisted = ItemStore::new(db.connection()).load().unwrap();
    assert_eq!(persisted, list);
}

/// Adding an already-saved URL fails with Duplicate and writes nothing,
/// regardless of title.
#[test]
fn test_add_duplicate_url_is_rejected_without_store_write() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(Some("A Different Title"), Some("https://example.com"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let existing = vec![item("a", "https://example.com")];
    match controller.add_current_page(&existing) {
        Err(AddError::Duplicate(url)) => assert_eq!(url, "https://example.com"),
        other => panic!("expected Duplicate, got {:?}", other),
    }

    // No store write happened: the slot is still absent.
    assert!(ItemStore::new(db.connection()).load().unwrap().is_empty());
}

/// A list at the cap rejects any add with LimitReached, before page resolution.
#[test]
fn test_add_at_capacity_is_rejected_without_store_write() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(Some("One Past"), Some("https://fresh.example"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let existing = full_list();
    match controller.add_current_page(&existing) {
        Err(AddError::LimitReached) => {}
        other => panic!("expected LimitReached, got {:?}", other),
    }

    assert!(ItemStore::new(db.connection()).load().unwrap().is_empty());
}

/// At length 99 the add still succeeds, landing exactly on the cap.
#[test]
fn test_add_fills_to_capacity() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(Some("Last"), Some("https://fresh.example"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let mut existing = full_list();
    existing.pop();
    let list = controller.add_current_page(&existing).unwrap();
    assert_eq!(list.len(), MAX_ITEMS);
}

/// Two adds of distinct pages produce distinct ids.
#[test]
fn test_generated_ids_are_unique() {
    let db = Database::open_in_memory().unwrap();

    let host_a = FakeHost::with_page(Some("A"), Some("https://a.example"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host_a);
    let list = controller.add_current_page(&[]).unwrap();

    let host_b = FakeHost::with_page(Some("B"), Some("https://b.example"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host_b);
    let list = controller.add_current_page(&list).unwrap();

    assert_ne!(list[0].id, list[1].id);
}

/// An empty resolved URL dedups against an existing empty-URL item like any
/// other URL.
#[test]
fn test_empty_url_dedups_against_empty_url() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(Some("No URL"), None);
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let existing = vec![item("a", "")];
    match controller.add_current_page(&existing) {
        Err(AddError::Duplicate(url)) => assert_eq!(url, ""),
        other => panic!("expected Duplicate, got {:?}", other),
    }
}

/// A failed store write surfaces as PersistenceFailed; the durable state is
/// known-divergent and must be re-loaded, never trusted.
#[test]
fn test_add_with_failed_save_is_persistence_failed() {
    let db = Database::open_in_memory().unwrap();
    db.connection().execute_batch("DROP TABLE kv_slots").unwrap();

    let host = FakeHost::with_page(Some("Example"), Some("https://example.com"));
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    match controller.add_current_page(&[]) {
        Err(AddError::PersistenceFailed(_)) => {}
        other => panic!("expected PersistenceFailed, got {:?}", other),
    }
}

// === remove_item ===

/// Removing an existing id drops exactly that item and persists the result.
#[test]
fn test_remove_existing_item() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(None, None);
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let existing = vec![item("abc", "https://a.example"), item("def", "https://b.example")];
    let list = controller.remove_item(&existing, "abc").unwrap();

    assert_eq!(list.len(), 1);
    assert!(list.iter().all(|i| i.id != "abc"));
    assert_eq!(ItemStore::new(db.connection()).load().unwrap(), list);
}

/// Removing an absent id returns a list equal to the input.
#[test]
fn test_remove_absent_id_is_noop() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(None, None);
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let existing = vec![item("a", "https://a.example")];
    let list = controller.remove_item(&existing, "nope").unwrap();
    assert_eq!(list, existing);
}

/// Removing twice with the same id is equivalent to removing once.
#[test]
fn test_remove_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(None, None);
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let existing = vec![item("a", "https://a.example"), item("b", "https://b.example")];
    let once = controller.remove_item(&existing, "a").unwrap();
    let twice = controller.remove_item(&once, "a").unwrap();
    assert_eq!(once, twice);
}

/// A failed store write during remove propagates the persistence error.
#[test]
fn test_remove_with_failed_save_propagates_error() {
    let db = Database::open_in_memory().unwrap();
    db.connection().execute_batch("DROP TABLE kv_slots").unwrap();

    let host = FakeHost::with_page(None, None);
    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);

    let existing = vec![item("a", "https://a.example")];
    assert!(controller.remove_item(&existing, "a").is_err());
}

// === open_item ===

/// open_item forwards the URL to the host, unvalidated.
#[test]
fn test_open_item_forwards_url_to_host() {
    let db = Database::open_in_memory().unwrap();
    let host = FakeHost::with_page(None, None);
    let controller = ListController::new(ItemStore::new(db.connection()), &host);

    controller.open_item("https://example.com");
    controller.open_item("not a url");

    let opened = host.opened.lock().unwrap();
    assert_eq!(opened.as_slice(), ["https://example.com", "not a url"]);
}
