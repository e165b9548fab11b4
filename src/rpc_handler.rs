//! RPC method handler for the ReadLater JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! item store and list controller via the `App` struct.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::item_store::{ItemStore, ItemStoreTrait};
use crate::managers::list_controller::{ListController, ListControllerTrait};

use serde_json::{json, Value};

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Every list-mutating method re-loads the authoritative list from the store
/// before applying the controller's rules, and answers with the new list so
/// the panel UI can render it directly.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message
/// identifying which rule was violated.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "items.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let store = ItemStore::new(a.db.connection());
            let items = store.load().map_err(|e| e.to_string())?;
            serde_json::to_value(items).map_err(|e| e.to_string())
        }
        "panel.addCurrent" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let current = ItemStore::new(conn).load().map_err(|e| e.to_string())?;
            let mut controller = ListController::new(ItemStore::new(conn), a.host.as_ref());
            let updated = controller
                .add_current_page(&current)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(updated).map_err(|e| e.to_string())
        }
        "items.remove" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let current = ItemStore::new(conn).load().map_err(|e| e.to_string())?;
            let mut controller = ListController::new(ItemStore::new(conn), a.host.as_ref());
            let updated = controller
                .remove_item(&current, id)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(updated).map_err(|e| e.to_string())
        }
        "items.open" => {
            let url = params
                .get("url")
                .and_then(|v| v.as_str())
                .ok_or("missing url")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let controller = ListController::new(ItemStore::new(conn), a.host.as_ref());
            controller.open_item(url);
            Ok(json!({"ok": true}))
        }
        _ => Err(format!("unknown method: {}", method)),
    }
}
