//! ReadLater — a read-it-later side panel core.
//!
//! Entry point: interactive console demo walking each component. The
//! production surface is the `readlater-rpc` binary, which speaks
//! newline-delimited JSON-RPC with the panel shell.

use readlater::host::{HostEnvironment, PageInfo};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               ReadLater v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║     Read-it-later side panel core with durable storage      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_item_store();
    demo_list_controller();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("  ReadLater is ready for panel shell integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

/// Host stand-in for the demo: a fixed active page, opens printed to stdout.
struct ScriptedHost {
    page: PageInfo,
}

impl HostEnvironment for ScriptedHost {
    fn query_active_tab(&self) -> PageInfo {
        self.page.clone()
    }

    fn open_tab(&self, url: &str) {
        println!("  (host) open tab: {}", url);
    }
}

fn demo_database() {
    use readlater::database::connection::Database;
    use readlater::database::migrations;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let version = migrations::get_schema_version(db.connection());
    println!("  Schema version: {}", version);
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_item_store() {
    use readlater::database::connection::Database;
    use readlater::managers::item_store::{ItemStore, ItemStoreTrait};
    use readlater::types::item::Item;
    section("Item Store");

    let db = Database::open_in_memory().expect("Failed to open database");
    let mut store = ItemStore::new(db.connection());

    let empty = store.load().expect("load should succeed");
    println!("  Fresh slot loads as empty list: {} items", empty.len());

    let item = Item {
        id: "demo-1".to_string(),
        title: "Example".to_string(),
        url: "https://example.com".to_string(),
        created_at: 0,
    };
    store.save(&[item]).expect("save should succeed");
    let loaded = store.load().expect("load should succeed");
    println!("  Saved and re-loaded: {} item(s), first = {}", loaded.len(), loaded[0].title);
    println!("  ✓ Item store OK");
    println!();
}

fn demo_list_controller() {
    use readlater::database::connection::Database;
    use readlater::managers::item_store::ItemStore;
    use readlater::managers::list_controller::{ListController, ListControllerTrait};
    section("List Controller");

    let db = Database::open_in_memory().expect("Failed to open database");
    let host = ScriptedHost {
        page: PageInfo {
            title: Some("Rust Programming Language".to_string()),
            url: Some("https://rust-lang.org".to_string()),
        },
    };

    let mut controller = ListController::new(ItemStore::new(db.connection()), &host);
    let list = controller
        .add_current_page(&[])
        .expect("first add should succeed");
    println!("  Added current page: {} ({})", list[0].title, list[0].url);

    let dup = controller.add_current_page(&list);
    println!("  Second add rejected: {}", dup.unwrap_err());

    controller.open_item(&list[0].url);

    let list = controller
        .remove_item(&list, &list[0].id.clone())
        .expect("remove should succeed");
    println!("  Removed by id, {} item(s) left", list.len());
    println!("  ✓ List controller OK");
    println!();
}
