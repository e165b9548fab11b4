//! ReadLater RPC Server — JSON-RPC over stdin/stdout for the side panel shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"panel.addCurrent", "params":{}}
//! Response: {"id":1, "result":[...]} or {"id":1, "error":"..."}
//!
//! The shell pushes `tab.active` notifications carrying the active tab's
//! title and URL; the core caches them for `panel.addCurrent`. Tab opens are
//! emitted back as `{"event":"openTab","url":"..."}` lines.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use readlater::app::App;
use readlater::host::{PageInfo, StdioHost};
use readlater::platform;
use readlater::rpc_handler::handle_method;

use serde_json::{json, Value};

fn main() {
    // Prefer READLATER_DATA_DIR, fallback to the platform data directory
    let data_dir = match std::env::var("READLATER_DATA_DIR") {
        Ok(dir) => std::path::PathBuf::from(dir),
        Err(_) => platform::get_data_dir(),
    };
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("failed to create data directory {}: {}", data_dir.display(), e);
        std::process::exit(1);
    }
    let db_path = data_dir.join("readlater.db");

    let host = Arc::new(StdioHost::new());
    let app = Mutex::new(
        App::new(db_path.to_str().unwrap_or("readlater.db"), host.clone())
            .expect("Failed to initialize ReadLater"),
    );

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().unwrap();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}",e)});
                println!("{}", err);
                io::stdout().flush().unwrap();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        // Active-tab pushes are transport-level: they update the host bridge
        // directly instead of going through the method dispatcher.
        if method == "tab.active" {
            host.set_active_tab(PageInfo {
                title: params
                    .get("title")
                    .and_then(|v| v.as_str())
                    .map(String::from),
                url: params.get("url").and_then(|v| v.as_str()).map(String::from),
            });
            println!("{}", json!({"id": id, "result": {"ok": true}}));
            io::stdout().flush().unwrap();
            continue;
        }

        let result = handle_method(&app, method, &params);

        let response = match result {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        println!("{}", response);
        io::stdout().flush().unwrap();
    }
}
