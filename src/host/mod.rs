//! Host environment capabilities consumed by the list controller.
//!
//! The controller never talks to a browser shell directly; it receives these
//! capabilities by injection so it can be tested without a live host.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::json;

/// Raw active-tab information as reported by the host.
///
/// Either field may be absent; the controller applies the display fallbacks.
#[derive(Debug, Clone, Default)]
pub struct PageInfo {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// Capabilities the host environment provides to the core.
pub trait HostEnvironment: Send + Sync {
    /// Returns the currently active, currently focused page. Read-only,
    /// no side effects on the host.
    fn query_active_tab(&self) -> PageInfo;

    /// Opens the given URL in a new tab. Fire-and-forget; the host is
    /// responsible for handling malformed URLs.
    fn open_tab(&self, url: &str);
}

/// Host bridge for the stdio RPC transport.
///
/// The panel shell pushes `tab.active` notifications which update the cached
/// page info; `open_tab` emits an `openTab` event on stdout for the shell to
/// act on.
pub struct StdioHost {
    active: Mutex<PageInfo>,
}

impl StdioHost {
    pub fn new() -> Self {
        Self {
            active: Mutex::new(PageInfo::default()),
        }
    }

    /// Records the host's latest active-tab report.
    pub fn set_active_tab(&self, page: PageInfo) {
        if let Ok(mut active) = self.active.lock() {
            *active = page;
        }
    }
}

impl Default for StdioHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEnvironment for StdioHost {
    fn query_active_tab(&self) -> PageInfo {
        self.active
            .lock()
            .map(|active| active.clone())
            .unwrap_or_default()
    }

    fn open_tab(&self, url: &str) {
        let event = json!({"event": "openTab", "url": url});
        println!("{}", event);
        let _ = io::stdout().flush();
    }
}
