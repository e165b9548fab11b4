//! App Core for ReadLater.
//!
//! Central struct holding the database and the injected host capability.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::host::HostEnvironment;

/// Central application struct.
///
/// ItemStore and ListController are created on-demand via `db.connection()`
/// because they borrow the connection with a lifetime parameter.
pub struct App {
    pub db: Arc<Database>,
    pub host: Arc<dyn HostEnvironment>,
}

impl App {
    /// Creates a new App over a database at the given path.
    ///
    /// ItemStore and ListController are not stored directly because they
    /// borrow `&Connection` with a lifetime. Use `db.connection()` to create
    /// them on demand via `ItemStore::new(app.db.connection())`.
    pub fn new(
        db_path: &str,
        host: Arc<dyn HostEnvironment>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        Ok(Self { db, host })
    }

    /// Creates a new App over an in-memory database. Useful for testing.
    pub fn open_in_memory(
        host: Arc<dyn HostEnvironment>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);
        Ok(Self { db, host })
    }
}
