//! ReadLater — a read-it-later side panel core.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod host;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod types;
