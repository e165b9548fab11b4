// ReadLater managers
// The item store owns durable whole-list persistence; the list controller
// enforces every business rule before a mutation reaches the store.

pub mod item_store;
pub mod list_controller;
