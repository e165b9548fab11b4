use std::fmt;

// === PersistenceError ===

/// Errors raised by the item store when the durable slot cannot be read or written.
#[derive(Debug)]
pub enum PersistenceError {
    /// The underlying storage rejected the read or write.
    Storage(String),
    /// The stored list could not be serialized or deserialized.
    Serialization(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Storage(msg) => write!(f, "Item store storage error: {}", msg),
            PersistenceError::Serialization(msg) => {
                write!(f, "Item store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

// === AddError ===

/// Errors raised when adding the current page to the list.
///
/// Each variant identifies which rule was violated so the panel UI can
/// report the failure as a blocking notification.
#[derive(Debug)]
pub enum AddError {
    /// The list already holds the maximum number of items.
    LimitReached,
    /// An item with the same URL is already saved.
    Duplicate(String),
    /// The store write failed; in-memory and durable state may diverge.
    PersistenceFailed(String),
}

impl fmt::Display for AddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddError::LimitReached => {
                write!(f, "List limit reached: remove items before adding more")
            }
            AddError::Duplicate(url) => write!(f, "URL already saved: {}", url),
            AddError::PersistenceFailed(msg) => write!(f, "Failed to persist list: {}", msg),
        }
    }
}

impl std::error::Error for AddError {}
