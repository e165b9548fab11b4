use readlater::types::errors::*;

// === PersistenceError Tests ===

#[test]
fn persistence_error_storage_display() {
    let err = PersistenceError::Storage("disk full".to_string());
    assert_eq!(err.to_string(), "Item store storage error: disk full");
}

#[test]
fn persistence_error_serialization_display() {
    let err = PersistenceError::Serialization("unexpected token".to_string());
    assert_eq!(
        err.to_string(),
        "Item store serialization error: unexpected token"
    );
}

#[test]
fn persistence_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(PersistenceError::Storage("quota exceeded".to_string()));
    assert!(err.source().is_none());
}

// === AddError Tests ===

#[test]
fn add_error_limit_reached_display() {
    let err = AddError::LimitReached;
    assert_eq!(
        err.to_string(),
        "List limit reached: remove items before adding more"
    );
}

#[test]
fn add_error_duplicate_display() {
    let err = AddError::Duplicate("https://example.com".to_string());
    assert_eq!(err.to_string(), "URL already saved: https://example.com");
}

#[test]
fn add_error_persistence_failed_display() {
    let err = AddError::PersistenceFailed("write rejected".to_string());
    assert_eq!(err.to_string(), "Failed to persist list: write rejected");
}

#[test]
fn add_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(AddError::LimitReached);
    assert!(err.source().is_none());
}
