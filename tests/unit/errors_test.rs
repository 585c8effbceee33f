//! Unit tests for error display strings and conversions.

use cozytab::types::errors::*;

#[test]
fn test_navigation_error_display() {
    assert_eq!(
        NavigationError::TabNotFound("t1".to_string()).to_string(),
        "Tab not found: t1"
    );
    assert_eq!(
        NavigationError::WorkspaceNotFound("w1".to_string()).to_string(),
        "Workspace not found: w1"
    );
    assert_eq!(NavigationError::EmptyUrl.to_string(), "Navigation target is empty");
    assert_eq!(NavigationError::EmptyName.to_string(), "Workspace name is empty");
}

#[test]
fn test_bookmark_error_display() {
    assert_eq!(
        BookmarkError::NotFound("b1".to_string()).to_string(),
        "Bookmark not found: b1"
    );
    assert_eq!(
        BookmarkError::InvalidInput("title is empty".to_string()).to_string(),
        "Invalid bookmark: title is empty"
    );
}

#[test]
fn test_history_error_display() {
    assert_eq!(
        HistoryError::NotFound("h1".to_string()).to_string(),
        "History entry not found: h1"
    );
}

#[test]
fn test_settings_error_display() {
    assert_eq!(
        SettingsError::InvalidKey("nope".to_string()).to_string(),
        "Invalid settings key: nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("bad".to_string()).to_string(),
        "Invalid settings value: bad"
    );
    assert_eq!(
        SettingsError::SerializationError("boom".to_string()).to_string(),
        "Settings serialization error: boom"
    );
}

#[test]
fn test_profile_error_display() {
    assert_eq!(ProfileError::EmptyProfession.to_string(), "Profession is empty");
}

#[test]
fn test_storage_error_from_serde() {
    let err: StorageError = serde_json::from_str::<Vec<String>>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, StorageError::Serialization(_)));
    assert!(err.to_string().starts_with("Storage serialization error:"));
}

#[test]
fn test_storage_error_from_rusqlite() {
    let err: StorageError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StorageError::Database(_)));
    assert!(err.to_string().starts_with("Storage database error:"));
}
