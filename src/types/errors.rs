use thiserror::Error;

// === NavigationError ===

/// Errors raised by the navigation state store (tabs, per-tab history, workspaces).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// No tab with the given ID exists in the current workspace.
    #[error("Tab not found: {0}")]
    TabNotFound(String),
    /// No workspace with the given ID exists.
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(String),
    /// Navigation was requested with a blank target.
    #[error("Navigation target is empty")]
    EmptyUrl,
    /// A workspace name was blank after trimming.
    #[error("Workspace name is empty")]
    EmptyName,
}

// === BookmarkError ===

/// Errors related to bookmark management operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    #[error("Bookmark not found: {0}")]
    NotFound(String),
    /// Title or URL was blank after trimming.
    #[error("Invalid bookmark: {0}")]
    InvalidInput(String),
}

// === HistoryError ===

/// Errors related to the global browsing log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// History entry with the given ID was not found.
    #[error("History entry not found: {0}")]
    NotFound(String),
}

// === SettingsError ===

/// Errors related to the settings record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The key does not name a setting.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The value does not fit the setting's type or allowed values.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
    /// The settings record could not be (de)serialized.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
}

// === ProfileError ===

/// Errors raised by the first-run profession prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The profession was blank after trimming.
    #[error("Profession is empty")]
    EmptyProfession,
}

// === StorageError ===

/// Errors from the key-value persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite operation failed.
    #[error("Storage database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// A record could not be encoded as JSON.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The in-memory store's lock was poisoned.
    #[error("Storage lock poisoned")]
    Poisoned,
}
