//! Persistence adapter: mirrors the in-memory state tree into a key-value store.
//!
//! Each record is JSON under its own key. Loading never fails: a missing record
//! yields the default and a malformed one is logged and replaced by the default.
//! Saving is best-effort; callers log and move on.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::database::KeyValueStore;
use crate::managers::workspace_manager::WorkspaceManager;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StorageError;
use crate::types::history::HistoryItem;
use crate::types::settings::{is_known_theme, AppSettings, DEFAULT_THEME};
use crate::types::workspace::StoredWorkspace;

pub const PROFESSION_KEY: &str = "cozytab_profession";
pub const WORKSPACES_KEY: &str = "cozytab_workspaces";
pub const CURRENT_WORKSPACE_KEY: &str = "cozytab_current_workspace";
pub const BOOKMARKS_KEY: &str = "cozytab_bookmarks";
pub const HISTORY_KEY: &str = "cozytab_history";
pub const SETTINGS_KEY: &str = "cozytab_settings";
pub const SEEN_PROMPT_KEY: &str = "cozytab_seen_prompt";

/// Everything read back from the store on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    pub profession: Option<String>,
    pub workspaces: WorkspaceManager,
    pub bookmarks: Vec<Bookmark>,
    pub history: Vec<HistoryItem>,
    pub settings: AppSettings,
    pub seen_prompt: bool,
}

/// Reads and decodes one record. Missing, unreadable and malformed records all yield `None`.
pub fn load_record<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read record, using default");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "malformed record, using default");
            None
        }
    }
}

/// Encodes and writes one record.
pub fn save_record<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Writes one record, logging instead of returning a failure.
pub fn persist<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    if let Err(e) = save_record(store, key, value) {
        warn!(key, error = %e, "failed to persist record");
    }
}

/// Restores the navigation store, applying the per-tab history migration.
pub fn load_workspaces(store: &dyn KeyValueStore) -> WorkspaceManager {
    let stored: Vec<StoredWorkspace> = load_record(store, WORKSPACES_KEY).unwrap_or_default();
    let current: Option<String> = load_record(store, CURRENT_WORKSPACE_KEY);
    WorkspaceManager::from_stored(stored, current.as_deref())
}

/// Restores the settings record. An unknown theme id falls back to the default theme.
pub fn load_settings(store: &dyn KeyValueStore) -> AppSettings {
    let mut settings: AppSettings = load_record(store, SETTINGS_KEY).unwrap_or_default();
    if !is_known_theme(&settings.theme) {
        warn!(theme = %settings.theme, "unknown theme, using default");
        settings.theme = DEFAULT_THEME.to_string();
    }
    settings
}

/// Restores the profession. Accepts both JSON strings and legacy raw values.
pub fn load_profession(store: &dyn KeyValueStore) -> Option<String> {
    let raw = match store.get(PROFESSION_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(key = PROFESSION_KEY, error = %e, "failed to read record");
            return None;
        }
    };
    let profession = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    let profession = profession.trim();
    (!profession.is_empty()).then(|| profession.to_string())
}

/// Loads every record.
pub fn load_all(store: &dyn KeyValueStore) -> LoadedState {
    LoadedState {
        profession: load_profession(store),
        workspaces: load_workspaces(store),
        bookmarks: load_record(store, BOOKMARKS_KEY).unwrap_or_default(),
        history: load_record(store, HISTORY_KEY).unwrap_or_default(),
        settings: load_settings(store),
        seen_prompt: load_record(store, SEEN_PROMPT_KEY).unwrap_or(false),
    }
}

/// Writes the workspace collection and the current-workspace pointer.
pub fn persist_workspaces(store: &dyn KeyValueStore, workspaces: &WorkspaceManager) {
    persist(store, WORKSPACES_KEY, &workspaces.stored_workspaces());
    persist(store, CURRENT_WORKSPACE_KEY, workspaces.current_workspace_id());
}
