//! App Core for CozyTab.
//!
//! Central struct holding the navigation store, managers, settings and the
//! persistence backend. Each intent applies one mutation and then mirrors the
//! affected records into the key-value store.

use std::path::Path;

use tracing::{debug, info};

use crate::database::{Database, KeyValueStore, MemoryStore, SqliteStore};
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::workspace_manager::{WorkspaceManager, WorkspaceManagerTrait};
use crate::services::clock::ClockSnapshot;
use crate::services::persistence::{self, BOOKMARKS_KEY, HISTORY_KEY, PROFESSION_KEY, SEEN_PROMPT_KEY, SETTINGS_KEY};
use crate::services::quick_links::{self, QuickLink};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::url_resolver;
use crate::types::errors::{BookmarkError, HistoryError, NavigationError, ProfileError, SettingsError};

/// Central application struct holding all state and the store it is mirrored to.
pub struct App {
    store: Box<dyn KeyValueStore>,
    pub workspaces: WorkspaceManager,
    pub history: HistoryManager,
    pub bookmarks: BookmarkManager,
    pub settings: SettingsEngine,
    profession: Option<String>,
    seen_prompt: bool,
    clock: ClockSnapshot,
}

impl App {
    /// Opens the SQLite database at `db_path` and restores the saved state.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, rusqlite::Error> {
        let db = Database::open(db_path.as_ref())?;
        info!(path = %db_path.as_ref().display(), "opened state database");
        Ok(Self::with_store(Box::new(SqliteStore::new(db))))
    }

    /// An app whose state lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Restores the saved state from `store` and keeps mirroring into it.
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        let loaded = persistence::load_all(store.as_ref());
        Self {
            store,
            workspaces: loaded.workspaces,
            history: HistoryManager::from_entries(loaded.history),
            bookmarks: BookmarkManager::from_bookmarks(loaded.bookmarks),
            settings: SettingsEngine::new(loaded.settings),
            profession: loaded.profession,
            seen_prompt: loaded.seen_prompt,
            clock: ClockSnapshot::now(),
        }
    }

    fn persist_workspaces(&self) {
        persistence::persist_workspaces(self.store.as_ref(), &self.workspaces);
    }

    fn persist_history(&self) {
        persistence::persist(self.store.as_ref(), HISTORY_KEY, self.history.list());
    }

    fn persist_bookmarks(&self) {
        persistence::persist(self.store.as_ref(), BOOKMARKS_KEY, self.bookmarks.list());
    }

    fn persist_settings(&self) {
        persistence::persist(self.store.as_ref(), SETTINGS_KEY, self.settings.get_settings());
    }

    // ─── Navigation ───

    /// Navigates the active tab and appends the visit to the browsing log.
    pub fn navigate(&mut self, url: &str) -> Result<(), NavigationError> {
        self.workspaces.navigate(url)?;
        self.history.record_visit(url);
        self.persist_workspaces();
        self.persist_history();
        Ok(())
    }

    /// Resolves address-bar input with the configured search engine, then navigates.
    ///
    /// Returns the resolved URL, or `None` for blank input.
    pub fn submit_query(&mut self, query: &str) -> Result<Option<String>, NavigationError> {
        let Some(url) = url_resolver::resolve_query(query, self.settings.search_engine()) else {
            return Ok(None);
        };
        self.navigate(&url)?;
        Ok(Some(url))
    }

    pub fn go_back(&mut self) -> bool {
        let moved = self.workspaces.go_back();
        if moved {
            self.persist_workspaces();
        }
        moved
    }

    pub fn go_forward(&mut self) -> bool {
        let moved = self.workspaces.go_forward();
        if moved {
            self.persist_workspaces();
        }
        moved
    }

    pub fn go_home(&mut self) {
        self.workspaces.go_home();
        self.persist_workspaces();
    }

    pub fn open_tab(&mut self) -> String {
        let id = self.workspaces.open_tab();
        self.persist_workspaces();
        id
    }

    pub fn close_tab(&mut self, tab_id: &str) -> Result<(), NavigationError> {
        self.workspaces.close_tab(tab_id)?;
        self.persist_workspaces();
        Ok(())
    }

    pub fn select_tab(&mut self, tab_id: &str) -> Result<(), NavigationError> {
        self.workspaces.select_tab(tab_id)?;
        self.persist_workspaces();
        Ok(())
    }

    pub fn set_tab_title(&mut self, title: &str) {
        self.workspaces.set_active_tab_title(title);
        self.persist_workspaces();
    }

    // ─── Workspaces ───

    pub fn create_workspace(&mut self, name: &str) -> Result<String, NavigationError> {
        let id = self.workspaces.create_workspace(name)?;
        self.persist_workspaces();
        Ok(id)
    }

    /// Returns `Ok(false)` when the workspace is the last one and was kept.
    pub fn delete_workspace(&mut self, workspace_id: &str) -> Result<bool, NavigationError> {
        let deleted = self.workspaces.delete_workspace(workspace_id)?;
        if deleted {
            self.persist_workspaces();
        } else {
            debug!(workspace = workspace_id, "refused to delete the last workspace");
        }
        Ok(deleted)
    }

    pub fn switch_workspace(&mut self, workspace_id: &str) -> Result<(), NavigationError> {
        self.workspaces.switch_workspace(workspace_id)?;
        self.persist_workspaces();
        Ok(())
    }

    // ─── Bookmarks ───

    pub fn add_bookmark(&mut self, title: &str, url: &str) -> Result<String, BookmarkError> {
        let id = self.bookmarks.add_bookmark(title, url)?;
        self.persist_bookmarks();
        Ok(id)
    }

    pub fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError> {
        self.bookmarks.remove_bookmark(id)?;
        self.persist_bookmarks();
        Ok(())
    }

    // ─── Browsing log ───

    pub fn clear_history(&mut self) {
        self.history.clear_all();
        self.persist_history();
    }

    pub fn delete_history_entry(&mut self, id: &str) -> Result<(), HistoryError> {
        self.history.delete_entry(id)?;
        self.persist_history();
        Ok(())
    }

    // ─── Settings ───

    pub fn update_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings.set_value(key, value)?;
        self.persist_settings();
        Ok(())
    }

    pub fn reset_settings(&mut self) {
        self.settings.reset();
        self.persist_settings();
    }

    // ─── First run ───

    /// True until a profession has been chosen once.
    pub fn needs_profession_prompt(&self) -> bool {
        !self.seen_prompt
    }

    pub fn profession(&self) -> Option<&str> {
        self.profession.as_deref()
    }

    /// Stores the chosen profession and marks the first-run prompt as done.
    pub fn select_profession(&mut self, profession: &str) -> Result<(), ProfileError> {
        let profession = profession.trim();
        if profession.is_empty() {
            return Err(ProfileError::EmptyProfession);
        }
        self.profession = Some(profession.to_string());
        self.seen_prompt = true;
        persistence::persist(self.store.as_ref(), PROFESSION_KEY, profession);
        persistence::persist(self.store.as_ref(), SEEN_PROMPT_KEY, &true);
        Ok(())
    }

    pub fn quick_links(&self) -> Vec<QuickLink> {
        quick_links::links_for(self.profession())
    }

    // ─── Clock ───

    /// Refreshes the clock snapshot. Driven by a ~1 Hz timer.
    pub fn tick(&mut self, now: ClockSnapshot) {
        self.clock = now;
    }

    pub fn clock(&self) -> &ClockSnapshot {
        &self.clock
    }
}
