//! Navigation state store for CozyTab.
//!
//! Owns the workspace collection, the current-workspace pointer, and each
//! tab's back/forward history. Every operation acts on the current workspace
//! and, unless a tab id is given, on its active tab.

use tracing::debug;

use crate::services::url_resolver;
use crate::types::errors::NavigationError;
use crate::types::tab::Tab;
use crate::types::workspace::{
    NavigationSnapshot, StoredWorkspace, Workspace, DEFAULT_WORKSPACE_NAME,
};

/// Trait defining the navigation state store interface.
pub trait WorkspaceManagerTrait {
    fn navigate(&mut self, url: &str) -> Result<(), NavigationError>;
    fn go_back(&mut self) -> bool;
    fn go_forward(&mut self) -> bool;
    fn go_home(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn open_tab(&mut self) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), NavigationError>;
    fn select_tab(&mut self, tab_id: &str) -> Result<(), NavigationError>;
    fn set_active_tab_title(&mut self, title: &str);
    fn create_workspace(&mut self, name: &str) -> Result<String, NavigationError>;
    fn delete_workspace(&mut self, workspace_id: &str) -> Result<bool, NavigationError>;
    fn switch_workspace(&mut self, workspace_id: &str) -> Result<(), NavigationError>;
    fn current_workspace(&self) -> &Workspace;
    fn active_tab(&self) -> &Tab;
    fn workspaces(&self) -> &[Workspace];
    fn workspace_count(&self) -> usize;
}

/// In-memory navigation state store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceManager {
    workspaces: Vec<Workspace>,
    current_workspace_id: String,
}

impl WorkspaceManager {
    /// One "Main Workspace" holding one blank tab.
    pub fn new() -> Self {
        let workspace = Workspace::new(DEFAULT_WORKSPACE_NAME);
        Self {
            current_workspace_id: workspace.id.clone(),
            workspaces: vec![workspace],
        }
    }

    /// Rebuilds the store from a persisted collection.
    ///
    /// An empty collection becomes the default one, and a current id that
    /// names no workspace falls back to the first.
    pub fn from_stored(stored: Vec<StoredWorkspace>, current_workspace_id: Option<&str>) -> Self {
        if stored.is_empty() {
            return Self::new();
        }
        let workspaces: Vec<Workspace> = stored
            .into_iter()
            .map(StoredWorkspace::into_workspace)
            .collect();
        let current_workspace_id = current_workspace_id
            .filter(|id| workspaces.iter().any(|w| w.id == *id))
            .map(str::to_string)
            .unwrap_or_else(|| workspaces[0].id.clone());
        Self {
            workspaces,
            current_workspace_id,
        }
    }

    pub fn from_snapshot(snapshot: NavigationSnapshot) -> Self {
        Self::from_stored(snapshot.workspaces, Some(snapshot.current_workspace_id.as_str()))
    }

    /// The persisted shape of the workspace collection.
    pub fn stored_workspaces(&self) -> Vec<StoredWorkspace> {
        self.workspaces
            .iter()
            .map(StoredWorkspace::from_workspace)
            .collect()
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            workspaces: self.stored_workspaces(),
            current_workspace_id: self.current_workspace_id.clone(),
        }
    }

    pub fn current_workspace_id(&self) -> &str {
        &self.current_workspace_id
    }

    pub fn get_workspace(&self, workspace_id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.id == workspace_id)
    }

    fn current_index(&self) -> usize {
        self.workspaces
            .iter()
            .position(|w| w.id == self.current_workspace_id)
            .unwrap_or(0)
    }

    fn current_mut(&mut self) -> &mut Workspace {
        let idx = self.current_index();
        &mut self.workspaces[idx]
    }

    fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        self.current_mut().active_tab_mut()
    }

    /// Refreshes the tab title after its url moved to a non-home entry.
    fn retitle(tab: &mut Tab) {
        if !tab.is_home() {
            tab.title = url_resolver::tab_title(&tab.url);
        }
    }
}

impl Default for WorkspaceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceManagerTrait for WorkspaceManager {
    /// Navigates the active tab to `url`, discarding any forward entries.
    fn navigate(&mut self, url: &str) -> Result<(), NavigationError> {
        if url.trim().is_empty() {
            return Err(NavigationError::EmptyUrl);
        }
        if let Some(tab) = self.active_tab_mut() {
            tab.push_history(url);
            Self::retitle(tab);
            debug!(tab = %tab.id, url, index = ?tab.history_index, "navigated");
        }
        Ok(())
    }

    /// Steps the active tab back one entry. Returns false when already at the start.
    fn go_back(&mut self) -> bool {
        let Some(tab) = self.active_tab_mut() else {
            return false;
        };
        match tab.history_index {
            Some(i) if i > 0 => {
                tab.seek(i - 1);
                Self::retitle(tab);
                true
            }
            _ => false,
        }
    }

    /// Steps the active tab forward one entry. Returns false when already at the tip.
    fn go_forward(&mut self) -> bool {
        let Some(tab) = self.active_tab_mut() else {
            return false;
        };
        match tab.history_index {
            Some(i) if i + 1 < tab.history.len() => {
                tab.seek(i + 1);
                Self::retitle(tab);
                true
            }
            _ => false,
        }
    }

    /// Appends the home placeholder to the active tab's history and moves onto it.
    ///
    /// Unlike `navigate`, entries after the cursor are kept.
    fn go_home(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.push_home();
            debug!(tab = %tab.id, "went home");
        }
    }

    fn can_go_back(&self) -> bool {
        self.active_tab().can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.active_tab().can_go_forward()
    }

    /// Appends a blank tab to the current workspace and activates it.
    fn open_tab(&mut self) -> String {
        let tab = Tab::blank();
        let id = tab.id.clone();
        let workspace = self.current_mut();
        workspace.tabs.push(tab);
        workspace.active_tab_id = id.clone();
        debug!(tab = %id, "opened tab");
        id
    }

    /// Closes a tab in the current workspace.
    ///
    /// Closing the only tab leaves a fresh blank tab behind. Closing the
    /// active tab activates whichever tab is now last.
    fn close_tab(&mut self, tab_id: &str) -> Result<(), NavigationError> {
        let workspace = self.current_mut();
        let pos = workspace
            .position(tab_id)
            .ok_or_else(|| NavigationError::TabNotFound(tab_id.to_string()))?;

        workspace.tabs.remove(pos);

        if workspace.tabs.is_empty() {
            let tab = Tab::blank();
            workspace.active_tab_id = tab.id.clone();
            workspace.tabs.push(tab);
        } else if workspace.active_tab_id == tab_id {
            if let Some(last) = workspace.tabs.last() {
                workspace.active_tab_id = last.id.clone();
            }
        }

        debug!(tab = tab_id, "closed tab");
        Ok(())
    }

    fn select_tab(&mut self, tab_id: &str) -> Result<(), NavigationError> {
        let workspace = self.current_mut();
        if workspace.position(tab_id).is_none() {
            return Err(NavigationError::TabNotFound(tab_id.to_string()));
        }
        workspace.active_tab_id = tab_id.to_string();
        Ok(())
    }

    fn set_active_tab_title(&mut self, title: &str) {
        if let Some(tab) = self.active_tab_mut() {
            tab.title = title.to_string();
        }
    }

    /// Appends a workspace with one blank tab. The current workspace is unchanged.
    fn create_workspace(&mut self, name: &str) -> Result<String, NavigationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NavigationError::EmptyName);
        }
        let workspace = Workspace::new(name);
        let id = workspace.id.clone();
        self.workspaces.push(workspace);
        debug!(workspace = %id, name, "created workspace");
        Ok(id)
    }

    /// Deletes a workspace. Returns `Ok(false)` without change when it is the last one.
    fn delete_workspace(&mut self, workspace_id: &str) -> Result<bool, NavigationError> {
        let pos = self
            .workspaces
            .iter()
            .position(|w| w.id == workspace_id)
            .ok_or_else(|| NavigationError::WorkspaceNotFound(workspace_id.to_string()))?;

        if self.workspaces.len() <= 1 {
            return Ok(false);
        }

        self.workspaces.remove(pos);
        if self.current_workspace_id == workspace_id {
            self.current_workspace_id = self.workspaces[0].id.clone();
        }
        debug!(workspace = workspace_id, "deleted workspace");
        Ok(true)
    }

    fn switch_workspace(&mut self, workspace_id: &str) -> Result<(), NavigationError> {
        if self.get_workspace(workspace_id).is_none() {
            return Err(NavigationError::WorkspaceNotFound(workspace_id.to_string()));
        }
        self.current_workspace_id = workspace_id.to_string();
        Ok(())
    }

    fn current_workspace(&self) -> &Workspace {
        &self.workspaces[self.current_index()]
    }

    /// The active tab of the current workspace.
    fn active_tab(&self) -> &Tab {
        let workspace = self.current_workspace();
        workspace
            .active_tab()
            .unwrap_or_else(|| &workspace.tabs[workspace.tabs.len() - 1])
    }

    fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    fn workspace_count(&self) -> usize {
        self.workspaces.len()
    }
}
