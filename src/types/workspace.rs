use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tab::{StoredTab, Tab};

/// Name of the workspace present on first launch.
pub const DEFAULT_WORKSPACE_NAME: &str = "Main Workspace";

/// A named group of tabs with exactly one active tab.
///
/// `tabs` is never empty and `active_tab_id` always names one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub tabs: Vec<Tab>,
    pub active_tab_id: String,
}

impl Workspace {
    /// A workspace holding a single blank, active tab.
    pub fn new(name: &str) -> Self {
        let tab = Tab::blank();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            active_tab_id: tab.id.clone(),
            tabs: vec![tab],
        }
    }

    pub fn tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab(&self.active_tab_id)
    }

    pub(crate) fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = &self.active_tab_id;
        self.tabs.iter_mut().find(|t| t.id == *id)
    }

    pub(crate) fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

/// A workspace as persisted and as sent over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredWorkspace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tabs: Vec<StoredTab>,
}

impl StoredWorkspace {
    pub fn from_workspace(workspace: &Workspace) -> Self {
        Self {
            id: workspace.id.clone(),
            name: workspace.name.clone(),
            tabs: workspace
                .tabs
                .iter()
                .map(|t| StoredTab::from_tab(t, t.id == workspace.active_tab_id))
                .collect(),
        }
    }

    /// Rebuilds an in-memory workspace.
    ///
    /// An empty tab list gets a blank tab. The first tab flagged active wins;
    /// with none flagged the last tab becomes active.
    pub fn into_workspace(self) -> Workspace {
        let active = self
            .tabs
            .iter()
            .find(|t| t.is_active)
            .or_else(|| self.tabs.last())
            .map(|t| t.id.clone());

        let mut tabs: Vec<Tab> = self.tabs.into_iter().map(StoredTab::into_tab).collect();
        let active_tab_id = match active {
            Some(id) => id,
            None => {
                let tab = Tab::blank();
                let id = tab.id.clone();
                tabs.push(tab);
                id
            }
        };

        Workspace {
            id: self.id,
            name: self.name,
            tabs,
            active_tab_id,
        }
    }
}

/// The whole workspace collection plus the current-workspace pointer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    pub workspaces: Vec<StoredWorkspace>,
    pub current_workspace_id: String,
}
