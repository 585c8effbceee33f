use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to a tab that has not navigated anywhere yet.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// A browsing tab with its own linear history stack.
///
/// `history_index` is `None` exactly when `history` is empty; otherwise it
/// points at the entry equal to `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl Tab {
    /// A fresh tab sitting on the home placeholder with no history.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: String::new(),
            title: NEW_TAB_TITLE.to_string(),
            history: Vec::new(),
            history_index: None,
        }
    }

    /// True when the tab shows the home placeholder rather than a page.
    pub fn is_home(&self) -> bool {
        self.url.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.history_index, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.history_index, Some(i) if i + 1 < self.history.len())
    }

    /// Drops forward entries, appends `url` and moves the cursor onto it.
    pub(crate) fn push_history(&mut self, url: &str) {
        let keep = self.history_index.map_or(0, |i| i + 1);
        self.history.truncate(keep);
        self.history.push(url.to_string());
        self.history_index = Some(self.history.len() - 1);
        self.url = url.to_string();
    }

    /// Appends the home placeholder after the last entry, keeping forward entries.
    pub(crate) fn push_home(&mut self) {
        self.history.push(String::new());
        self.history_index = Some(self.history.len() - 1);
        self.url.clear();
    }

    /// Moves the cursor to `index` and syncs `url`. Caller checks bounds.
    pub(crate) fn seek(&mut self, index: usize) {
        self.history_index = Some(index);
        self.url = self.history[index].clone();
    }
}

/// A tab as persisted and as sent over the wire.
///
/// `history` and `historyIndex` default for records written before per-tab
/// history existed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredTab {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default = "no_history_index")]
    pub history_index: i64,
}

fn no_history_index() -> i64 {
    -1
}

impl StoredTab {
    pub fn from_tab(tab: &Tab, is_active: bool) -> Self {
        Self {
            id: tab.id.clone(),
            url: tab.url.clone(),
            title: tab.title.clone(),
            is_active,
            history: tab.history.clone(),
            history_index: tab.history_index.map_or(-1, |i| i as i64),
        }
    }

    /// Rebuilds an in-memory tab, clamping an index that does not fit the
    /// stored history and re-syncing `url` with the entry it points at.
    pub fn into_tab(self) -> Tab {
        let history_index = if self.history.is_empty() {
            None
        } else if self.history_index < 0 {
            Some(self.history.len() - 1)
        } else {
            Some((self.history_index as usize).min(self.history.len() - 1))
        };
        let url = match history_index {
            Some(i) => self.history[i].clone(),
            None => self.url,
        };
        Tab {
            id: self.id,
            url,
            title: self.title,
            history: self.history,
            history_index,
        }
    }
}
