//! Global browsing log for CozyTab.
//!
//! Every navigation across all tabs and workspaces lands here. Back/forward
//! replays are not logged.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::services::url_resolver;
use crate::types::errors::HistoryError;
use crate::types::history::HistoryItem;

/// Trait defining browsing-log operations.
pub trait HistoryManagerTrait {
    fn record_visit(&mut self, url: &str) -> String;
    fn list(&self) -> &[HistoryItem];
    fn recent(&self, limit: usize) -> Vec<&HistoryItem>;
    fn search(&self, query: &str) -> Vec<&HistoryItem>;
    fn delete_entry(&mut self, id: &str) -> Result<(), HistoryError>;
    fn clear_all(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory browsing log, oldest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryManager {
    entries: Vec<HistoryItem>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<HistoryItem>) -> Self {
        Self { entries }
    }

    /// Appends an entry with an explicit timestamp (epoch milliseconds).
    pub fn record_visit_at(&mut self, url: &str, visited_at: i64) -> String {
        let id = Uuid::new_v4().to_string();
        self.entries.push(HistoryItem {
            id: id.clone(),
            url: url.to_string(),
            title: url_resolver::history_title(url),
            visited_at,
        });
        debug!(url, "recorded visit");
        id
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Appends a visit stamped with the current time. Returns the entry ID.
    fn record_visit(&mut self, url: &str) -> String {
        self.record_visit_at(url, Utc::now().timestamp_millis())
    }

    /// All entries in chronological order.
    fn list(&self) -> &[HistoryItem] {
        &self.entries
    }

    /// Up to `limit` entries, newest first.
    fn recent(&self, limit: usize) -> Vec<&HistoryItem> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Case-insensitive match on URL or title, newest first.
    fn search(&self, query: &str) -> Vec<&HistoryItem> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .rev()
            .filter(|h| {
                h.url.to_lowercase().contains(&needle) || h.title.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn delete_entry(&mut self, id: &str) -> Result<(), HistoryError> {
        let pos = self
            .entries
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;
        self.entries.remove(pos);
        Ok(())
    }

    fn clear_all(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
