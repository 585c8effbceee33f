use serde::{Deserialize, Serialize};

/// One entry of the global browsing log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Epoch milliseconds.
    pub visited_at: i64,
}
