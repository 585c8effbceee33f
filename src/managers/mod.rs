// CozyTab state managers
// Managers handle stateful operations: workspaces and tabs, the browsing log, bookmarks.

pub mod bookmark_manager;
pub mod history_manager;
pub mod workspace_manager;
