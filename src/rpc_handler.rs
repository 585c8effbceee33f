//! RPC method handler for the CozyTab JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without stdio.
//! `handle_method` dispatches one call to the `App` and renders the result.

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::managers::history_manager::HistoryManagerTrait;
use crate::managers::workspace_manager::WorkspaceManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::profession::Profession;
use crate::types::tab::StoredTab;

/// Default number of entries returned by `history.list`.
const DEFAULT_HISTORY_LIMIT: usize = 100;

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// The navigation state the UI needs to render the tab strip and toolbar.
fn navigation_state(app: &App) -> Result<Value, String> {
    let workspaces = &app.workspaces;
    let active = workspaces.active_tab();
    Ok(json!({
        "workspaces": to_json(&workspaces.stored_workspaces())?,
        "currentWorkspaceId": workspaces.current_workspace_id(),
        "activeTab": to_json(&StoredTab::from_tab(active, true))?,
        "canGoBack": workspaces.can_go_back(),
        "canGoForward": workspaces.can_go_forward(),
    }))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &mut App, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "state.get" => navigation_state(app),

        // ─── Tabs ───
        "tab.navigate" => {
            let url = str_param(params, "url")?;
            app.navigate(url).map_err(|e| e.to_string())?;
            navigation_state(app)
        }
        "tab.search" => {
            let query = str_param(params, "query")?;
            let url = app.submit_query(query).map_err(|e| e.to_string())?;
            Ok(json!({"url": url, "state": navigation_state(app)?}))
        }
        "tab.back" => {
            let moved = app.go_back();
            Ok(json!({"moved": moved, "state": navigation_state(app)?}))
        }
        "tab.forward" => {
            let moved = app.go_forward();
            Ok(json!({"moved": moved, "state": navigation_state(app)?}))
        }
        "tab.home" => {
            app.go_home();
            navigation_state(app)
        }
        "tab.new" => {
            let id = app.open_tab();
            Ok(json!({"id": id, "state": navigation_state(app)?}))
        }
        "tab.close" => {
            let id = str_param(params, "id")?;
            app.close_tab(id).map_err(|e| e.to_string())?;
            navigation_state(app)
        }
        "tab.select" => {
            let id = str_param(params, "id")?;
            app.select_tab(id).map_err(|e| e.to_string())?;
            navigation_state(app)
        }
        "tab.set_title" => {
            let title = str_param(params, "title")?;
            app.set_tab_title(title);
            navigation_state(app)
        }

        // ─── Workspaces ───
        "workspace.list" => {
            let list: Vec<Value> = app
                .workspaces
                .workspaces()
                .iter()
                .map(|w| json!({"id": w.id, "name": w.name, "tabCount": w.tabs.len()}))
                .collect();
            Ok(json!(list))
        }
        "workspace.create" => {
            let name = str_param(params, "name")?;
            let id = app.create_workspace(name).map_err(|e| e.to_string())?;
            Ok(json!({"id": id}))
        }
        "workspace.delete" => {
            let id = str_param(params, "id")?;
            let deleted = app.delete_workspace(id).map_err(|e| e.to_string())?;
            Ok(json!({"deleted": deleted, "state": navigation_state(app)?}))
        }
        "workspace.switch" => {
            let id = str_param(params, "id")?;
            app.switch_workspace(id).map_err(|e| e.to_string())?;
            navigation_state(app)
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            let title = str_param(params, "title")?;
            let url = str_param(params, "url")?;
            let id = app.add_bookmark(title, url).map_err(|e| e.to_string())?;
            Ok(json!({"id": id}))
        }
        "bookmark.list" => to_json(app.bookmarks.list()),
        "bookmark.search" => {
            let query = str_param(params, "query")?;
            to_json(&app.bookmarks.search(query))
        }
        "bookmark.delete" => {
            let id = str_param(params, "id")?;
            app.remove_bookmark(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Browsing log ───
        "history.list" => {
            let limit = params
                .get("limit")
                .and_then(|v| v.as_u64())
                .map_or(DEFAULT_HISTORY_LIMIT, |n| n as usize);
            to_json(&app.history.recent(limit))
        }
        "history.search" => {
            let query = str_param(params, "query")?;
            to_json(&app.history.search(query))
        }
        "history.delete" => {
            let id = str_param(params, "id")?;
            app.delete_history_entry(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.clear" => {
            app.clear_history();
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => to_json(app.settings.get_settings()),
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            app.update_setting(key, value).map_err(|e| e.to_string())?;
            to_json(app.settings.get_settings())
        }
        "settings.reset" => {
            app.reset_settings();
            to_json(app.settings.get_settings())
        }

        // ─── First run ───
        "profession.get" => {
            let choices: Vec<Value> = Profession::ALL
                .iter()
                .map(|p| json!({"id": p.id(), "name": p.label()}))
                .collect();
            Ok(json!({
                "profession": app.profession(),
                "needsPrompt": app.needs_profession_prompt(),
                "choices": choices,
            }))
        }
        "profession.set" => {
            let profession = str_param(params, "profession")?;
            app.select_profession(profession).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "quicklinks.list" => to_json(&app.quick_links()),

        // ─── Clock ───
        "clock.now" => {
            let clock = app.clock();
            Ok(json!({
                "time": clock.display_time(),
                "timestamp": clock.time.timestamp_millis(),
                "greeting": clock.greeting.text(),
            }))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
