//! Unit tests for the App core: intents, browsing log and persistence wiring.

use chrono::{Local, TimeZone};
use cozytab::app::App;
use cozytab::database::MemoryStore;
use cozytab::managers::bookmark_manager::BookmarkManagerTrait;
use cozytab::managers::history_manager::HistoryManagerTrait;
use cozytab::managers::workspace_manager::WorkspaceManagerTrait;
use cozytab::services::clock::{ClockSnapshot, Greeting};
use cozytab::services::settings_engine::SettingsEngineTrait;
use cozytab::types::errors::{NavigationError, ProfileError};
use cozytab::types::settings::SearchEngine;
use serde_json::json;
use tempfile::TempDir;

fn setup() -> (App, MemoryStore) {
    let store = MemoryStore::new();
    (App::with_store(Box::new(store.clone())), store)
}

fn reload(store: &MemoryStore) -> App {
    App::with_store(Box::new(store.clone()))
}

// ─── Navigation ───

#[test]
fn test_typical_session() {
    let (mut app, _) = setup();

    let url = app.submit_query("openai.com").unwrap();
    assert_eq!(url.as_deref(), Some("https://openai.com"));
    {
        let tab = app.workspaces.active_tab();
        assert_eq!(tab.history, vec!["https://openai.com"]);
        assert_eq!(tab.history_index, Some(0));
        assert_eq!(tab.title, "openai.com");
    }

    app.submit_query("rust ownership").unwrap();
    assert_eq!(
        app.workspaces.active_tab().url,
        "https://www.google.com/search?q=rust%20ownership"
    );
    assert!(app.go_back());
    assert_eq!(app.workspaces.active_tab().url, "https://openai.com");
    assert!(app.go_forward());
    assert!(!app.go_forward());

    let visited: Vec<&str> = app.history.list().iter().map(|h| h.url.as_str()).collect();
    assert_eq!(
        visited,
        vec!["https://openai.com", "https://www.google.com/search?q=rust%20ownership"]
    );
}

#[test]
fn test_blank_query_does_nothing() {
    let (mut app, _) = setup();
    assert_eq!(app.submit_query("   ").unwrap(), None);
    assert!(app.history.is_empty());
    assert!(app.workspaces.active_tab().history.is_empty());
}

#[test]
fn test_search_uses_configured_engine() {
    let (mut app, _) = setup();
    app.update_setting("searchEngine", json!("duckduckgo")).unwrap();
    assert_eq!(app.settings.search_engine(), SearchEngine::Duckduckgo);
    let url = app.submit_query("cozy tabs").unwrap();
    assert_eq!(url.as_deref(), Some("https://duckduckgo.com/?q=cozy%20tabs"));
}

#[test]
fn test_back_forward_and_home_are_not_logged() {
    let (mut app, _) = setup();
    app.navigate("https://a.com").unwrap();
    app.navigate("https://b.com").unwrap();
    app.go_back();
    app.go_forward();
    app.go_home();
    assert_eq!(app.history.len(), 2);
}

#[test]
fn test_navigation_in_every_tab_is_logged() {
    let (mut app, _) = setup();
    app.navigate("https://a.com").unwrap();
    app.open_tab();
    app.navigate("https://b.com").unwrap();
    let ws = app.create_workspace("Other").unwrap();
    app.switch_workspace(&ws).unwrap();
    app.navigate("https://c.com").unwrap();
    assert_eq!(app.history.len(), 3);
}

#[test]
fn test_empty_navigation_is_rejected() {
    let (mut app, _) = setup();
    assert_eq!(app.navigate(""), Err(NavigationError::EmptyUrl));
    assert!(app.history.is_empty());
}

// ─── Persistence wiring ───

#[test]
fn test_state_survives_reload() {
    let (mut app, store) = setup();
    app.navigate("https://a.com").unwrap();
    app.navigate("https://b.com").unwrap();
    app.go_back();
    let tab = app.open_tab();
    app.set_tab_title("Scratch");
    let ws = app.create_workspace("Research").unwrap();
    app.switch_workspace(&ws).unwrap();
    app.add_bookmark("Docs", "https://docs.rs").unwrap();
    app.update_setting("theme", json!("lava-red")).unwrap();

    let restored = reload(&store);
    assert_eq!(restored.workspaces, app.workspaces);
    assert_eq!(restored.workspaces.current_workspace_id(), ws);
    let main = &restored.workspaces.workspaces()[0];
    assert_eq!(main.active_tab_id, tab);
    assert_eq!(main.tabs[0].url, "https://a.com");
    assert_eq!(main.tabs[0].history_index, Some(0));
    assert_eq!(main.tabs[1].title, "Scratch");
    assert_eq!(restored.history.len(), 2);
    assert_eq!(restored.bookmarks.list().len(), 1);
    assert_eq!(restored.settings.get_settings().theme, "lava-red");
}

#[test]
fn test_history_edits_are_persisted() {
    let (mut app, store) = setup();
    app.navigate("https://a.com").unwrap();
    app.navigate("https://b.com").unwrap();
    let first = app.history.list()[0].id.clone();
    app.delete_history_entry(&first).unwrap();
    assert_eq!(reload(&store).history.len(), 1);

    app.clear_history();
    assert!(reload(&store).history.is_empty());
}

#[test]
fn test_bookmark_removal_is_persisted() {
    let (mut app, store) = setup();
    let id = app.add_bookmark("A", "https://a.com").unwrap();
    app.remove_bookmark(&id).unwrap();
    assert!(reload(&store).bookmarks.list().is_empty());
    assert!(app.remove_bookmark(&id).is_err());
}

#[test]
fn test_reset_settings_is_persisted() {
    let (mut app, store) = setup();
    app.update_setting("fontSize", json!("small")).unwrap();
    app.reset_settings();
    assert_eq!(
        reload(&store).settings.get_settings(),
        app.settings.get_settings()
    );
}

#[test]
fn test_sqlite_app_reopens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cozytab.db");
    {
        let mut app = App::open(&path).unwrap();
        app.submit_query("github.com").unwrap();
        app.select_profession("tech").unwrap();
    }
    let app = App::open(&path).unwrap();
    assert_eq!(app.workspaces.active_tab().url, "https://github.com");
    assert_eq!(app.profession(), Some("tech"));
    assert!(!app.needs_profession_prompt());
}

// ─── Workspaces ───

#[test]
fn test_delete_last_workspace_is_kept() {
    let (mut app, _) = setup();
    let id = app.workspaces.current_workspace_id().to_string();
    assert_eq!(app.delete_workspace(&id), Ok(false));
    assert_eq!(app.workspaces.workspace_count(), 1);
}

// ─── First run ───

#[test]
fn test_profession_prompt_flow() {
    let (mut app, store) = setup();
    assert!(app.needs_profession_prompt());
    assert_eq!(app.profession(), None);
    assert_eq!(app.quick_links().len(), 6);

    assert_eq!(app.select_profession("  "), Err(ProfileError::EmptyProfession));
    assert!(app.needs_profession_prompt());

    app.select_profession(" finance ").unwrap();
    assert_eq!(app.profession(), Some("finance"));
    assert_eq!(app.quick_links().len(), 9);
    assert_eq!(app.quick_links()[6].name, "Bloomberg");

    let restored = reload(&store);
    assert!(!restored.needs_profession_prompt());
    assert_eq!(restored.profession(), Some("finance"));
}

#[test]
fn test_custom_profession_keeps_default_links() {
    let (mut app, _) = setup();
    app.select_profession("lighthouse keeper").unwrap();
    assert_eq!(app.profession(), Some("lighthouse keeper"));
    assert_eq!(app.quick_links().len(), 6);
}

// ─── Clock ───

#[test]
fn test_tick_replaces_clock_snapshot() {
    let (mut app, _) = setup();
    let evening = Local.with_ymd_and_hms(2024, 3, 1, 19, 5, 0).unwrap();
    app.tick(ClockSnapshot::at(evening));
    assert_eq!(app.clock().greeting, Greeting::Evening);
    assert_eq!(app.clock().display_time(), "19:05");
}
