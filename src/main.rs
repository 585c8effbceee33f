//! CozyTab: a personal new-tab dashboard engine.
//!
//! Entry point: runs a console demo that drives the state store through a
//! typical session against an in-memory backend and prints what it sees.

use std::error::Error;

use cozytab::app::App;
use cozytab::logging;
use cozytab::managers::bookmark_manager::BookmarkManagerTrait;
use cozytab::managers::history_manager::HistoryManagerTrait;
use cozytab::managers::workspace_manager::WorkspaceManagerTrait;
use cozytab::services::settings_engine::SettingsEngineTrait;

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_active_tab(app: &App) {
    let tab = app.workspaces.active_tab();
    println!(
        "  Active tab: url={:?} title={:?} index={:?} history={:?}",
        tab.url, tab.title, tab.history_index, tab.history
    );
}

fn demo_navigation(app: &mut App) -> Result<(), Box<dyn Error>> {
    section("Navigation");
    for query in ["openai.com", "github.com", "rust ownership"] {
        let url = app.submit_query(query)?;
        println!("  {:?} -> {:?}", query, url);
    }
    print_active_tab(app);

    app.go_back();
    app.go_back();
    println!("  After two steps back:");
    print_active_tab(app);

    app.navigate("https://docs.rs")?;
    println!("  Navigated from the middle, forward branch dropped:");
    print_active_tab(app);

    app.go_home();
    println!("  Home:");
    print_active_tab(app);
    println!();
    Ok(())
}

fn demo_tabs_and_workspaces(app: &mut App) -> Result<(), Box<dyn Error>> {
    section("Tabs & Workspaces");
    let first = app.workspaces.active_tab().id.clone();
    let second = app.open_tab();
    println!("  Opened tab {}", second);
    app.close_tab(&second)?;
    println!(
        "  Closed it; active tab is the original again: {}",
        app.workspaces.active_tab().id == first
    );

    let research = app.create_workspace("Research")?;
    app.switch_workspace(&research)?;
    println!("  Switched to workspace {:?}", app.workspaces.current_workspace().name);

    let main_id = app.workspaces.workspaces()[0].id.clone();
    app.delete_workspace(&research)?;
    let kept = app.delete_workspace(&main_id)?;
    println!(
        "  Deleted Research; deleting the last workspace was refused: {}",
        !kept
    );
    println!();
    Ok(())
}

fn demo_library(app: &mut App) -> Result<(), Box<dyn Error>> {
    section("Bookmarks, History & Settings");
    app.add_bookmark("Rust Book", "https://doc.rust-lang.org/book/")?;
    println!("  Bookmarks: {}", app.bookmarks.list().len());
    for item in app.history.recent(3) {
        println!("  Visited {} ({})", item.title, item.url);
    }

    app.update_setting("searchEngine", serde_json::json!("duckduckgo"))?;
    println!("  Search engine: {:?}", app.settings.search_engine());

    app.select_profession("tech")?;
    let names: Vec<&str> = app.quick_links().iter().map(|l| l.name).collect();
    println!("  Quick links: {}", names.join(", "));
    println!(
        "  {}, it is {}",
        app.clock().greeting.text(),
        app.clock().display_time()
    );
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    println!();
    println!("  CozyTab v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::in_memory();
    demo_navigation(&mut app)?;
    demo_tabs_and_workspaces(&mut app)?;
    demo_library(&mut app)?;

    println!("  Done.");
    Ok(())
}
