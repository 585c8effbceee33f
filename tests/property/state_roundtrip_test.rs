//! Property tests for navigation state serialization.
//!
//! A snapshot written to JSON and read back must rebuild an identical store.

use cozytab::managers::workspace_manager::{WorkspaceManager, WorkspaceManagerTrait};
use cozytab::types::workspace::NavigationSnapshot;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Navigate(String),
    Back,
    Forward,
    Home,
    OpenTab,
    CloseActive,
    CreateWorkspace(String),
    SwitchTo(usize),
    Title(String),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => "[a-z]{1,10}\\.(com|org|io)".prop_map(|h| Action::Navigate(format!("https://{}", h))),
        2 => Just(Action::Back),
        1 => Just(Action::Forward),
        1 => Just(Action::Home),
        2 => Just(Action::OpenTab),
        1 => Just(Action::CloseActive),
        1 => "[A-Za-z ]{1,12}[A-Za-z]".prop_map(Action::CreateWorkspace),
        1 => (0usize..5).prop_map(Action::SwitchTo),
        1 => "\\PC{0,16}".prop_map(Action::Title),
    ]
}

fn build(actions: &[Action]) -> WorkspaceManager {
    let mut mgr = WorkspaceManager::new();
    for action in actions {
        match action {
            Action::Navigate(url) => mgr.navigate(url).unwrap(),
            Action::Back => {
                mgr.go_back();
            }
            Action::Forward => {
                mgr.go_forward();
            }
            Action::Home => mgr.go_home(),
            Action::OpenTab => {
                mgr.open_tab();
            }
            Action::CloseActive => {
                let id = mgr.active_tab().id.clone();
                mgr.close_tab(&id).unwrap();
            }
            Action::CreateWorkspace(name) => {
                mgr.create_workspace(name).unwrap();
            }
            Action::SwitchTo(n) => {
                let id = mgr.workspaces()[n % mgr.workspace_count()].id.clone();
                mgr.switch_workspace(&id).unwrap();
            }
            Action::Title(title) => mgr.set_active_tab_title(title),
        }
    }
    mgr
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn snapshot_json_roundtrip(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mgr = build(&actions);
        let json = serde_json::to_string(&mgr.snapshot()).unwrap();
        let snapshot: NavigationSnapshot = serde_json::from_str(&json).unwrap();
        let restored = WorkspaceManager::from_snapshot(snapshot);
        prop_assert_eq!(&restored, &mgr);
        prop_assert_eq!(restored.snapshot(), mgr.snapshot());
    }

    /// The persisted shape flags exactly one active tab per workspace.
    #[test]
    fn stored_tabs_flag_one_active(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mgr = build(&actions);
        for ws in mgr.stored_workspaces() {
            prop_assert_eq!(ws.tabs.iter().filter(|t| t.is_active).count(), 1);
            for tab in &ws.tabs {
                prop_assert!(tab.history_index >= -1);
                prop_assert!(tab.history_index < tab.history.len() as i64);
            }
        }
    }
}
