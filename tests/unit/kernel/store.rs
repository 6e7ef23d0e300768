use super::*;
use crate::kernel::editor::Motion;
use crate::kernel::{ContainerBounds, ContextMenuItem, InputDialogKind, ThemeKind, ViewConfig};
use crate::models::{seed_tree, NodeId};

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

fn new_store() -> Store {
    Store::new(AppState::new(seed_tree(), ViewConfig::default()))
}

fn tab_ids(store: &Store) -> Vec<&str> {
    store
        .state()
        .open_tabs
        .iter()
        .map(|tab| tab.id.as_str())
        .collect()
}

fn select(store: &mut Store, name: &str) -> DispatchResult {
    store.dispatch(Action::SelectFile { id: id(name) })
}

fn type_text(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::InputDialogAppend(ch));
    }
}

fn menu_pick(store: &mut Store, target: &str, item: ContextMenuItem) {
    store.dispatch(Action::ContextMenuOpen {
        target: id(target),
        x: 3,
        y: 4,
    });
    let index = store
        .state()
        .ui
        .context_menu
        .items
        .iter()
        .position(|it| *it == item)
        .unwrap();
    store.dispatch(Action::ContextMenuSetSelected { index });
    store.dispatch(Action::ContextMenuConfirm);
}

#[test]
fn selecting_files_opens_tabs_once() {
    let mut store = new_store();
    assert!(select(&mut store, "App.tsx").state_changed);
    select(&mut store, "utils.ts");
    select(&mut store, "App.tsx");

    assert_eq!(tab_ids(&store), vec!["App.tsx", "utils.ts"]);
    assert_eq!(store.state().active, Some(id("App.tsx")));
    assert!(!select(&mut store, "App.tsx").state_changed);
}

#[test]
fn selecting_a_folder_or_unknown_id_is_ignored() {
    let mut store = new_store();
    assert!(!select(&mut store, "src").state_changed);
    assert!(!select(&mut store, "ghost").state_changed);
    assert!(store.state().open_tabs.is_empty());
}

#[test]
fn closing_the_active_tab_activates_the_last_one() {
    let mut store = new_store();
    for name in ["App.tsx", "utils.ts", "index.css"] {
        select(&mut store, name);
    }
    store.dispatch(Action::SwitchTab { id: id("utils.ts") });

    store.dispatch(Action::CloseFile { id: id("App.tsx") });
    assert_eq!(store.state().active, Some(id("utils.ts")));

    store.dispatch(Action::CloseFile { id: id("utils.ts") });
    assert_eq!(tab_ids(&store), vec!["index.css"]);
    assert_eq!(store.state().active, Some(id("index.css")));

    store.dispatch(Action::CloseFile { id: id("index.css") });
    assert_eq!(store.state().active, None);
    assert_eq!(store.state().title(), "VSCode Clone");
}

#[test]
fn switching_to_an_unopened_tab_is_a_no_op() {
    let mut store = new_store();
    select(&mut store, "App.tsx");
    assert!(!store
        .dispatch(Action::SwitchTab {
            id: id("utils.ts")
        })
        .state_changed);
    assert_eq!(store.state().active, Some(id("App.tsx")));
}

#[test]
fn deleting_a_folder_closes_descendant_tabs() {
    let mut store = new_store();
    select(&mut store, "Header.tsx");
    select(&mut store, "utils.ts");
    select(&mut store, "Sidebar.tsx");

    assert!(store
        .dispatch(Action::DeleteNode {
            id: id("components")
        })
        .state_changed);
    assert_eq!(tab_ids(&store), vec!["utils.ts"]);
    assert_eq!(store.state().active, None);
    assert!(!store.state().tree.contains(&id("Header.tsx")));
}

#[test]
fn deleting_an_inactive_open_file_keeps_the_active_one() {
    let mut store = new_store();
    select(&mut store, "utils.ts");
    select(&mut store, "App.tsx");
    store.dispatch(Action::DeleteNode { id: id("utils.ts") });
    assert_eq!(tab_ids(&store), vec!["App.tsx"]);
    assert_eq!(store.state().active, Some(id("App.tsx")));
}

#[test]
fn content_updates_show_up_in_the_active_file() {
    let mut store = new_store();
    select(&mut store, "utils.ts");
    store.dispatch(Action::UpdateContent {
        id: id("utils.ts"),
        content: "export {}".to_string(),
    });
    let node = store.state().active_node().unwrap();
    assert_eq!(node.content(), Some("export {}"));
}

#[test]
fn new_file_from_the_context_menu() {
    let mut store = new_store();
    menu_pick(&mut store, "App.tsx", ContextMenuItem::NewFile);

    let dialog = &store.state().ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(
        dialog.kind,
        Some(InputDialogKind::NewFile { parent: id("src") })
    );
    assert!(!store.state().ui.context_menu.visible);

    type_text(&mut store, "api.ts");
    store.dispatch(Action::InputDialogAccept);

    let state = store.state();
    assert!(!state.ui.input_dialog.visible);
    let src = state.tree.find(&id("src")).unwrap();
    let names: Vec<&str> = src.children().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["components", "api.ts", "App.tsx", "index.css", "utils.ts"]
    );
    let created = src.children()[1].id.clone();
    assert!(created.as_str().starts_with("api.ts-"));
    assert_eq!(state.explorer.selected, Some(created));
}

#[test]
fn new_folder_expands_a_collapsed_parent() {
    let mut store = new_store();
    store.dispatch(Action::ToggleFolder { id: id("components") });
    menu_pick(&mut store, "components", ContextMenuItem::NewFolder);
    type_text(&mut store, "icons");
    store.dispatch(Action::InputDialogAccept);

    let components = store.state().tree.find(&id("components")).unwrap();
    assert!(components.is_expanded());
    assert!(components.children()[0].is_folder());
    assert_eq!(components.children()[0].name, "icons");
}

#[test]
fn empty_name_dismisses_without_changes() {
    let mut store = new_store();
    let before = store.state().tree.clone();
    menu_pick(&mut store, "src", ContextMenuItem::NewFile);
    type_text(&mut store, "   ");
    store.dispatch(Action::InputDialogAccept);

    assert!(!store.state().ui.input_dialog.visible);
    assert_eq!(store.state().tree, before);
}

#[test]
fn invalid_name_keeps_the_prompt_open() {
    let mut store = new_store();
    menu_pick(&mut store, "src", ContextMenuItem::NewFile);
    type_text(&mut store, "a/b");
    store.dispatch(Action::InputDialogAccept);

    let dialog = &store.state().ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.error.as_deref(), Some("Invalid name"));

    store.dispatch(Action::InputDialogBackspace);
    assert!(store.state().ui.input_dialog.error.is_none());
    store.dispatch(Action::InputDialogCancel);
    assert!(!store.state().ui.input_dialog.visible);
}

#[test]
fn rename_keeps_tabs_and_updates_title() {
    let mut store = new_store();
    select(&mut store, "utils.ts");
    menu_pick(&mut store, "utils.ts", ContextMenuItem::Rename);
    assert_eq!(store.state().ui.input_dialog.value, "utils.ts");

    for _ in 0.."utils.ts".len() {
        store.dispatch(Action::InputDialogBackspace);
    }
    type_text(&mut store, "helpers.ts");
    store.dispatch(Action::InputDialogAccept);

    assert_eq!(tab_ids(&store), vec!["utils.ts"]);
    assert_eq!(store.state().title(), "helpers.ts - VSCode Clone");
}

#[test]
fn delete_needs_confirmation() {
    let mut store = new_store();
    menu_pick(&mut store, "index.css", ContextMenuItem::Delete);
    assert!(store.state().ui.confirm_dialog.visible);
    store.dispatch(Action::ConfirmDialogCancel);
    assert!(store.state().tree.contains(&id("index.css")));

    menu_pick(&mut store, "index.css", ContextMenuItem::Delete);
    store.dispatch(Action::ConfirmDialogAccept);
    assert!(!store.state().ui.confirm_dialog.visible);
    assert!(!store.state().tree.contains(&id("index.css")));
}

#[test]
fn context_menu_is_blocked_by_dialogs() {
    let mut store = new_store();
    menu_pick(&mut store, "src", ContextMenuItem::NewFile);
    let result = store.dispatch(Action::ContextMenuOpen {
        target: id("src"),
        x: 0,
        y: 0,
    });
    assert!(!result.state_changed);
    assert!(!store.state().ui.context_menu.visible);
}

#[test]
fn clicking_rows_toggles_folders_and_opens_files() {
    let mut store = new_store();
    let rows = store.state().explorer.rows().len();

    // Row 1 is `src`.
    store.dispatch(Action::ExplorerClickRow { row: 1 });
    assert!(store.state().explorer.rows().len() < rows);
    store.dispatch(Action::ExplorerClickRow { row: 1 });
    assert_eq!(store.state().explorer.rows().len(), rows);

    // Row 5 is `App.tsx`.
    store.dispatch(Action::ExplorerClickRow { row: 5 });
    assert_eq!(store.state().active, Some(id("App.tsx")));
    assert!(!store
        .dispatch(Action::ExplorerClickRow { row: 99 })
        .state_changed);
}

#[test]
fn empty_paste_is_not_a_change() {
    let mut store = new_store();
    select(&mut store, "utils.ts");
    let before = store.state().tree.clone();
    assert!(!store
        .dispatch(Action::EditorInsertText(String::new()))
        .state_changed);
    assert_eq!(store.state().tree, before);
}

#[test]
fn moving_from_a_hidden_selection_starts_at_its_visible_ancestor() {
    let mut store = new_store();
    select(&mut store, "Header.tsx");
    store.dispatch(Action::ToggleFolder {
        id: id("components"),
    });
    assert_eq!(store.state().explorer.selected, Some(id("Header.tsx")));
    assert_eq!(store.state().explorer.selected_index(), None);

    assert!(store
        .dispatch(Action::ExplorerMoveSelection { delta: 1 })
        .state_changed);
    assert_eq!(store.state().explorer.selected, Some(id("App.tsx")));

    select(&mut store, "Header.tsx");
    store.dispatch(Action::ExplorerMoveSelection { delta: -1 });
    assert_eq!(store.state().explorer.selected, Some(id("src")));
}

#[test]
fn keyboard_navigation_in_the_explorer() {
    let mut store = new_store();
    store.dispatch(Action::ExplorerMoveSelection { delta: 1 });
    assert_eq!(store.state().explorer.selected, Some(id("root")));
    store.dispatch(Action::ExplorerMoveSelection { delta: 1 });
    assert_eq!(store.state().explorer.selected, Some(id("src")));

    store.dispatch(Action::ExplorerCollapse);
    assert!(!store.state().tree.find(&id("src")).unwrap().is_expanded());
    store.dispatch(Action::ExplorerCollapse);
    assert_eq!(store.state().explorer.selected, Some(id("root")));

    store.dispatch(Action::ExplorerMoveSelection { delta: 1 });
    store.dispatch(Action::ExplorerExpand);
    assert!(store.state().tree.find(&id("src")).unwrap().is_expanded());

    store.dispatch(Action::ExplorerMoveSelection { delta: 4 });
    assert_eq!(store.state().explorer.selected, Some(id("App.tsx")));
    store.dispatch(Action::ExplorerActivate);
    assert_eq!(store.state().active, Some(id("App.tsx")));
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);
}

#[test]
fn typing_edits_the_active_file_through_the_tree() {
    let mut store = new_store();
    select(&mut store, "utils.ts");
    let original = store.state().active_node().unwrap().content().unwrap().to_string();

    store.dispatch(Action::EditorInsertText("// x".to_string()));
    store.dispatch(Action::EditorNewline);
    let content = store.state().tree.find(&id("utils.ts")).unwrap().content().unwrap().to_string();
    assert_eq!(content, format!("// x\n{original}"));
    assert_eq!(store.state().cursor_position(), Some((2, 1)));

    for _ in 0..5 {
        store.dispatch(Action::EditorBackspace);
    }
    assert_eq!(store.state().active_node().unwrap().content(), Some(original.as_str()));
    assert!(!store.dispatch(Action::EditorBackspace).state_changed);
}

#[test]
fn indent_and_paste_normalization() {
    let mut store = new_store();
    select(&mut store, "utils.ts");
    store.dispatch(Action::EditorMove(Motion::DocEnd));
    store.dispatch(Action::EditorInsertText("\r\nnext".to_string()));
    store.dispatch(Action::EditorMove(Motion::LineStart));
    store.dispatch(Action::EditorIndent);

    let content = store.state().active_node().unwrap().content().unwrap().to_string();
    assert!(content.ends_with("\n  next"), "{content:?}");
    assert_eq!(store.state().cursor_position(), Some((2, 3)));
}

#[test]
fn editor_actions_without_an_active_file_do_nothing() {
    let mut store = new_store();
    assert!(!store.dispatch(Action::EditorNewline).state_changed);
    assert!(!store.dispatch(Action::EditorMove(Motion::Down)).state_changed);
    assert!(!store.dispatch(Action::EditorScroll { delta: 3 }).state_changed);
}

#[test]
fn click_places_the_cursor() {
    let mut store = new_store();
    select(&mut store, "App.tsx");
    store.dispatch(Action::EditorClick { row: 2, x: 4 });
    assert_eq!(store.state().cursor_position(), Some((3, 5)));
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);
}

#[test]
fn split_drag_through_the_store() {
    let mut store = new_store();
    let container = ContainerBounds { left: 0, width: 100 };
    assert!(!store
        .dispatch(Action::SplitPointerMove { x: 30, container })
        .state_changed);

    store.dispatch(Action::SplitPointerDown);
    store.dispatch(Action::SplitPointerMove { x: 30, container });
    assert_eq!(store.state().ui.split.left_percent(), 30.0);
    store.dispatch(Action::SplitPointerMove { x: 90, container });
    assert_eq!(store.state().ui.split.left_percent(), 40.0);
    store.dispatch(Action::SplitPointerUp);
    store.dispatch(Action::SplitPointerMove { x: 15, container });
    assert_eq!(store.state().ui.split.left_percent(), 40.0);
}

#[test]
fn commands() {
    let mut store = new_store();
    select(&mut store, "App.tsx");
    select(&mut store, "utils.ts");

    store.dispatch(Action::RunCommand(Command::NextTab));
    assert_eq!(store.state().active, Some(id("App.tsx")));
    store.dispatch(Action::RunCommand(Command::PrevTab));
    assert_eq!(store.state().active, Some(id("utils.ts")));

    store.dispatch(Action::RunCommand(Command::CloseTab));
    assert_eq!(tab_ids(&store), vec!["App.tsx"]);

    store.dispatch(Action::RunCommand(Command::ToggleTheme));
    assert_eq!(store.state().ui.theme, ThemeKind::Light);

    store.dispatch(Action::RunCommand(Command::ToggleFocus));
    assert_eq!(store.state().ui.focus, FocusTarget::Editor);

    store.dispatch(Action::RunCommand(Command::Quit));
    assert!(store.state().ui.should_quit);
}

#[test]
fn explorer_commands_act_on_the_selection() {
    let mut store = new_store();
    assert!(!store
        .dispatch(Action::RunCommand(Command::ExplorerDelete))
        .state_changed);

    select(&mut store, "utils.ts");
    store.dispatch(Action::RunCommand(Command::ExplorerDelete));
    assert!(store.state().ui.confirm_dialog.visible);
    store.dispatch(Action::ConfirmDialogAccept);
    assert!(store.state().open_tabs.is_empty());

    store.dispatch(Action::RunCommand(Command::ExplorerNewFolder));
    assert_eq!(
        store.state().ui.input_dialog.kind,
        Some(InputDialogKind::NewFolder { parent: id("root") })
    );
}
