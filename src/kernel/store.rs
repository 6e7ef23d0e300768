use crate::core::Command;
use crate::models::FileTree;

use super::editor;
use super::{Action, AppState, FocusTarget};

mod confirm_dialog;
mod context_menu;
mod editor_view;
mod explorer;
mod input_dialog;
mod tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::SetFocus(target) => DispatchResult {
                state_changed: self.set_focus(target),
            },
            action @ (Action::SelectFile { .. }
            | Action::CloseFile { .. }
            | Action::SwitchTab { .. }
            | Action::ToggleFolder { .. }
            | Action::CreateNode { .. }
            | Action::RenameNode { .. }
            | Action::DeleteNode { .. }
            | Action::UpdateContent { .. }) => self.reduce_tree_action(action),
            action @ (Action::ExplorerSetViewHeight { .. }
            | Action::ExplorerMoveSelection { .. }
            | Action::ExplorerScroll { .. }
            | Action::ExplorerClickRow { .. }
            | Action::ExplorerActivate
            | Action::ExplorerCollapse
            | Action::ExplorerExpand) => self.reduce_explorer_action(action),
            action @ (Action::EditorSetViewSize { .. }
            | Action::EditorInsertText(_)
            | Action::EditorNewline
            | Action::EditorIndent
            | Action::EditorBackspace
            | Action::EditorDelete
            | Action::EditorMove(_)
            | Action::EditorClick { .. }
            | Action::EditorScroll { .. }) => self.reduce_editor_action(action),
            Action::SplitPointerDown => DispatchResult {
                state_changed: self.state.ui.split.pointer_down(),
            },
            Action::SplitPointerMove { x, container } => DispatchResult {
                state_changed: self.state.ui.split.pointer_move(x, container),
            },
            Action::SplitPointerUp => DispatchResult {
                state_changed: self.state.ui.split.pointer_up(),
            },
            Action::SplitPointerCancel => DispatchResult {
                state_changed: self.state.ui.split.pointer_cancel(),
            },
            action @ (Action::ContextMenuOpen { .. }
            | Action::ContextMenuClose
            | Action::ContextMenuMoveSelection { .. }
            | Action::ContextMenuSetSelected { .. }
            | Action::ContextMenuConfirm) => self.reduce_context_menu_action(action),
            action @ (Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel) => self.reduce_input_dialog_action(action),
            action @ (Action::ConfirmDialogAccept | Action::ConfirmDialogCancel) => {
                self.reduce_confirm_dialog_action(action)
            }
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        tracing::debug!(command = command.name(), "run command");
        let state_changed = match command {
            Command::Quit => {
                self.state.ui.should_quit = true;
                true
            }
            Command::ToggleTheme => {
                self.state.ui.theme = self.state.ui.theme.toggled();
                true
            }
            Command::CloseTab => match self.state.active.clone() {
                Some(id) => self.close_file(&id),
                None => false,
            },
            Command::NextTab => self.cycle_tab(1),
            Command::PrevTab => self.cycle_tab(-1),
            Command::FocusExplorer => self.set_focus(FocusTarget::Explorer),
            Command::FocusEditor => self.set_focus(FocusTarget::Editor),
            Command::ToggleFocus => match self.state.ui.focus {
                FocusTarget::Explorer => self.set_focus(FocusTarget::Editor),
                FocusTarget::Editor => self.set_focus(FocusTarget::Explorer),
            },
            Command::ExplorerNewFile => self.open_new_node_dialog_for_selection(false),
            Command::ExplorerNewFolder => self.open_new_node_dialog_for_selection(true),
            Command::ExplorerRename => match self.state.explorer.selected.clone() {
                Some(id) => self.open_rename_dialog(&id),
                None => false,
            },
            Command::ExplorerDelete => match self.state.explorer.selected.clone() {
                Some(id) => self.open_delete_confirm(&id),
                None => false,
            },
            Command::ExplorerContextMenu => self.open_context_menu_for_selection(),
        };
        DispatchResult { state_changed }
    }

    fn set_focus(&mut self, target: FocusTarget) -> bool {
        if self.state.ui.focus == target {
            return false;
        }
        self.state.ui.focus = target;
        true
    }

    fn cycle_tab(&mut self, step: isize) -> bool {
        let len = self.state.open_tabs.len();
        if len < 2 {
            return false;
        }
        let Some(current) = self
            .state
            .active
            .as_ref()
            .and_then(|id| self.state.tab_index(id))
        else {
            return false;
        };
        let next = (current as isize + step).rem_euclid(len as isize) as usize;
        self.state.active = Some(self.state.open_tabs[next].id.clone());
        true
    }

    /// Installs `next` (if any) and brings every piece of derived state back in line with it.
    fn commit_tree(&mut self, next: Option<FileTree>) -> bool {
        let Some(tree) = next else {
            return false;
        };
        self.state.tree = tree;
        self.reconcile();
        true
    }

    fn reconcile(&mut self) {
        let state = &mut self.state;
        let tree = &state.tree;

        state
            .open_tabs
            .retain(|tab| tree.find(&tab.id).is_some_and(|node| !node.is_folder()));
        if state
            .active
            .as_ref()
            .is_some_and(|id| !state.open_tabs.iter().any(|tab| &tab.id == id))
        {
            state.active = None;
        }
        for tab in &mut state.open_tabs {
            if let Some(content) = tree.find(&tab.id).and_then(|node| node.content()) {
                tab.cursor = editor::clamp_to_char_boundary(content, tab.cursor);
            }
        }

        state.explorer.refresh_rows(tree);

        if state
            .ui
            .context_menu
            .target
            .as_ref()
            .is_some_and(|id| !tree.contains(id))
        {
            state.ui.context_menu = Default::default();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
