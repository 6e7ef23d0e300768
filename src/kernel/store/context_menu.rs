use crate::kernel::state::{ContextMenuItem, ContextMenuState, InputDialogKind, PendingAction};
use crate::kernel::{Action, FocusTarget};
use crate::models::NodeId;

impl super::Store {
    pub(super) fn reduce_context_menu_action(&mut self, action: Action) -> super::DispatchResult {
        let state_changed = match action {
            Action::ContextMenuOpen { target, x, y } => self.open_context_menu(target, x, y),
            Action::ContextMenuClose => {
                if !self.state.ui.context_menu.visible {
                    false
                } else {
                    self.state.ui.context_menu = ContextMenuState::default();
                    true
                }
            }
            Action::ContextMenuMoveSelection { delta } => {
                let menu = &mut self.state.ui.context_menu;
                if !menu.visible || menu.items.is_empty() {
                    false
                } else {
                    let len = menu.items.len() as isize;
                    let prev = menu.selected;
                    menu.selected = (prev as isize + delta).rem_euclid(len) as usize;
                    menu.selected != prev
                }
            }
            Action::ContextMenuSetSelected { index } => {
                let menu = &mut self.state.ui.context_menu;
                if !menu.visible || index >= menu.items.len() || menu.selected == index {
                    false
                } else {
                    menu.selected = index;
                    true
                }
            }
            Action::ContextMenuConfirm => {
                let menu = std::mem::take(&mut self.state.ui.context_menu);
                if !menu.visible {
                    return super::DispatchResult {
                        state_changed: false,
                    };
                }
                let (Some(item), Some(target)) = (menu.items.get(menu.selected), menu.target)
                else {
                    return super::DispatchResult {
                        state_changed: true,
                    };
                };
                tracing::debug!(item = item.label(), target = %target, "context menu");
                match item {
                    ContextMenuItem::NewFile => self.open_new_node_dialog(&target, false),
                    ContextMenuItem::NewFolder => self.open_new_node_dialog(&target, true),
                    ContextMenuItem::Rename => self.open_rename_dialog(&target),
                    ContextMenuItem::Delete => self.open_delete_confirm(&target),
                };
                true
            }
            _ => false,
        };
        super::DispatchResult { state_changed }
    }

    fn open_context_menu(&mut self, target: NodeId, x: u16, y: u16) -> bool {
        if self.state.ui.has_modal() || !self.state.tree.contains(&target) {
            return false;
        }
        let prev = self.state.ui.context_menu.clone();
        let focus_changed = self.set_focus(FocusTarget::Explorer);
        let selection_changed =
            self.state.explorer.selected.replace(target.clone()).as_ref() != Some(&target);

        self.state.ui.context_menu = ContextMenuState {
            visible: true,
            anchor: (x, y),
            selected: 0,
            items: ContextMenuItem::ALL.to_vec(),
            target: Some(target),
        };
        focus_changed || selection_changed || self.state.ui.context_menu != prev
    }

    /// Opens the menu on the selected explorer row, anchored next to it.
    pub(super) fn open_context_menu_for_selection(&mut self) -> bool {
        let Some(id) = self.state.explorer.selected.clone() else {
            return false;
        };
        let explorer = &self.state.explorer;
        let row = explorer
            .selected_index()
            .map(|index| index.saturating_sub(explorer.scroll_offset))
            .unwrap_or(0);
        let y = u16::try_from(row).unwrap_or(u16::MAX);
        self.open_context_menu(id, 0, y)
    }

    /// The folder new nodes go into when `target` was clicked: the folder itself, or the
    /// parent of a file.
    fn creation_parent(&self, target: &NodeId) -> Option<NodeId> {
        let node = self.state.tree.find(target)?;
        if node.is_folder() {
            Some(node.id.clone())
        } else {
            self.state.tree.parent_of(target).map(|parent| parent.id.clone())
        }
    }

    pub(super) fn open_new_node_dialog(&mut self, target: &NodeId, is_folder: bool) -> bool {
        let Some(parent) = self.creation_parent(target) else {
            return false;
        };
        let dialog = &mut self.state.ui.input_dialog;
        dialog.reset();
        dialog.visible = true;
        if is_folder {
            dialog.title = "New Folder".to_string();
            dialog.kind = Some(InputDialogKind::NewFolder { parent });
        } else {
            dialog.title = "New File".to_string();
            dialog.kind = Some(InputDialogKind::NewFile { parent });
        }
        true
    }

    pub(super) fn open_new_node_dialog_for_selection(&mut self, is_folder: bool) -> bool {
        let target = self
            .state
            .explorer
            .selected
            .clone()
            .or_else(|| self.state.tree.roots().first().map(|node| node.id.clone()));
        match target {
            Some(target) => self.open_new_node_dialog(&target, is_folder),
            None => false,
        }
    }

    pub(super) fn open_rename_dialog(&mut self, id: &NodeId) -> bool {
        let Some(node) = self.state.tree.find(id) else {
            return false;
        };
        let name = node.name.to_string();
        let dialog = &mut self.state.ui.input_dialog;
        dialog.reset();
        dialog.visible = true;
        dialog.title = "Rename".to_string();
        dialog.cursor = name.len();
        dialog.value = name;
        dialog.kind = Some(InputDialogKind::Rename { id: id.clone() });
        true
    }

    pub(super) fn open_delete_confirm(&mut self, id: &NodeId) -> bool {
        let Some(node) = self.state.tree.find(id) else {
            return false;
        };
        let message = if node.is_folder() {
            format!("Delete folder '{}' and its contents?", node.name)
        } else {
            format!("Delete '{}'?", node.name)
        };
        let dialog = &mut self.state.ui.confirm_dialog;
        dialog.visible = true;
        dialog.message = message;
        dialog.on_confirm = Some(PendingAction::DeleteNode { id: id.clone() });
        true
    }
}
