use crate::kernel::{Action, FocusTarget};

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        let state_changed = match action {
            Action::ExplorerSetViewHeight { height } => {
                let explorer = &mut self.state.explorer;
                if explorer.view_height == height {
                    false
                } else {
                    explorer.view_height = height;
                    explorer.clamp_scroll();
                    true
                }
            }
            Action::ExplorerMoveSelection { delta } => self.move_explorer_selection(delta),
            Action::ExplorerScroll { delta } => {
                let explorer = &mut self.state.explorer;
                let prev = explorer.scroll_offset;
                explorer.scroll_offset = prev.saturating_add_signed(delta);
                explorer.clamp_scroll();
                explorer.scroll_offset != prev
            }
            Action::ExplorerClickRow { row } => {
                let focus_changed = self.set_focus(FocusTarget::Explorer);
                let Some(entry) = self.state.explorer.rows().get(row).cloned() else {
                    return super::DispatchResult {
                        state_changed: focus_changed,
                    };
                };
                let selection_changed =
                    self.state.explorer.selected.replace(entry.id.clone()).as_ref() != Some(&entry.id);
                let changed = if entry.is_dir {
                    let next = self.state.tree.try_toggle_folder(&entry.id);
                    self.commit_tree(next)
                } else {
                    self.reduce_tree_action(Action::SelectFile { id: entry.id })
                        .state_changed
                };
                changed || focus_changed || selection_changed
            }
            Action::ExplorerActivate => {
                let Some(id) = self.state.explorer.selected.clone() else {
                    return super::DispatchResult {
                        state_changed: false,
                    };
                };
                match self.state.tree.find(&id).map(|node| node.is_folder()) {
                    Some(true) => {
                        let next = self.state.tree.try_toggle_folder(&id);
                        self.commit_tree(next)
                    }
                    Some(false) => {
                        let opened = self
                            .reduce_tree_action(Action::SelectFile { id })
                            .state_changed;
                        opened | self.set_focus(FocusTarget::Editor)
                    }
                    None => false,
                }
            }
            Action::ExplorerCollapse => self.collapse_selected(),
            Action::ExplorerExpand => {
                let Some(id) = self.state.explorer.selected.clone() else {
                    return super::DispatchResult {
                        state_changed: false,
                    };
                };
                let collapsed_folder = self
                    .state
                    .tree
                    .find(&id)
                    .is_some_and(|node| node.is_folder() && !node.is_expanded());
                if collapsed_folder {
                    let next = self.state.tree.try_toggle_folder(&id);
                    self.commit_tree(next)
                } else {
                    false
                }
            }
            _ => false,
        };
        super::DispatchResult { state_changed }
    }

    fn move_explorer_selection(&mut self, delta: isize) -> bool {
        let anchor = self.visible_selection_row();
        let explorer = &mut self.state.explorer;
        let len = explorer.rows().len();
        if len == 0 {
            return false;
        }
        let next = match anchor {
            Some(index) => index.saturating_add_signed(delta).min(len - 1),
            None if delta < 0 => len - 1,
            None => 0,
        };
        let id = explorer.rows()[next].id.clone();
        if explorer.selected.as_ref() == Some(&id) {
            return false;
        }
        explorer.selected = Some(id);
        explorer.reveal_selected();
        true
    }

    /// Row of the selection, or of its nearest visible ancestor when it sits under a collapsed
    /// folder.
    fn visible_selection_row(&self) -> Option<usize> {
        let explorer = &self.state.explorer;
        if let Some(index) = explorer.selected_index() {
            return Some(index);
        }
        let selected = explorer.selected.as_ref()?;
        self.state
            .tree
            .ancestors(selected)?
            .iter()
            .rev()
            .find_map(|node| explorer.rows().iter().position(|row| row.id == node.id))
    }

    /// Collapses the selected folder, or moves the selection to the parent folder.
    fn collapse_selected(&mut self) -> bool {
        let Some(id) = self.state.explorer.selected.clone() else {
            return false;
        };
        let Some(node) = self.state.tree.find(&id) else {
            return false;
        };
        if node.is_expanded() {
            let next = self.state.tree.try_toggle_folder(&id);
            return self.commit_tree(next);
        }
        let Some(parent) = self.state.tree.parent_of(&id).map(|p| p.id.clone()) else {
            return false;
        };
        self.state.explorer.selected = Some(parent);
        self.state.explorer.reveal_selected();
        true
    }
}
