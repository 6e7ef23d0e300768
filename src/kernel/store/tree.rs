use crate::kernel::state::OpenTab;
use crate::kernel::Action;
use crate::models::{Node, NodeId};

impl super::Store {
    pub(super) fn reduce_tree_action(&mut self, action: Action) -> super::DispatchResult {
        let state_changed = match action {
            Action::SelectFile { id } => self.select_file(id),
            Action::CloseFile { id } => self.close_file(&id),
            Action::SwitchTab { id } => self.switch_tab(&id),
            Action::ToggleFolder { id } => {
                let next = self.state.tree.try_toggle_folder(&id);
                self.commit_tree(next)
            }
            Action::CreateNode {
                parent,
                name,
                is_folder,
            } => self.create_node(&parent, &name, is_folder),
            Action::RenameNode { id, name } => {
                let next = self.state.tree.try_rename_node(&id, &name);
                let changed = self.commit_tree(next);
                if changed {
                    tracing::info!(id = %id, name = %name, "node renamed");
                }
                changed
            }
            Action::DeleteNode { id } => self.delete_node(&id),
            Action::UpdateContent { id, content } => {
                let next = self.state.tree.try_update_content(&id, &content);
                self.commit_tree(next)
            }
            _ => false,
        };
        super::DispatchResult { state_changed }
    }

    fn select_file(&mut self, id: NodeId) -> bool {
        let is_file = self
            .state
            .tree
            .find(&id)
            .is_some_and(|node| !node.is_folder());
        if !is_file {
            return false;
        }

        let mut changed = false;
        if !self.state.is_open(&id) {
            self.state.open_tabs.push(OpenTab::new(id.clone()));
            changed = true;
        }
        if self.state.explorer.selected.as_ref() != Some(&id) {
            self.state.explorer.selected = Some(id.clone());
            changed = true;
        }
        if self.state.active.as_ref() != Some(&id) {
            self.state.active = Some(id);
            changed = true;
        }
        changed
    }

    pub(super) fn close_file(&mut self, id: &NodeId) -> bool {
        let Some(index) = self.state.tab_index(id) else {
            return false;
        };
        self.state.open_tabs.remove(index);
        if self.state.active.as_ref() == Some(id) {
            self.state.active = self.state.open_tabs.last().map(|tab| tab.id.clone());
        }
        true
    }

    fn switch_tab(&mut self, id: &NodeId) -> bool {
        if !self.state.is_open(id) || self.state.active.as_ref() == Some(id) {
            return false;
        }
        self.state.active = Some(id.clone());
        true
    }

    fn create_node(&mut self, parent: &NodeId, name: &str, is_folder: bool) -> bool {
        let tree = &self.state.tree;
        let id = self.state.ids.fresh_id(name, |id| tree.contains(id));
        let node = if is_folder {
            Node::folder(id.clone(), name, Vec::new(), false)
        } else {
            Node::file(id.clone(), name, "")
        };

        let next = self.state.tree.try_insert_node(parent, node);
        if !self.commit_tree(next) {
            tracing::debug!(parent = %parent, name = %name, "create ignored");
            return false;
        }
        tracing::info!(id = %id, parent = %parent, is_folder, "node created");
        self.state.explorer.selected = Some(id);
        self.state.explorer.reveal_selected();
        true
    }

    fn delete_node(&mut self, id: &NodeId) -> bool {
        let removed = self.state.tree.subtree_ids(id).len();
        let next = self.state.tree.try_delete_node(id);
        // Reconciling drops the tabs of every removed node and clears a removed active file.
        if !self.commit_tree(next) {
            return false;
        }
        tracing::info!(id = %id, removed, "node deleted");
        true
    }
}
