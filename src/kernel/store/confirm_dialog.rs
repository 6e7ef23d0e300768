use crate::kernel::{Action, PendingAction};

impl super::Store {
    pub(super) fn reduce_confirm_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        if !self.state.ui.confirm_dialog.visible {
            return super::DispatchResult {
                state_changed: false,
            };
        }
        let dialog = std::mem::take(&mut self.state.ui.confirm_dialog);

        if let (Action::ConfirmDialogAccept, Some(pending)) = (action, dialog.on_confirm) {
            match pending {
                PendingAction::DeleteNode { id } => {
                    self.reduce_tree_action(Action::DeleteNode { id });
                }
            }
        }

        super::DispatchResult {
            state_changed: true,
        }
    }
}
