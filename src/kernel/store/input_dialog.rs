use crate::kernel::{Action, InputDialogKind};

fn name_error(value: &str) -> Option<&'static str> {
    if value.contains('/') || value.contains('\\') || value == "." || value == ".." {
        Some("Invalid name")
    } else {
        None
    }
}

impl super::Store {
    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        let dialog = &mut self.state.ui.input_dialog;
        if !dialog.visible {
            return super::DispatchResult {
                state_changed: false,
            };
        }

        let state_changed = match action {
            Action::InputDialogAppend(ch) => {
                dialog.error = None;
                dialog.cursor = dialog.cursor.min(dialog.value.len());
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                true
            }
            Action::InputDialogBackspace => {
                if dialog.cursor == 0 {
                    false
                } else {
                    dialog.error = None;
                    let prev = dialog.value[..dialog.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    dialog.value.drain(prev..dialog.cursor);
                    dialog.cursor = prev;
                    true
                }
            }
            Action::InputDialogCursorLeft => {
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != dialog.cursor;
                dialog.cursor = prev;
                changed
            }
            Action::InputDialogCursorRight => {
                let next = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                let changed = next != dialog.cursor;
                dialog.cursor = next;
                changed
            }
            Action::InputDialogCancel => {
                dialog.reset();
                true
            }
            Action::InputDialogAccept => {
                let value = dialog.value.trim().to_string();
                if !value.is_empty() {
                    if let Some(error) = name_error(&value) {
                        let prev = dialog.error.replace(error.to_string());
                        return super::DispatchResult {
                            state_changed: prev.as_deref() != Some(error),
                        };
                    }
                }

                let kind = dialog.kind.take();
                dialog.reset();
                // An empty name dismisses the prompt without touching the tree.
                if value.is_empty() {
                    return super::DispatchResult {
                        state_changed: true,
                    };
                }

                let follow_up = match kind {
                    Some(InputDialogKind::NewFile { parent }) => Some(Action::CreateNode {
                        parent,
                        name: value,
                        is_folder: false,
                    }),
                    Some(InputDialogKind::NewFolder { parent }) => Some(Action::CreateNode {
                        parent,
                        name: value,
                        is_folder: true,
                    }),
                    Some(InputDialogKind::Rename { id }) => {
                        Some(Action::RenameNode { id, name: value })
                    }
                    None => None,
                };
                if let Some(action) = follow_up {
                    self.reduce_tree_action(action);
                }
                true
            }
            _ => false,
        };
        super::DispatchResult { state_changed }
    }
}
