use super::Workbench;
use crate::core::event::{Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::core::Command;
use crate::kernel::editor::Motion;
use crate::kernel::{Action, FocusTarget};

impl Workbench {
    pub(super) fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.kind == KeyEventKind::Release {
            return false;
        }

        let ui = &self.store.state().ui;
        if ui.confirm_dialog.visible {
            return self.handle_confirm_dialog_key(event);
        }
        if ui.input_dialog.visible {
            return self.handle_input_dialog_key(event);
        }
        if ui.context_menu.visible {
            return self.handle_context_menu_key(event);
        }

        if let Some(command) = self.keybindings.get(&Key::from(*event)) {
            return self.dispatch(Action::RunCommand(command));
        }

        match self.focus() {
            FocusTarget::Explorer => self.handle_explorer_key(event),
            FocusTarget::Editor => self.handle_editor_key(event),
        }
    }

    pub(super) fn handle_paste(&mut self, text: &str) -> bool {
        let ui = &self.store.state().ui;
        if ui.input_dialog.visible {
            // Names are single-line.
            let mut changed = false;
            for ch in text.chars().filter(|ch| !ch.is_control()) {
                changed |= self.dispatch(Action::InputDialogAppend(ch));
            }
            return changed;
        }
        if ui.has_modal() || ui.context_menu.visible || self.focus() != FocusTarget::Editor {
            return false;
        }
        self.dispatch(Action::EditorInsertText(text.to_string()))
    }

    fn handle_confirm_dialog_key(&mut self, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.dispatch(Action::ConfirmDialogAccept)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.dispatch(Action::ConfirmDialogCancel)
            }
            _ => false,
        }
    }

    fn handle_input_dialog_key(&mut self, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Enter => self.dispatch(Action::InputDialogAccept),
            KeyCode::Esc => self.dispatch(Action::InputDialogCancel),
            KeyCode::Backspace => self.dispatch(Action::InputDialogBackspace),
            KeyCode::Left => self.dispatch(Action::InputDialogCursorLeft),
            KeyCode::Right => self.dispatch(Action::InputDialogCursorRight),
            KeyCode::Char(ch) if is_text_input(event.modifiers) => {
                self.dispatch(Action::InputDialogAppend(ch))
            }
            _ => false,
        }
    }

    fn handle_context_menu_key(&mut self, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Up => self.dispatch(Action::ContextMenuMoveSelection { delta: -1 }),
            KeyCode::Down | KeyCode::Tab => {
                self.dispatch(Action::ContextMenuMoveSelection { delta: 1 })
            }
            KeyCode::Enter => self.dispatch(Action::ContextMenuConfirm),
            KeyCode::Esc => self.dispatch(Action::ContextMenuClose),
            _ => false,
        }
    }

    fn handle_explorer_key(&mut self, event: &KeyEvent) -> bool {
        let page = self.store.state().explorer.view_height.max(1) as isize;
        let action = match event.code {
            KeyCode::Up => Action::ExplorerMoveSelection { delta: -1 },
            KeyCode::Down => Action::ExplorerMoveSelection { delta: 1 },
            KeyCode::PageUp => Action::ExplorerMoveSelection { delta: -page },
            KeyCode::PageDown => Action::ExplorerMoveSelection { delta: page },
            KeyCode::Enter | KeyCode::Char(' ') => Action::ExplorerActivate,
            KeyCode::Left => Action::ExplorerCollapse,
            KeyCode::Right => Action::ExplorerExpand,
            KeyCode::F(2) => Action::RunCommand(Command::ExplorerRename),
            KeyCode::Delete => Action::RunCommand(Command::ExplorerDelete),
            _ => return false,
        };
        self.dispatch(action)
    }

    fn handle_editor_key(&mut self, event: &KeyEvent) -> bool {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let action = match event.code {
            KeyCode::Char(ch) if is_text_input(event.modifiers) => {
                Action::EditorInsertText(ch.to_string())
            }
            KeyCode::Enter => Action::EditorNewline,
            KeyCode::Tab => Action::EditorIndent,
            KeyCode::Backspace => Action::EditorBackspace,
            KeyCode::Delete => Action::EditorDelete,
            KeyCode::Left => Action::EditorMove(Motion::Left),
            KeyCode::Right => Action::EditorMove(Motion::Right),
            KeyCode::Up => Action::EditorMove(Motion::Up),
            KeyCode::Down => Action::EditorMove(Motion::Down),
            KeyCode::Home if ctrl => Action::EditorMove(Motion::DocStart),
            KeyCode::End if ctrl => Action::EditorMove(Motion::DocEnd),
            KeyCode::Home => Action::EditorMove(Motion::LineStart),
            KeyCode::End => Action::EditorMove(Motion::LineEnd),
            KeyCode::PageUp => Action::EditorMove(Motion::PageUp),
            KeyCode::PageDown => Action::EditorMove(Motion::PageDown),
            KeyCode::Esc => Action::SetFocus(FocusTarget::Explorer),
            _ => return false,
        };
        self.dispatch(action)
    }
}

/// Plain or shifted characters are text; chords with Ctrl/Alt/Super are not.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let mut rest = modifiers;
    rest.remove(KeyModifiers::SHIFT);
    rest.is_empty()
}
