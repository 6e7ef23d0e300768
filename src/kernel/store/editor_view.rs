use crate::kernel::editor::{self, Edit, Motion};
use crate::kernel::{Action, FocusTarget};

impl super::Store {
    pub(super) fn reduce_editor_action(&mut self, action: Action) -> super::DispatchResult {
        let state_changed = match action {
            Action::EditorSetViewSize { width, height } => {
                let view = &mut self.state.editor;
                if view.view_width == width && view.view_height == height {
                    false
                } else {
                    view.view_width = width;
                    view.view_height = height;
                    self.follow_active_cursor();
                    true
                }
            }
            Action::EditorInsertText(text) => {
                // Terminals deliver pasted line breaks as `\r` or `\r\n`.
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.apply_edit(|content, cursor| Some(editor::insert(content, cursor, &text)))
            }
            Action::EditorNewline => {
                self.apply_edit(|content, cursor| Some(editor::insert(content, cursor, "\n")))
            }
            Action::EditorIndent => {
                let spaces = " ".repeat(usize::from(self.state.editor.tab_size));
                self.apply_edit(|content, cursor| Some(editor::insert(content, cursor, &spaces)))
            }
            Action::EditorBackspace => self.apply_edit(editor::backspace),
            Action::EditorDelete => self.apply_edit(editor::delete_forward),
            Action::EditorMove(motion) => self.move_active_cursor(motion),
            Action::EditorClick { row, x } => {
                let focus_changed = self.set_focus(FocusTarget::Editor);
                let Some(content) = self.active_content() else {
                    return super::DispatchResult {
                        state_changed: focus_changed,
                    };
                };
                let tab_size = self.state.editor.tab_size;
                let row = row.min(editor::line_count(&content).saturating_sub(1));
                let range = editor::line_range(&content, row);
                let target =
                    range.start + editor::byte_at_display_x(&content[range.clone()], x, tab_size);
                self.set_active_cursor(target) || focus_changed
            }
            Action::EditorScroll { delta } => {
                let Some(content) = self.active_content() else {
                    return super::DispatchResult {
                        state_changed: false,
                    };
                };
                let height = self.state.editor.view_height;
                match self.state.active_tab_mut() {
                    Some(tab) => {
                        let prev = tab.scroll_row;
                        editor::scroll_by(tab, &content, delta, height);
                        tab.scroll_row != prev
                    }
                    None => false,
                }
            }
            _ => false,
        };
        super::DispatchResult { state_changed }
    }

    fn active_content(&self) -> Option<String> {
        self.state
            .active_node()
            .and_then(|node| node.content())
            .map(str::to_string)
    }

    /// Runs `edit` on the active file and routes the result through the tree as a content update.
    fn apply_edit(&mut self, edit: impl FnOnce(&str, usize) -> Option<Edit>) -> bool {
        let Some(tab) = self.state.active_tab() else {
            return false;
        };
        let id = tab.id.clone();
        let cursor = tab.cursor;
        let Some(content) = self.state.active_node().and_then(|node| node.content()) else {
            return false;
        };
        let Some(Edit { text, cursor }) = edit(content, cursor) else {
            return false;
        };

        let next = self.state.tree.try_update_content(&id, &text);
        let content_changed = self.commit_tree(next);
        let cursor_changed = self.set_active_cursor(cursor);
        content_changed || cursor_changed
    }

    fn move_active_cursor(&mut self, motion: Motion) -> bool {
        let Some(tab) = self.state.active_tab() else {
            return false;
        };
        let Some(content) = self.state.active_node().and_then(|node| node.content()) else {
            return false;
        };
        let page = self.state.editor.view_height.saturating_sub(1).max(1);
        let target = editor::move_cursor(content, tab.cursor, motion, page);
        self.set_active_cursor(target)
    }

    fn set_active_cursor(&mut self, cursor: usize) -> bool {
        let Some(tab) = self.state.active_tab_mut() else {
            return false;
        };
        let prev = (tab.cursor, tab.scroll_row, tab.scroll_col);
        tab.cursor = cursor;
        self.follow_active_cursor();
        self.state
            .active_tab()
            .is_some_and(|tab| (tab.cursor, tab.scroll_row, tab.scroll_col) != prev)
    }

    fn follow_active_cursor(&mut self) {
        let Some(content) = self.active_content() else {
            return;
        };
        let view = self.state.editor;
        if let Some(tab) = self.state.active_tab_mut() {
            editor::follow_cursor(
                tab,
                &content,
                view.view_height,
                view.view_width,
                view.tab_size,
            );
        }
    }
}
