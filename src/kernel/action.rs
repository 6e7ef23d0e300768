use crate::core::Command;
use crate::models::NodeId;

use super::editor::Motion;
use super::split::ContainerBounds;
use super::state::FocusTarget;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    SetFocus(FocusTarget),

    /// Open `id` as a tab (if not yet open) and make it active.
    SelectFile {
        id: NodeId,
    },
    CloseFile {
        id: NodeId,
    },
    SwitchTab {
        id: NodeId,
    },
    ToggleFolder {
        id: NodeId,
    },
    CreateNode {
        parent: NodeId,
        name: String,
        is_folder: bool,
    },
    RenameNode {
        id: NodeId,
        name: String,
    },
    DeleteNode {
        id: NodeId,
    },
    UpdateContent {
        id: NodeId,
        content: String,
    },

    ExplorerSetViewHeight {
        height: usize,
    },
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerScroll {
        delta: isize,
    },
    /// Click on a visible row (index into the flattened rows).
    ExplorerClickRow {
        row: usize,
    },
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerExpand,

    EditorSetViewSize {
        width: usize,
        height: usize,
    },
    EditorInsertText(String),
    EditorNewline,
    EditorIndent,
    EditorBackspace,
    EditorDelete,
    EditorMove(Motion),
    /// Click inside the text area: `row` is a document row, `x` a display column.
    EditorClick {
        row: usize,
        x: usize,
    },
    EditorScroll {
        delta: isize,
    },

    SplitPointerDown,
    SplitPointerMove {
        x: u16,
        container: ContainerBounds,
    },
    SplitPointerUp,
    SplitPointerCancel,

    ContextMenuOpen {
        target: NodeId,
        x: u16,
        y: u16,
    },
    ContextMenuClose,
    ContextMenuMoveSelection {
        delta: isize,
    },
    ContextMenuSetSelected {
        index: usize,
    },
    ContextMenuConfirm,

    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,

    ConfirmDialogAccept,
    ConfirmDialogCancel,
}
