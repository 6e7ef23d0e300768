use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::{FileTree, FileTreeRow, Node, NodeId, NodeIdGenerator};

use super::editor;
use super::split::{SplitConfig, SplitLayout};

pub const APP_TITLE: &str = "VSCode Clone";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

/// Startup values taken from the settings file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub theme: ThemeKind,
    pub split: SplitConfig,
    pub indent_width: u16,
    pub tab_size: u8,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::Dark,
            split: SplitConfig::default(),
            indent_width: 2,
            tab_size: 2,
        }
    }
}

/// An entry of the open-file set plus the per-tab view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTab {
    pub id: NodeId,
    /// Byte offset into the file's content.
    pub cursor: usize,
    pub scroll_row: usize,
    /// Horizontal scroll in display cells.
    pub scroll_col: usize,
}

impl OpenTab {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            cursor: 0,
            scroll_row: 0,
            scroll_col: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDialogKind {
    NewFile { parent: NodeId },
    NewFolder { parent: NodeId },
    Rename { id: NodeId },
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteNode { id: NodeId },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuItem {
    NewFile,
    NewFolder,
    Rename,
    Delete,
}

impl ContextMenuItem {
    pub const ALL: [ContextMenuItem; 4] = [
        ContextMenuItem::NewFile,
        ContextMenuItem::NewFolder,
        ContextMenuItem::Rename,
        ContextMenuItem::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContextMenuItem::NewFile => "New File",
            ContextMenuItem::NewFolder => "New Folder",
            ContextMenuItem::Rename => "Rename",
            ContextMenuItem::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextMenuState {
    pub visible: bool,
    pub anchor: (u16, u16),
    pub selected: usize,
    pub items: Vec<ContextMenuItem>,
    /// The row the menu was opened on.
    pub target: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub theme: ThemeKind,
    pub split: SplitLayout,
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub context_menu: ContextMenuState,
    pub should_quit: bool,
}

impl UiState {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            focus: FocusTarget::Explorer,
            theme: config.theme,
            split: SplitLayout::new(config.split),
            input_dialog: InputDialogState::default(),
            confirm_dialog: ConfirmDialogState::default(),
            context_menu: ContextMenuState::default(),
            should_quit: false,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.input_dialog.visible || self.confirm_dialog.visible
    }
}

#[derive(Debug, Clone)]
pub struct ExplorerState {
    pub selected: Option<NodeId>,
    pub scroll_offset: usize,
    pub view_height: usize,
    pub indent_width: u16,
    rows: Vec<FileTreeRow>,
}

impl ExplorerState {
    pub fn new(tree: &FileTree, indent_width: u16) -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            view_height: 10,
            indent_width,
            rows: tree.flatten_for_view(),
        }
    }

    pub fn rows(&self) -> &[FileTreeRow] {
        &self.rows
    }

    pub fn refresh_rows(&mut self, tree: &FileTree) {
        self.rows = tree.flatten_for_view();
        // A selection hidden under a collapsed folder survives; a deleted one does not.
        if self.selected.as_ref().is_some_and(|id| !tree.contains(id)) {
            self.selected = None;
        }
        self.clamp_scroll();
    }

    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.rows.iter().position(|row| &row.id == selected)
    }

    pub fn clamp_scroll(&mut self) {
        let max = self.rows.len().saturating_sub(self.view_height.max(1));
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Keeps the selected row inside the visible window.
    pub fn reveal_selected(&mut self) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let height = self.view_height.max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + height {
            self.scroll_offset = index + 1 - height;
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EditorViewState {
    pub view_height: usize,
    pub view_width: usize,
    pub tab_size: u8,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub tree: FileTree,
    pub open_tabs: Vec<OpenTab>,
    pub active: Option<NodeId>,
    pub ids: NodeIdGenerator,
    pub ui: UiState,
    pub explorer: ExplorerState,
    pub editor: EditorViewState,
}

impl AppState {
    pub fn new(tree: FileTree, config: ViewConfig) -> Self {
        let explorer = ExplorerState::new(&tree, config.indent_width);
        Self {
            tree,
            open_tabs: Vec::new(),
            active: None,
            ids: NodeIdGenerator::new(),
            ui: UiState::new(&config),
            explorer,
            editor: EditorViewState {
                view_height: 20,
                view_width: 80,
                tab_size: config.tab_size.max(1),
            },
        }
    }

    pub fn is_open(&self, id: &NodeId) -> bool {
        self.open_tabs.iter().any(|tab| &tab.id == id)
    }

    pub fn tab_index(&self, id: &NodeId) -> Option<usize> {
        self.open_tabs.iter().position(|tab| &tab.id == id)
    }

    pub fn active_tab(&self) -> Option<&OpenTab> {
        let active = self.active.as_ref()?;
        self.open_tabs.iter().find(|tab| &tab.id == active)
    }

    pub(crate) fn active_tab_mut(&mut self) -> Option<&mut OpenTab> {
        let active = self.active.as_ref()?;
        self.open_tabs.iter_mut().find(|tab| &tab.id == active)
    }

    /// The active file, resolved through the tree so it always reflects the latest content.
    pub fn active_node(&self) -> Option<&Arc<Node>> {
        self.active.as_ref().and_then(|id| self.tree.find(id))
    }

    pub fn title(&self) -> String {
        match self.active_node() {
            Some(node) => format!("{} - {APP_TITLE}", node.name),
            None => APP_TITLE.to_string(),
        }
    }

    /// One-based `(line, column)` of the active cursor.
    pub fn cursor_position(&self) -> Option<(usize, usize)> {
        let tab = self.active_tab()?;
        let content = self.active_node()?.content()?;
        let (row, col) = editor::line_col(content, tab.cursor);
        Some((row + 1, col + 1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
