use super::layout::{self, ActivityItem, WorkbenchLayout};
use super::Workbench;
use crate::core::event::{MouseButton, MouseEvent, MouseEventKind};
use crate::core::Command;
use crate::kernel::{editor, Action, FocusTarget};
use crate::views::{compute_tab_row_layout, hit_test_tab, rect_contains, TabHit};

const WHEEL_STEP: isize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MouseTarget {
    /// A divider drag holds the pointer; nothing else sees the event.
    Capture,
    /// A modal prompt is open.
    Blocked,
    ContextMenu,
    Divider,
    ActivityBar,
    Explorer,
    Tabs,
    Editor,
    Nothing,
}

pub(super) struct MouseRouteInput {
    pub capturing: bool,
    pub modal: bool,
    pub menu_open: bool,
}

pub(super) fn route_mouse(
    layout: &WorkbenchLayout,
    input: MouseRouteInput,
    x: u16,
    y: u16,
) -> MouseTarget {
    if input.capturing {
        return MouseTarget::Capture;
    }
    if input.modal {
        return MouseTarget::Blocked;
    }
    if input.menu_open {
        return MouseTarget::ContextMenu;
    }
    let hit = |area| rect_contains(area, x, y);
    if hit(layout.divider) {
        MouseTarget::Divider
    } else if hit(layout.activity) {
        MouseTarget::ActivityBar
    } else if hit(layout.sidebar_header) || hit(layout.explorer) {
        MouseTarget::Explorer
    } else if hit(layout.tabs) {
        MouseTarget::Tabs
    } else if hit(layout.breadcrumbs) || hit(layout.content) {
        MouseTarget::Editor
    } else {
        MouseTarget::Nothing
    }
}

impl Workbench {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        let ui = &self.store.state().ui;
        let input = MouseRouteInput {
            capturing: self.drag.is_some(),
            modal: ui.has_modal(),
            menu_open: ui.context_menu.visible,
        };
        let target = route_mouse(&layout, input, event.column, event.row);
        tracing::trace!(?target, kind = ?event.kind, "mouse");

        match target {
            MouseTarget::Capture => self.handle_captured_mouse(event),
            MouseTarget::Blocked | MouseTarget::Nothing => false,
            MouseTarget::ContextMenu => self.handle_context_menu_mouse(&layout, event),
            MouseTarget::Divider => match event.kind {
                MouseEventKind::Down(MouseButton::Left) => self.begin_drag(),
                _ => false,
            },
            MouseTarget::ActivityBar => self.handle_activity_mouse(&layout, event),
            MouseTarget::Explorer => self.handle_explorer_mouse(&layout, event),
            MouseTarget::Tabs => self.handle_tabs_mouse(&layout, event),
            MouseTarget::Editor => self.handle_editor_mouse(&layout, event),
        }
    }

    fn handle_captured_mouse(&mut self, event: &MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                // The container is re-derived from the current terminal area on every move.
                let container = WorkbenchLayout::split_container(self.area);
                self.dispatch(Action::SplitPointerMove {
                    x: event.column,
                    container,
                })
            }
            MouseEventKind::Up(_) => self.end_drag(Action::SplitPointerUp),
            _ => false,
        }
    }

    fn handle_context_menu_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        let menu = &self.store.state().ui.context_menu;
        let rect = layout::context_menu_rect(layout, menu);
        let item = layout::context_menu_item_at(rect, menu.items.len(), event.column, event.row);
        match (event.kind, item) {
            (MouseEventKind::Down(MouseButton::Left), Some(index)) => {
                self.dispatch(Action::ContextMenuSetSelected { index });
                self.dispatch(Action::ContextMenuConfirm)
            }
            (MouseEventKind::Moved, Some(index)) => {
                self.dispatch(Action::ContextMenuSetSelected { index })
            }
            (MouseEventKind::Down(_), None) if !rect_contains(rect, event.column, event.row) => {
                self.dispatch(Action::ContextMenuClose)
            }
            _ => false,
        }
    }

    fn handle_activity_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match layout::activity_item_at(layout.activity, event.row) {
            Some(ActivityItem::Explorer) => {
                self.dispatch(Action::RunCommand(Command::FocusExplorer))
            }
            Some(ActivityItem::Settings) => {
                self.dispatch(Action::RunCommand(Command::ToggleTheme))
            }
            Some(ActivityItem::Search | ActivityItem::SourceControl) | None => false,
        }
    }

    fn handle_explorer_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        let explorer = &self.store.state().explorer;
        let row = self
            .explorer
            .hit_test_row(event.column, event.row, explorer.scroll_offset)
            .filter(|row| *row < explorer.rows().len());

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => match row {
                Some(row) => self.dispatch(Action::ExplorerClickRow { row }),
                None => self.dispatch(Action::SetFocus(FocusTarget::Explorer)),
            },
            MouseEventKind::Down(MouseButton::Right) => {
                let Some(target) = row.map(|row| explorer.rows()[row].id.clone()) else {
                    return false;
                };
                self.dispatch(Action::ContextMenuOpen {
                    target,
                    x: event.column.saturating_sub(layout.explorer.x),
                    y: event.row.saturating_sub(layout.explorer.y),
                })
            }
            MouseEventKind::ScrollUp => self.dispatch(Action::ExplorerScroll {
                delta: -WHEEL_STEP,
            }),
            MouseEventKind::ScrollDown => {
                self.dispatch(Action::ExplorerScroll { delta: WHEEL_STEP })
            }
            _ => false,
        }
    }

    fn handle_tabs_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        let state = self.store.state();
        let titles: Vec<&str> = state
            .open_tabs
            .iter()
            .map(|tab| state.tree.find(&tab.id).map_or("", |node| node.name.as_str()))
            .collect();
        let tabs = compute_tab_row_layout(layout.tabs, &titles);
        let Some(hit) = hit_test_tab(&tabs, event.column) else {
            return false;
        };

        match (event.kind, hit) {
            (MouseEventKind::Down(MouseButton::Left), TabHit::Close(index))
            | (MouseEventKind::Down(MouseButton::Middle), TabHit::Close(index))
            | (MouseEventKind::Down(MouseButton::Middle), TabHit::Select(index)) => {
                let id = state.open_tabs[index].id.clone();
                self.dispatch(Action::CloseFile { id })
            }
            (MouseEventKind::Down(MouseButton::Left), TabHit::Select(index)) => {
                let id = state.open_tabs[index].id.clone();
                let switched = self.dispatch(Action::SwitchTab { id });
                self.dispatch(Action::SetFocus(FocusTarget::Editor)) || switched
            }
            _ => false,
        }
    }

    fn handle_editor_mouse(&mut self, layout: &WorkbenchLayout, event: &MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::ScrollUp => {
                return self.dispatch(Action::EditorScroll {
                    delta: -WHEEL_STEP,
                })
            }
            MouseEventKind::ScrollDown => {
                return self.dispatch(Action::EditorScroll { delta: WHEEL_STEP })
            }
            MouseEventKind::Down(MouseButton::Left) => {}
            _ => return false,
        }

        let state = self.store.state();
        let (Some(tab), Some(content)) = (
            state.active_tab(),
            state.active_node().and_then(|node| node.content()),
        ) else {
            return self.dispatch(Action::SetFocus(FocusTarget::Editor));
        };
        if !rect_contains(layout.content, event.column, event.row) {
            return self.dispatch(Action::SetFocus(FocusTarget::Editor));
        }

        let (_, text) = layout.editor_columns(editor::line_count(content));
        let row = tab.scroll_row + usize::from(event.row - layout.content.y);
        let x = tab.scroll_col + usize::from(event.column.saturating_sub(text.x));
        self.dispatch(Action::EditorClick { row, x })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/mouse.rs"]
mod tests;
