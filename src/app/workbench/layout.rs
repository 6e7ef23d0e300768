//! Workbench geometry: title bar, activity bar, explorer | divider | editor, status bar.
//!
//! Everything is derived from the terminal area and the split ratio, so rendering and mouse
//! routing always agree on where things are.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::kernel::{ContainerBounds, ContextMenuState, SplitLayout};

pub(super) const ACTIVITY_BAR_WIDTH: u16 = 3;
const DIVIDER_WIDTH: u16 = 1;
const ACTIVITY_SLOT_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkbenchLayout {
    pub area: Rect,
    pub title: Rect,
    pub activity: Rect,
    pub sidebar_header: Rect,
    pub explorer: Rect,
    pub divider: Rect,
    pub tabs: Rect,
    pub breadcrumbs: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl WorkbenchLayout {
    pub fn compute(area: Rect, split: &SplitLayout) -> Self {
        let (title, rest) = take_top(area, 1);
        let (body, status) = take_bottom(rest, 1);

        let activity_width = ACTIVITY_BAR_WIDTH.min(body.width);
        let activity = Rect::new(body.x, body.y, activity_width, body.height);

        let container = Self::split_container(area);
        let left = split.left_width(container.width).min(container.width);
        let sidebar = Rect::new(container.left, body.y, left, body.height);
        let (sidebar_header, explorer) = take_top(sidebar, 1);

        let divider_width = DIVIDER_WIDTH.min(container.width - left);
        let divider = Rect::new(sidebar.x + left, body.y, divider_width, body.height);

        let editor_width = container.width - left - divider_width;
        let editor = Rect::new(divider.x + divider_width, body.y, editor_width, body.height);
        let (tabs, rest) = take_top(editor, 1);
        let (breadcrumbs, content) = take_top(rest, 1);

        Self {
            area,
            title,
            activity,
            sidebar_header,
            explorer,
            divider,
            tabs,
            breadcrumbs,
            content,
            status,
        }
    }

    /// The region the split ratio is measured against: everything right of the activity bar.
    pub fn split_container(area: Rect) -> ContainerBounds {
        let activity_width = ACTIVITY_BAR_WIDTH.min(area.width);
        ContainerBounds {
            left: area.x + activity_width,
            width: area.width - activity_width,
        }
    }

    /// Gutter and text columns of the editor content for a file with `line_count` lines.
    pub fn editor_columns(&self, line_count: usize) -> (Rect, Rect) {
        let gutter = gutter_width(line_count).min(self.content.width);
        let left = Rect::new(self.content.x, self.content.y, gutter, self.content.height);
        let right = Rect::new(
            self.content.x + gutter,
            self.content.y,
            self.content.width - gutter,
            self.content.height,
        );
        (left, right)
    }
}

/// ` 123  `: one leading space, at least three digits, two trailing spaces.
pub fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).to_string().len().max(3);
    u16::try_from(digits + 3).unwrap_or(u16::MAX)
}

fn take_top(area: Rect, rows: u16) -> (Rect, Rect) {
    let rows = rows.min(area.height);
    (
        Rect::new(area.x, area.y, area.width, rows),
        Rect::new(area.x, area.y + rows, area.width, area.height - rows),
    )
}

fn take_bottom(area: Rect, rows: u16) -> (Rect, Rect) {
    let rows = rows.min(area.height);
    (
        Rect::new(area.x, area.y, area.width, area.height - rows),
        Rect::new(area.x, area.y + area.height - rows, area.width, rows),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityItem {
    Explorer,
    Search,
    SourceControl,
    Settings,
}

impl ActivityItem {
    pub fn icon(self) -> &'static str {
        match self {
            ActivityItem::Explorer => "⧉",
            ActivityItem::Search => "⌕",
            ActivityItem::SourceControl => "⑂",
            ActivityItem::Settings => "⚙",
        }
    }
}

/// Icon rows of the activity bar; the settings gear is pinned to the bottom.
pub fn activity_slots(activity: Rect) -> Vec<(ActivityItem, u16)> {
    if activity.height == 0 {
        return Vec::new();
    }
    let bottom = activity.y + activity.height - 1;
    let mut slots: Vec<(ActivityItem, u16)> = [
        ActivityItem::Explorer,
        ActivityItem::Search,
        ActivityItem::SourceControl,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, item)| (item, activity.y + i as u16 * ACTIVITY_SLOT_HEIGHT))
    .filter(|(_, y)| *y < bottom)
    .collect();
    slots.push((ActivityItem::Settings, bottom));
    slots
}

pub fn activity_item_at(activity: Rect, y: u16) -> Option<ActivityItem> {
    activity_slots(activity)
        .into_iter()
        .find(|(item, top)| {
            let height = match item {
                ActivityItem::Settings => 1,
                _ => ACTIVITY_SLOT_HEIGHT,
            };
            y >= *top && y < top + height
        })
        .map(|(item, _)| item)
}

/// Bordered popup listing the menu items. The anchor is relative to the explorer list; the
/// popup opens one row below it and is pushed back inside the terminal when it would overflow.
pub fn context_menu_rect(layout: &WorkbenchLayout, menu: &ContextMenuState) -> Rect {
    let area = layout.area;
    let label_width = menu
        .items
        .iter()
        .map(|item| item.label().width())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(label_width + 4).unwrap_or(u16::MAX).min(area.width);
    let height = u16::try_from(menu.items.len() + 2).unwrap_or(u16::MAX).min(area.height);

    let x = layout.explorer.x.saturating_add(menu.anchor.0);
    let y = layout.explorer.y.saturating_add(menu.anchor.1).saturating_add(1);
    let x = x.min(area.x + area.width - width);
    let y = y.min(area.y + area.height - height);
    Rect::new(x, y, width, height)
}

pub fn context_menu_item_at(rect: Rect, item_count: usize, x: u16, y: u16) -> Option<usize> {
    if x <= rect.x || x + 1 >= rect.x + rect.width || y <= rect.y {
        return None;
    }
    let index = usize::from(y - rect.y - 1);
    (index < item_count).then_some(index)
}

/// A `height`-row box centered horizontally, a third of the way down.
pub fn dialog_rect(area: Rect, height: u16) -> Rect {
    let width = area.width.saturating_sub(4).min(50);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 3;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/layout.rs"]
mod tests;
