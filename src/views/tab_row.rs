//! Editor tab strip geometry. Each tab is ` title × ` followed by a one-cell divider.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::core::text_window::ellipsize;

const PADDING_LEFT: u16 = 1;
const CLOSE_WIDTH: u16 = 3;
const DIVIDER_WIDTH: u16 = 1;
const MAX_TITLE_WIDTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRowSlot {
    pub index: usize,
    pub start: u16,
    pub end: u16,
    pub title: String,
    pub title_x: u16,
    /// Column of the `×`; `None` when the slot was cut off before it.
    pub close_x: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabRowLayout {
    pub slots: Vec<TabRowSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabHit {
    Select(usize),
    Close(usize),
}

/// Lays tabs out left to right. Titles are capped, and whatever does not fit is clipped at
/// the right edge.
pub fn compute_tab_row_layout(area: Rect, titles: &[&str]) -> TabRowLayout {
    if area.width == 0 || area.height == 0 {
        return TabRowLayout::default();
    }

    let right = area.x.saturating_add(area.width);
    let mut x = area.x;
    let mut slots = Vec::with_capacity(titles.len());
    for (index, title) in titles.iter().enumerate() {
        if x >= right {
            break;
        }
        let start = x;
        let title = ellipsize(title, MAX_TITLE_WIDTH);
        let title_x = start.saturating_add(PADDING_LEFT);
        let title_width = u16::try_from(title.width()).unwrap_or(u16::MAX);
        let close_start = title_x.saturating_add(title_width);
        let end = close_start.saturating_add(CLOSE_WIDTH);
        // `×` sits in the middle of the ` × ` close area.
        let close_x = close_start.saturating_add(1);

        slots.push(TabRowSlot {
            index,
            start,
            end: end.min(right),
            title,
            title_x,
            close_x: (close_x < right).then_some(close_x),
        });
        x = end.saturating_add(DIVIDER_WIDTH);
    }
    TabRowLayout { slots }
}

pub fn hit_test_tab(layout: &TabRowLayout, x: u16) -> Option<TabHit> {
    let slot = layout.slots.iter().find(|s| x >= s.start && x < s.end)?;
    // The close affordance is the cell under `×` plus its neighbours.
    match slot.close_x {
        Some(close_x) if x + 1 >= close_x && x <= close_x + 1 => Some(TabHit::Close(slot.index)),
        _ => Some(TabHit::Select(slot.index)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/tab_row.rs"]
mod tests;
