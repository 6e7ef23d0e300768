//! Widgets that own their hit-testing geometry.

pub mod explorer;
pub mod tab_row;

use ratatui::layout::Rect;

pub use explorer::{ExplorerPaintCtx, ExplorerView};
pub use tab_row::{compute_tab_row_layout, hit_test_tab, TabHit, TabRowLayout, TabRowSlot};

pub(crate) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
