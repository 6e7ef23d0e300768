use super::*;
use crate::kernel::{ContextMenuItem, SplitConfig};

fn layout(width: u16, height: u16) -> WorkbenchLayout {
    WorkbenchLayout::compute(
        Rect::new(0, 0, width, height),
        &SplitLayout::new(SplitConfig::default()),
    )
}

#[test]
fn regions_tile_the_terminal() {
    let l = layout(100, 30);
    assert_eq!(l.title, Rect::new(0, 0, 100, 1));
    assert_eq!(l.status, Rect::new(0, 29, 100, 1));
    assert_eq!(l.activity, Rect::new(0, 1, 3, 28));
    assert_eq!(l.sidebar_header, Rect::new(3, 1, 19, 1));
    assert_eq!(l.explorer, Rect::new(3, 2, 19, 27));
    assert_eq!(l.divider, Rect::new(22, 1, 1, 28));
    assert_eq!(l.tabs, Rect::new(23, 1, 77, 1));
    assert_eq!(l.breadcrumbs, Rect::new(23, 2, 77, 1));
    assert_eq!(l.content, Rect::new(23, 3, 77, 26));
}

#[test]
fn container_excludes_activity_bar() {
    assert_eq!(
        WorkbenchLayout::split_container(Rect::new(0, 0, 100, 30)),
        ContainerBounds { left: 3, width: 97 }
    );
    assert_eq!(
        WorkbenchLayout::split_container(Rect::new(0, 0, 2, 30)),
        ContainerBounds { left: 2, width: 0 }
    );
}

#[test]
fn tiny_terminals_do_not_panic() {
    for (w, h) in [(0, 0), (1, 1), (3, 2), (5, 3)] {
        let l = layout(w, h);
        assert!(l.content.width <= w);
        assert!(l.content.height <= h);
    }
}

#[test]
fn gutter_fits_line_numbers() {
    assert_eq!(gutter_width(0), 6);
    assert_eq!(gutter_width(42), 6);
    assert_eq!(gutter_width(1234), 7);

    let (gutter, text) = layout(100, 30).editor_columns(10);
    assert_eq!(gutter, Rect::new(23, 3, 6, 26));
    assert_eq!(text, Rect::new(29, 3, 71, 26));
}

#[test]
fn activity_items_by_row() {
    let activity = Rect::new(0, 1, 3, 28);
    assert_eq!(activity_item_at(activity, 1), Some(ActivityItem::Explorer));
    assert_eq!(activity_item_at(activity, 2), Some(ActivityItem::Explorer));
    assert_eq!(activity_item_at(activity, 3), Some(ActivityItem::Search));
    assert_eq!(activity_item_at(activity, 5), Some(ActivityItem::SourceControl));
    assert_eq!(activity_item_at(activity, 10), None);
    assert_eq!(activity_item_at(activity, 28), Some(ActivityItem::Settings));
}

#[test]
fn context_menu_stays_on_screen() {
    let l = layout(100, 30);
    let mut menu = ContextMenuState {
        visible: true,
        anchor: (4, 2),
        selected: 0,
        items: ContextMenuItem::ALL.to_vec(),
        target: None,
    };
    let rect = context_menu_rect(&l, &menu);
    assert_eq!(rect, Rect::new(7, 5, 14, 6));
    assert_eq!(context_menu_item_at(rect, 4, 8, 6), Some(0));
    assert_eq!(context_menu_item_at(rect, 4, 8, 9), Some(3));
    assert_eq!(context_menu_item_at(rect, 4, 8, 5), None);
    assert_eq!(context_menu_item_at(rect, 4, 7, 6), None);

    menu.anchor = (95, 26);
    let rect = context_menu_rect(&l, &menu);
    assert_eq!(rect, Rect::new(86, 24, 14, 6));
}
