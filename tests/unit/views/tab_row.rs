use super::*;

#[test]
fn slots_are_laid_out_in_order() {
    let layout = compute_tab_row_layout(Rect::new(10, 0, 80, 1), &["App.tsx", "utils.ts"]);
    assert_eq!(layout.slots.len(), 2);

    let first = &layout.slots[0];
    assert_eq!((first.start, first.title_x, first.end), (10, 11, 21));
    assert_eq!(first.close_x, Some(19));

    let second = &layout.slots[1];
    assert_eq!(second.start, 22);
    assert_eq!(second.title, "utils.ts");
}

#[test]
fn close_affordance_is_distinct_from_title() {
    let layout = compute_tab_row_layout(Rect::new(0, 0, 80, 1), &["App.tsx", "utils.ts"]);
    assert_eq!(hit_test_tab(&layout, 0), Some(TabHit::Select(0)));
    assert_eq!(hit_test_tab(&layout, 3), Some(TabHit::Select(0)));
    assert_eq!(hit_test_tab(&layout, 9), Some(TabHit::Close(0)));
    assert_eq!(hit_test_tab(&layout, 10), Some(TabHit::Close(0)));
    // Divider between tabs.
    assert_eq!(hit_test_tab(&layout, 11), None);
    assert_eq!(hit_test_tab(&layout, 13), Some(TabHit::Select(1)));
    assert_eq!(hit_test_tab(&layout, 70), None);
}

#[test]
fn tabs_past_the_edge_are_clipped() {
    let layout = compute_tab_row_layout(Rect::new(0, 0, 14, 1), &["App.tsx", "utils.ts"]);
    assert_eq!(layout.slots.len(), 2);
    assert_eq!(layout.slots[1].end, 14);
    assert_eq!(layout.slots[1].close_x, None);
    assert_eq!(hit_test_tab(&layout, 13), Some(TabHit::Select(1)));
}

#[test]
fn long_titles_are_capped() {
    let name = "a-very-long-component-name-that-keeps-going.tsx";
    let layout = compute_tab_row_layout(Rect::new(0, 0, 80, 1), &[name]);
    assert_eq!(layout.slots[0].title.width(), MAX_TITLE_WIDTH);
    assert!(layout.slots[0].title.ends_with('…'));
}

#[test]
fn empty_area_has_no_slots() {
    assert!(compute_tab_row_layout(Rect::new(0, 0, 0, 1), &["a"]).slots.is_empty());
}
