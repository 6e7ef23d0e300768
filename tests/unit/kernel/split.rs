use super::*;

const BOUNDS: ContainerBounds = ContainerBounds {
    left: 10,
    width: 100,
};

#[test]
fn starts_idle_at_initial_percent() {
    let split = SplitLayout::new(SplitConfig::new(25.0, 10.0, 40.0));
    assert_eq!(split.phase(), DragPhase::Idle);
    assert_eq!(split.left_percent(), 25.0);
}

#[test]
fn config_clamps_out_of_range_values() {
    let config = SplitConfig::new(120.0, -5.0, 150.0);
    assert_eq!(config.min_left_percent, 0.0);
    assert_eq!(config.max_left_percent, 100.0);
    assert_eq!(config.initial_left_percent, 100.0);

    let config = SplitConfig::new(5.0, 10.0, 40.0);
    assert_eq!(config.initial_left_percent, 10.0);
}

#[test]
fn config_with_inverted_bounds_falls_back_to_defaults() {
    let config = SplitConfig::new(30.0, 60.0, 20.0);
    assert_eq!(config.min_left_percent, DEFAULT_MIN_LEFT_PERCENT);
    assert_eq!(config.max_left_percent, DEFAULT_MAX_LEFT_PERCENT);
    assert_eq!(config.initial_left_percent, 30.0);
}

#[test]
fn config_replaces_non_finite_values() {
    let config = SplitConfig::new(f32::NAN, f32::INFINITY, f32::NAN);
    assert_eq!(config, SplitConfig::default());
}

#[test]
fn move_tracks_pointer_while_dragging() {
    let mut split = SplitLayout::new(SplitConfig::new(20.0, 10.0, 40.0));
    assert!(split.pointer_down());
    assert!(split.pointer_move(40, BOUNDS));
    assert_eq!(split.left_percent(), 30.0);
}

#[test]
fn whole_cell_moves_give_exact_percentages() {
    let container = ContainerBounds { left: 0, width: 100 };
    let mut split = SplitLayout::new(SplitConfig::new(20.0, 0.0, 100.0));
    split.pointer_down();
    for x in [10u16, 30, 35, 70, 99] {
        split.pointer_move(x, container);
        assert_eq!(split.left_percent(), f32::from(x), "x={x}");
    }
}

#[test]
fn move_clamps_to_bounds() {
    let mut split = SplitLayout::new(SplitConfig::new(20.0, 10.0, 40.0));
    split.pointer_down();

    for x in [0u16, 5, 10, 12, 35, 49, 50, 51, 90, 200, u16::MAX] {
        split.pointer_move(x, BOUNDS);
        let value = split.left_percent();
        assert!((10.0..=40.0).contains(&value), "x={x} gave {value}");
    }

    split.pointer_move(0, BOUNDS);
    assert_eq!(split.left_percent(), 10.0);
    split.pointer_move(200, BOUNDS);
    assert_eq!(split.left_percent(), 40.0);
}

#[test]
fn moves_after_release_are_ignored() {
    let mut split = SplitLayout::default();
    split.pointer_down();
    split.pointer_move(35, BOUNDS);
    let settled = split.left_percent();

    assert!(split.pointer_up());
    assert!(!split.pointer_move(45, BOUNDS));
    assert_eq!(split.left_percent(), settled);
    assert_eq!(split.phase(), DragPhase::Idle);
}

#[test]
fn cancel_behaves_like_release() {
    let mut split = SplitLayout::default();
    split.pointer_down();
    assert!(split.pointer_cancel());
    assert!(!split.is_dragging());
    assert!(!split.pointer_move(45, BOUNDS));
    assert!(!split.pointer_cancel());
}

#[test]
fn container_is_read_per_move() {
    let mut split = SplitLayout::new(SplitConfig::new(20.0, 0.0, 100.0));
    split.pointer_down();

    split.pointer_move(50, ContainerBounds { left: 0, width: 100 });
    assert_eq!(split.left_percent(), 50.0);

    // Same pointer column, container shrank mid-drag.
    split.pointer_move(50, ContainerBounds { left: 0, width: 200 });
    assert_eq!(split.left_percent(), 25.0);
}

#[test]
fn zero_width_container_is_ignored() {
    let mut split = SplitLayout::default();
    split.pointer_down();
    assert!(!split.pointer_move(5, ContainerBounds { left: 0, width: 0 }));
    assert_eq!(split.left_percent(), DEFAULT_INITIAL_LEFT_PERCENT);
}

#[test]
fn left_width_in_cells() {
    let split = SplitLayout::new(SplitConfig::new(25.0, 10.0, 40.0));
    assert_eq!(split.left_width(80), 20);
    assert_eq!(split.left_width(0), 0);
}
