use super::*;
use crate::models::seed_tree;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    let start = usize::from(y) * width;
    buffer.content[start..start + width]
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn draw(
    view: &mut ExplorerView,
    state: &ExplorerState,
    width: u16,
    height: u16,
    area: Rect,
) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let theme = UiTheme::dark();
    terminal
        .draw(|frame| {
            let ctx = ExplorerPaintCtx {
                state,
                active: None,
                focused: true,
                theme: &theme,
            };
            view.render(frame, area, &ctx);
        })
        .unwrap();
    terminal
}

#[test]
fn hit_test_accounts_for_scroll() {
    let mut view = ExplorerView::new();
    assert_eq!(view.hit_test_row(0, 0, 0), None);

    let state = ExplorerState::new(&seed_tree(), 2);
    draw(&mut view, &state, 30, 5, Rect::new(2, 1, 20, 3));

    assert!(view.contains(2, 1));
    assert!(!view.contains(22, 1));
    assert_eq!(view.hit_test_row(5, 1, 0), Some(0));
    assert_eq!(view.hit_test_row(5, 3, 4), Some(6));
    assert_eq!(view.hit_test_row(5, 4, 0), None);
}

#[test]
fn rows_are_indented_with_chevrons() {
    let mut view = ExplorerView::new();
    let state = ExplorerState::new(&seed_tree(), 2);
    let terminal = draw(&mut view, &state, 30, 6, Rect::new(0, 0, 30, 6));

    assert!(row_text(&terminal, 0).starts_with("▾ vscode-clone"));
    assert!(row_text(&terminal, 1).starts_with("  ▾ src"));
    assert!(row_text(&terminal, 2).starts_with("    ▾ components"));
    assert!(row_text(&terminal, 3).starts_with("        TS Header.tsx"));
}

#[test]
fn long_names_are_ellipsized() {
    let mut view = ExplorerView::new();
    let state = ExplorerState::new(&seed_tree(), 2);
    let terminal = draw(&mut view, &state, 10, 1, Rect::new(0, 0, 10, 1));

    assert_eq!(row_text(&terminal, 0), "▾ vscode-…");
}
