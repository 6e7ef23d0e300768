//! Tabs, breadcrumbs, gutter and highlighted text of the active file.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::super::layout::WorkbenchLayout;
use super::super::Workbench;
use crate::app::theme::UiTheme;
use crate::core::text_window::ellipsize;
use crate::kernel::syntax::{highlight_line, Token};
use crate::kernel::{editor, FocusTarget, OpenTab};
use crate::models::Node;
use crate::views::compute_tab_row_layout;

const EMPTY_STATE: &str = "Select a file to start editing";
const EMPTY_STATE_HINT: &str = "VS Code Clone Demo";

pub(super) fn render_editor(workbench: &Workbench, frame: &mut Frame, layout: &WorkbenchLayout) {
    let theme = &workbench.theme;
    let editor_area = Rect {
        height: layout.tabs.height + layout.breadcrumbs.height + layout.content.height,
        ..layout.tabs
    };
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.editor_bg).fg(theme.editor_fg)),
        editor_area,
    );

    render_tabs(workbench, frame, layout.tabs);

    let state = workbench.store.state();
    let (Some(tab), Some(node)) = (state.active_tab(), state.active_node()) else {
        render_empty_state(theme, frame, layout.content);
        return;
    };
    render_breadcrumbs(workbench, frame, layout.breadcrumbs, node);

    let content = node.content().unwrap_or_default();
    let (gutter, text) = layout.editor_columns(editor::line_count(content));
    render_lines(workbench, frame, node, tab, gutter, text);

    if state.ui.focus == FocusTarget::Editor && !state.ui.has_modal() {
        if let Some(position) = cursor_cell(content, tab, text, state.editor.tab_size) {
            frame.set_cursor_position(position);
        }
    }
}

fn render_tabs(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let state = workbench.store.state();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.tab_bar_bg)),
        area,
    );
    if area.is_empty() {
        return;
    }

    let titles: Vec<&str> = state
        .open_tabs
        .iter()
        .map(|tab| state.tree.find(&tab.id).map_or("", |node| node.name.as_str()))
        .collect();
    let tabs = compute_tab_row_layout(area, &titles);
    let buf = frame.buffer_mut();
    for slot in &tabs.slots {
        let is_active = state.active.as_ref() == Some(&state.open_tabs[slot.index].id);
        let style = if is_active {
            Style::default()
                .bg(theme.tab_active_bg)
                .fg(theme.tab_active_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(theme.tab_inactive_bg).fg(theme.tab_inactive_fg)
        };
        let slot_area = Rect::new(slot.start, area.y, slot.end - slot.start, 1);
        buf.set_style(slot_area, style);
        let title_room = usize::from(slot.end.saturating_sub(slot.title_x));
        buf.set_stringn(slot.title_x, area.y, &slot.title, title_room, style);
        if let Some(close_x) = slot.close_x {
            buf.set_string(close_x, area.y, "×", style.remove_modifier(Modifier::BOLD));
        }
    }
}

fn render_breadcrumbs(workbench: &Workbench, frame: &mut Frame, area: Rect, node: &Node) {
    let theme = &workbench.theme;
    let crumbs: Vec<&str> = workbench
        .store
        .state()
        .tree
        .ancestors(&node.id)
        .unwrap_or_default()
        .into_iter()
        .map(|n| n.name.as_str())
        .collect();
    let text = ellipsize(&format!(" {}", crumbs.join(" › ")), usize::from(area.width));
    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.editor_bg).fg(theme.breadcrumb_fg)),
        area,
    );
}

fn render_empty_state(theme: &UiTheme, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let top = area.y + area.height.saturating_sub(2) / 2;
    let lines = vec![
        Line::from(Span::styled(EMPTY_STATE, Style::default().fg(theme.gutter_fg))),
        Line::from(Span::styled(
            EMPTY_STATE_HINT,
            Style::default().fg(theme.gutter_fg).add_modifier(Modifier::DIM),
        )),
    ];
    let rect = Rect::new(area.x, top, area.width, area.y + area.height - top);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn render_lines(
    workbench: &Workbench,
    frame: &mut Frame,
    node: &Node,
    tab: &OpenTab,
    gutter: Rect,
    text: Rect,
) {
    let theme = &workbench.theme;
    let tab_size = workbench.store.state().editor.tab_size;
    let content = node.content().unwrap_or_default();
    let language = node.language();
    let (cursor_row, _) = editor::line_col(content, tab.cursor);
    let digits = usize::from(gutter.width.saturating_sub(3));

    let mut gutter_lines = Vec::with_capacity(usize::from(text.height));
    let mut text_lines = Vec::with_capacity(usize::from(text.height));
    let last_row = editor::line_count(content);
    for row in (tab.scroll_row..last_row).take(usize::from(text.height)) {
        let number_fg = if row == cursor_row {
            theme.gutter_active_fg
        } else {
            theme.gutter_fg
        };
        gutter_lines.push(Line::from(Span::styled(
            format!(" {:>digits$}  ", row + 1),
            Style::default().fg(number_fg),
        )));

        let tokens = highlight_line(editor::line(content, row), language);
        text_lines.push(Line::from(visible_spans(
            &tokens,
            theme,
            tab.scroll_col,
            usize::from(text.width),
            tab_size,
        )));
    }

    let base = Style::default().bg(theme.editor_bg).fg(theme.editor_fg);
    frame.render_widget(Paragraph::new(gutter_lines).style(base), gutter);
    frame.render_widget(Paragraph::new(text_lines).style(base), text);
}

/// Token spans clipped to the display columns `[skip, skip + width)`, tabs expanded. A wide
/// grapheme cut by either edge is replaced by spaces.
fn visible_spans(
    tokens: &[Token<'_>],
    theme: &UiTheme,
    skip: usize,
    width: usize,
    tab_size: u8,
) -> Vec<Span<'static>> {
    let end = skip + width;
    let mut col = 0usize;
    let mut spans = Vec::with_capacity(tokens.len());
    for token in tokens {
        let mut out = String::new();
        for g in token.text.graphemes(true) {
            let w = if g == "\t" {
                editor::tab_advance(col, tab_size)
            } else {
                g.width()
            };
            let (start, stop) = (col, col + w);
            col = stop;
            if stop <= skip || start >= end {
                continue;
            }
            if g == "\t" || start < skip || stop > end {
                out.extend(std::iter::repeat(' ').take(stop.min(end) - start.max(skip)));
            } else {
                out.push_str(g);
            }
        }
        if !out.is_empty() {
            spans.push(Span::styled(out, Style::default().fg(theme.token_color(token.kind))));
        }
        if col >= end {
            break;
        }
    }
    spans
}

/// Screen cell of the cursor, if it is inside the text area.
fn cursor_cell(content: &str, tab: &OpenTab, text: Rect, tab_size: u8) -> Option<(u16, u16)> {
    let (row, _) = editor::line_col(content, tab.cursor);
    let range = editor::line_range(content, row);
    let x = editor::display_x(&content[range.clone()], tab.cursor - range.start, tab_size);

    let dy = row.checked_sub(tab.scroll_row)?;
    let dx = x.checked_sub(tab.scroll_col)?;
    if dy >= usize::from(text.height) || dx >= usize::from(text.width) {
        return None;
    }
    Some((text.x + dx as u16, text.y + dy as u16))
}

#[cfg(test)]
#[path = "../../../../tests/unit/app/workbench/render.rs"]
mod tests;
