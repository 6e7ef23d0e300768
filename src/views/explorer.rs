//! File explorer list: rendering and hit testing.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::theme::UiTheme;
use crate::core::text_window::ellipsize;
use crate::kernel::ExplorerState;
use crate::models::{FileTreeRow, Language, NodeId};

use super::rect_contains;

pub struct ExplorerPaintCtx<'a> {
    pub state: &'a ExplorerState,
    pub active: Option<&'a NodeId>,
    pub focused: bool,
    pub theme: &'a UiTheme,
}

#[derive(Debug, Default)]
pub struct ExplorerView {
    area: Option<Rect>,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.is_some_and(|a| rect_contains(a, x, y))
    }

    /// Index into the flattened rows for a point inside the list. Points below the last row
    /// still map to an index; callers check it against the row count.
    pub fn hit_test_row(&self, x: u16, y: u16, scroll_offset: usize) -> Option<usize> {
        let area = self.area?;
        if !rect_contains(area, x, y) {
            return None;
        }
        Some(usize::from(y - area.y) + scroll_offset)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ExplorerPaintCtx<'_>) {
        self.area = Some(area);
        if area.is_empty() {
            return;
        }

        let rows = ctx.state.rows();
        let start = ctx.state.scroll_offset.min(rows.len());
        let end = (start + usize::from(area.height)).min(rows.len());
        let lines: Vec<Line> = rows[start..end]
            .iter()
            .map(|row| render_row(row, ctx, usize::from(area.width)))
            .collect();

        let base = Style::default()
            .bg(ctx.theme.sidebar_bg)
            .fg(ctx.theme.sidebar_fg);
        frame.render_widget(Paragraph::new(lines).style(base), area);
    }
}

fn render_row(row: &FileTreeRow, ctx: &ExplorerPaintCtx<'_>, width: usize) -> Line<'static> {
    let theme = ctx.theme;
    let indent = " ".repeat(usize::from(row.depth) * usize::from(ctx.state.indent_width));
    let chevron = match (row.is_dir, row.is_expanded) {
        (true, true) => "▾ ",
        (true, false) => "▸ ",
        (false, _) => "  ",
    };
    let (icon, icon_color) = if row.is_dir {
        ("", theme.sidebar_fg)
    } else {
        file_icon(row.language, theme)
    };

    let is_active = ctx.active == Some(&row.id);
    let is_selected = ctx.state.selected.as_ref() == Some(&row.id);
    let mut style = Style::default().fg(theme.sidebar_fg);
    if is_active {
        style = style.bg(theme.row_active_bg).fg(theme.row_active_fg);
    } else if is_selected && ctx.focused {
        style = style.bg(theme.row_selected_bg);
    }
    if is_selected && ctx.focused {
        style = style.add_modifier(Modifier::BOLD);
    }

    let prefix_width = indent.width() + chevron.width() + icon.width();
    let name = ellipsize(&row.name, width.saturating_sub(prefix_width));
    let fill = width.saturating_sub(prefix_width + name.width());

    let mut spans = vec![Span::styled(format!("{indent}{chevron}"), style)];
    if !icon.is_empty() {
        spans.push(Span::styled(icon, style.fg(icon_color)));
    }
    spans.push(Span::styled(name, style));
    spans.push(Span::styled(" ".repeat(fill), style));
    Line::from(spans)
}

fn file_icon(language: Language, theme: &UiTheme) -> (&'static str, Color) {
    match language {
        Language::TypeScript => ("TS ", theme.token_constant),
        Language::JavaScript => ("JS ", theme.window_dots[1]),
        Language::Css => ("# ", theme.token_type),
        Language::Json => ("{} ", theme.window_dots[1]),
        Language::Markdown => ("M ", theme.token_constant),
        Language::PlainText => ("≡ ", theme.sidebar_fg),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/explorer.rs"]
mod tests;
