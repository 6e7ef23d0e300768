//! Title bar, activity bar, explorer sidebar, split divider and status bar.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::super::layout::{activity_slots, ActivityItem, WorkbenchLayout};
use super::super::Workbench;
use crate::kernel::FocusTarget;
use crate::views::ExplorerPaintCtx;

pub(super) fn render_title(workbench: &Workbench, frame: &mut Frame, layout: &WorkbenchLayout) {
    let theme = &workbench.theme;
    let base = Style::default().bg(theme.title_bg).fg(theme.title_fg);
    frame.render_widget(
        Paragraph::new(workbench.store.state().title())
            .alignment(Alignment::Center)
            .style(base),
        layout.title,
    );

    let dots: Vec<Span> = theme
        .window_dots
        .iter()
        .flat_map(|color| [Span::styled("●", base.fg(*color)), Span::styled(" ", base)])
        .collect();
    let area = Rect {
        x: layout.title.x + 1,
        width: layout.title.width.saturating_sub(1).min(6),
        ..layout.title
    };
    frame.render_widget(Paragraph::new(Line::from(dots)), area);
}

pub(super) fn render_activity_bar(
    workbench: &Workbench,
    frame: &mut Frame,
    layout: &WorkbenchLayout,
) {
    let theme = &workbench.theme;
    let area = layout.activity;
    frame.render_widget(Block::default().style(Style::default().bg(theme.activity_bg)), area);
    if area.width == 0 {
        return;
    }

    let buf = frame.buffer_mut();
    for (item, y) in activity_slots(area) {
        let active = item == ActivityItem::Explorer;
        let fg = if active {
            theme.activity_active_fg
        } else {
            theme.activity_fg
        };
        let style = Style::default().bg(theme.activity_bg).fg(fg);
        if active {
            buf.set_string(area.x, y, "▎", style);
        }
        if area.width > 1 {
            buf.set_string(area.x + 1, y, item.icon(), style);
        }
    }
}

pub(super) fn render_sidebar(workbench: &mut Workbench, frame: &mut Frame, layout: &WorkbenchLayout) {
    let state = workbench.store.state();
    let theme = &workbench.theme;
    let header_style = Style::default()
        .bg(theme.sidebar_bg)
        .fg(theme.sidebar_header_fg)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(" EXPLORER").style(header_style),
        layout.sidebar_header,
    );

    let ctx = ExplorerPaintCtx {
        state: &state.explorer,
        active: state.active.as_ref(),
        focused: state.ui.focus == FocusTarget::Explorer,
        theme,
    };
    workbench.explorer.render(frame, layout.explorer, &ctx);
}

pub(super) fn render_divider(workbench: &Workbench, frame: &mut Frame, layout: &WorkbenchLayout) {
    let theme = &workbench.theme;
    let area = layout.divider;
    let color = if workbench.is_dragging() {
        theme.divider_active
    } else {
        theme.divider
    };
    let style = Style::default().bg(theme.sidebar_bg).fg(color);
    let buf = frame.buffer_mut();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            buf.set_string(x, y, "│", style);
        }
    }
}

pub(super) fn render_status(workbench: &Workbench, frame: &mut Frame, layout: &WorkbenchLayout) {
    let theme = &workbench.theme;
    let state = workbench.store.state();
    let style = Style::default().bg(theme.status_bg).fg(theme.status_fg);

    let left = " main*  0 errors 0 warnings";
    let mut right_parts = Vec::new();
    if let Some((line, col)) = state.cursor_position() {
        right_parts.push(format!("Ln {line}, Col {col}"));
    }
    right_parts.push("UTF-8".to_string());
    if let Some(node) = state.active_node() {
        right_parts.push(node.language().label().to_string());
    }
    right_parts.push("Prettier ".to_string());
    let right = right_parts.join("  ");

    let width = usize::from(layout.status.width);
    let gap = width.saturating_sub(left.width() + right.width()).max(1);
    let text = format!("{left}{}{right}", " ".repeat(gap));
    frame.render_widget(Paragraph::new(text).style(style), layout.status);
}
