//! Context menu and modal dialogs, drawn over everything else.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::super::layout::{context_menu_rect, dialog_rect, WorkbenchLayout};
use super::super::Workbench;
use crate::core::text_window::{ellipsize, window};

const INPUT_HINT: &str = "Enter to confirm, Esc to cancel";
const CONFIRM_HINT: &str = "[Enter] Delete  [Esc] Cancel";

pub(super) fn render_context_menu(
    workbench: &Workbench,
    frame: &mut Frame,
    layout: &WorkbenchLayout,
) {
    let menu = &workbench.store.state().ui.context_menu;
    if !menu.visible || menu.items.is_empty() {
        return;
    }
    let theme = &workbench.theme;
    let rect = context_menu_rect(layout, menu);
    if rect.width < 3 || rect.height < 3 {
        return;
    }

    let base = Style::default().bg(theme.overlay_bg).fg(theme.overlay_fg);
    let selected = Style::default()
        .bg(theme.overlay_selected_bg)
        .fg(theme.overlay_selected_fg);
    let inner_width = usize::from(rect.width - 2);
    let lines: Vec<Line> = menu
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == menu.selected { selected } else { base };
            let label = ellipsize(&format!(" {}", item.label()), inner_width);
            let pad = inner_width.saturating_sub(label.width());
            Line::from(Span::styled(format!("{label}{}", " ".repeat(pad)), style))
        })
        .collect();

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).style(base).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.overlay_border))
                .style(base),
        ),
        rect,
    );
}

pub(super) fn render_input_dialog(
    workbench: &Workbench,
    frame: &mut Frame,
    layout: &WorkbenchLayout,
) {
    let dialog = &workbench.store.state().ui.input_dialog;
    if !dialog.visible {
        return;
    }
    let theme = &workbench.theme;
    let rect = dialog_rect(layout.area, 5);
    if rect.width < 4 || rect.height < 4 {
        return;
    }

    let base = Style::default().bg(theme.overlay_bg).fg(theme.overlay_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(format!(" {} ", dialog.title))
        .style(base);
    let inner = block.inner(rect);
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let field_width = usize::from(inner.width.saturating_sub(1));
    let (start, end) = window(&dialog.value, dialog.cursor, field_width);
    let visible = &dialog.value[start..end];
    let field_style = base.add_modifier(Modifier::UNDERLINED);
    let field = Line::from(vec![
        Span::styled(" ", base),
        Span::styled(
            format!("{visible}{}", " ".repeat(field_width.saturating_sub(visible.width()))),
            field_style,
        ),
    ]);
    let status = match &dialog.error {
        Some(error) => Span::styled(format!(" {error}"), base.fg(theme.error_fg)),
        None => Span::styled(format!(" {INPUT_HINT}"), base.add_modifier(Modifier::DIM)),
    };
    frame.render_widget(Paragraph::new(vec![field, Line::from(""), Line::from(status)]), inner);

    if inner.height > 0 {
        let before = dialog.value[start..dialog.cursor.clamp(start, end)].width();
        let x = inner.x + 1 + u16::try_from(before).unwrap_or(u16::MAX);
        frame.set_cursor_position((x.min(inner.x + inner.width.saturating_sub(1)), inner.y));
    }
}

pub(super) fn render_confirm_dialog(
    workbench: &Workbench,
    frame: &mut Frame,
    layout: &WorkbenchLayout,
) {
    let dialog = &workbench.store.state().ui.confirm_dialog;
    if !dialog.visible {
        return;
    }
    let theme = &workbench.theme;
    let rect = dialog_rect(layout.area, 5);
    if rect.width < 4 || rect.height < 4 {
        return;
    }

    let base = Style::default().bg(theme.overlay_bg).fg(theme.overlay_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(" Confirm ")
        .style(base);
    let inner = block.inner(rect);
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let width = usize::from(inner.width);
    let lines = vec![
        Line::from(Span::styled(ellipsize(&format!(" {}", dialog.message), width), base)),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {CONFIRM_HINT}"),
            base.add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
