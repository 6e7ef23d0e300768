//! Plain-text editing on a file's content string.
//!
//! Cursors are byte offsets that always sit on a grapheme boundary. Columns are counted in
//! graphemes; display positions are counted in terminal cells with tabs expanded.

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::state::OpenTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    DocStart,
    DocEnd,
    PageUp,
    PageDown,
}

/// Result of an edit: the new content and where the cursor lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub cursor: usize,
}

pub fn clamp_to_char_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Byte range of `row` excluding its line terminator. Rows past the end map to the last line.
pub fn line_range(text: &str, row: usize) -> Range<usize> {
    let mut start = 0usize;
    for (i, line) in text.split('\n').enumerate() {
        let end = start + line.len();
        if i == row || end == text.len() {
            return start..end;
        }
        start = end + 1;
    }
    start..start
}

pub fn line(text: &str, row: usize) -> &str {
    &text[line_range(text, row)]
}

/// `(row, grapheme column)` of a byte cursor, both zero based.
pub fn line_col(text: &str, cursor: usize) -> (usize, usize) {
    let cursor = clamp_to_char_boundary(text, cursor);
    let before = &text[..cursor];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].graphemes(true).count();
    (row, col)
}

/// Byte offset of `(row, col)`, clamping the column to the line's length.
pub fn offset_at(text: &str, row: usize, col: usize) -> usize {
    let range = line_range(text, row);
    let line = &text[range.clone()];
    let within = line
        .grapheme_indices(true)
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    range.start + within
}

fn prev_boundary(text: &str, cursor: usize) -> usize {
    text[..cursor]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .graphemes(true)
        .next()
        .map(|g| cursor + g.len())
        .unwrap_or(cursor)
}

/// Moves the cursor. `page` is the number of rows a page motion skips.
pub fn move_cursor(text: &str, cursor: usize, motion: Motion, page: usize) -> usize {
    let cursor = clamp_to_char_boundary(text, cursor);
    let (row, col) = line_col(text, cursor);
    let last_row = line_count(text).saturating_sub(1);
    match motion {
        Motion::Left => prev_boundary(text, cursor),
        Motion::Right => next_boundary(text, cursor),
        Motion::Up if row == 0 => 0,
        Motion::Up => offset_at(text, row - 1, col),
        Motion::Down if row >= last_row => text.len(),
        Motion::Down => offset_at(text, row + 1, col),
        Motion::LineStart => line_range(text, row).start,
        Motion::LineEnd => line_range(text, row).end,
        Motion::DocStart => 0,
        Motion::DocEnd => text.len(),
        Motion::PageUp => offset_at(text, row.saturating_sub(page.max(1)), col),
        Motion::PageDown => offset_at(text, (row + page.max(1)).min(last_row), col),
    }
}

pub fn insert(text: &str, cursor: usize, inserted: &str) -> Edit {
    let cursor = clamp_to_char_boundary(text, cursor);
    let mut out = String::with_capacity(text.len() + inserted.len());
    out.push_str(&text[..cursor]);
    out.push_str(inserted);
    out.push_str(&text[cursor..]);
    Edit {
        text: out,
        cursor: cursor + inserted.len(),
    }
}

/// Removes the grapheme before the cursor. `None` at the start of the text.
pub fn backspace(text: &str, cursor: usize) -> Option<Edit> {
    let cursor = clamp_to_char_boundary(text, cursor);
    if cursor == 0 {
        return None;
    }
    let start = prev_boundary(text, cursor);
    Some(Edit {
        text: format!("{}{}", &text[..start], &text[cursor..]),
        cursor: start,
    })
}

/// Removes the grapheme after the cursor. `None` at the end of the text.
pub fn delete_forward(text: &str, cursor: usize) -> Option<Edit> {
    let cursor = clamp_to_char_boundary(text, cursor);
    if cursor >= text.len() {
        return None;
    }
    let end = next_boundary(text, cursor);
    Some(Edit {
        text: format!("{}{}", &text[..cursor], &text[end..]),
        cursor,
    })
}

/// Cells a tab occupies when it starts at `display_col`.
pub fn tab_advance(display_col: usize, tab_size: u8) -> usize {
    let tab = usize::from(tab_size.max(1));
    tab - display_col % tab
}

/// Display width of `line[..byte]` in cells.
pub fn display_x(line: &str, byte: usize, tab_size: u8) -> usize {
    let byte = clamp_to_char_boundary(line, byte);
    let mut x = 0usize;
    for g in line[..byte].graphemes(true) {
        x += if g == "\t" {
            tab_advance(x, tab_size)
        } else {
            g.width()
        };
    }
    x
}

/// Byte offset within `line` of the grapheme drawn at display column `x`.
pub fn byte_at_display_x(line: &str, x: usize, tab_size: u8) -> usize {
    let mut used = 0usize;
    for (i, g) in line.grapheme_indices(true) {
        let w = if g == "\t" {
            tab_advance(used, tab_size)
        } else {
            g.width()
        };
        if x < used + w.max(1) {
            return i;
        }
        used += w;
    }
    line.len()
}

pub fn expand_tabs(line: &str, tab_size: u8) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut x = 0usize;
    for g in line.graphemes(true) {
        if g == "\t" {
            let spaces = tab_advance(x, tab_size);
            expanded.extend(std::iter::repeat(' ').take(spaces));
            x += spaces;
        } else {
            expanded.push_str(g);
            x += g.width();
        }
    }
    expanded
}

/// Scrolls `tab` so its cursor stays inside a `height` x `width` viewport.
pub fn follow_cursor(tab: &mut OpenTab, text: &str, height: usize, width: usize, tab_size: u8) {
    let height = height.max(1);
    let width = width.max(1);
    tab.cursor = clamp_to_char_boundary(text, tab.cursor);
    let (row, _) = line_col(text, tab.cursor);

    let max_row = line_count(text).saturating_sub(1);
    tab.scroll_row = tab.scroll_row.min(max_row);
    if row < tab.scroll_row {
        tab.scroll_row = row;
    } else if row >= tab.scroll_row + height {
        tab.scroll_row = row + 1 - height;
    }

    let range = line_range(text, row);
    let x = display_x(&text[range.clone()], tab.cursor - range.start, tab_size);
    if x < tab.scroll_col {
        tab.scroll_col = x;
    } else if x >= tab.scroll_col + width {
        tab.scroll_col = x + 1 - width;
    }
}

/// Scrolls by `delta` rows without moving the cursor.
pub fn scroll_by(tab: &mut OpenTab, text: &str, delta: isize, height: usize) {
    let max_row = line_count(text).saturating_sub(height.max(1));
    let row = tab.scroll_row.saturating_add_signed(delta);
    tab.scroll_row = row.min(max_row);
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor.rs"]
mod tests;
