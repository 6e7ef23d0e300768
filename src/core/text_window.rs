//! Fitting single-line text into a fixed number of terminal cells.
//!
//! Offsets are bytes into UTF-8 strings and always land on grapheme boundaries, so a wide or
//! combined character is either shown whole or not at all.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// How many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, g) in s.grapheme_indices(true) {
        let w = g.width();
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + g.len();
    }
    end
}

/// `s` cut to `max_width` cells, with a trailing `…` when something was dropped.
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let end = truncate_to_width(s, max_width - 1);
    format!("{}…", &s[..end])
}

/// A window `[start, end)` of `text` that fits `available_width` cells and keeps the byte
/// `cursor` visible, leaving one cell for a cursor parked at the end.
pub fn window(text: &str, cursor: usize, available_width: usize) -> (usize, usize) {
    let cursor = cursor.min(text.len());
    if available_width == 0 {
        return (cursor, cursor);
    }

    let mut start = 0usize;
    let mut used = text[..cursor].width() + 1;
    let mut graphemes = text[..cursor].grapheme_indices(true);
    while used > available_width {
        let Some((idx, g)) = graphemes.next() else {
            break;
        };
        used -= g.width();
        start = idx + g.len();
    }

    let end = start + truncate_to_width(&text[start..], available_width);
    (start, end.max(cursor))
}

#[cfg(test)]
#[path = "../../tests/unit/core/text_window.rs"]
mod tests;
