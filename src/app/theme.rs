//! Workbench colors. Dark and light palettes modelled on VSCode's defaults, downgraded to the
//! 256 or 16 color palette when the terminal cannot show RGB.

use ratatui::style::Color;

use crate::kernel::syntax::TokenKind;
use crate::kernel::ThemeKind;

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub title_bg: Color,
    pub title_fg: Color,
    pub activity_bg: Color,
    pub activity_fg: Color,
    pub activity_active_fg: Color,
    pub sidebar_bg: Color,
    pub sidebar_fg: Color,
    pub sidebar_header_fg: Color,
    pub row_active_bg: Color,
    pub row_active_fg: Color,
    pub row_selected_bg: Color,
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub gutter_fg: Color,
    pub gutter_active_fg: Color,
    pub breadcrumb_fg: Color,
    pub tab_bar_bg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_bg: Color,
    pub tab_inactive_fg: Color,
    pub divider: Color,
    pub divider_active: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub overlay_bg: Color,
    pub overlay_fg: Color,
    pub overlay_border: Color,
    pub overlay_selected_bg: Color,
    pub overlay_selected_fg: Color,
    pub error_fg: Color,
    pub window_dots: [Color; 3],
    pub token_keyword: Color,
    pub token_type: Color,
    pub token_string: Color,
    pub token_number: Color,
    pub token_constant: Color,
    pub token_component: Color,
    pub token_variable: Color,
    pub token_punctuation: Color,
    pub token_comment: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

/// `MOCKCODE_COLOR_SUPPORT` wins over `COLORTERM`/`TERM` sniffing.
pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("MOCKCODE_COLOR_SUPPORT") {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }
    let colorterm = std::env::var("COLORTERM").unwrap_or_default();
    let term = std::env::var("TERM").unwrap_or_default();
    color_support_from_env(&colorterm, &term)
}

fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

fn color_support_from_env(colorterm: &str, term: &str) -> TerminalColorSupport {
    let colorterm = colorterm.to_ascii_lowercase();
    let term = term.to_ascii_lowercase();
    let rgb = |s: &str| s.contains("truecolor") || s.contains("24bit") || s.contains("direct");
    if rgb(&colorterm) || rgb(&term) {
        TerminalColorSupport::TrueColor
    } else if term.contains("256color") {
        TerminalColorSupport::Ansi256
    } else {
        TerminalColorSupport::Ansi16
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl UiTheme {
    pub fn dark() -> Self {
        Self {
            title_bg: hex(0x3c3c3c),
            title_fg: hex(0xcccccc),
            activity_bg: hex(0x333333),
            activity_fg: hex(0x858585),
            activity_active_fg: hex(0xffffff),
            sidebar_bg: hex(0x252526),
            sidebar_fg: hex(0xcccccc),
            sidebar_header_fg: hex(0xbbbbbb),
            row_active_bg: hex(0x37373d),
            row_active_fg: hex(0xffffff),
            row_selected_bg: hex(0x2a2d2e),
            editor_bg: hex(0x1e1e1e),
            editor_fg: hex(0xd4d4d4),
            gutter_fg: hex(0x858585),
            gutter_active_fg: hex(0xc6c6c6),
            breadcrumb_fg: hex(0xa9a9a9),
            tab_bar_bg: hex(0x252526),
            tab_active_bg: hex(0x1e1e1e),
            tab_active_fg: hex(0xffffff),
            tab_inactive_bg: hex(0x2d2d2d),
            tab_inactive_fg: hex(0x969696),
            divider: hex(0x444444),
            divider_active: hex(0x007acc),
            status_bg: hex(0x007acc),
            status_fg: hex(0xffffff),
            overlay_bg: hex(0x252526),
            overlay_fg: hex(0xcccccc),
            overlay_border: hex(0x007acc),
            overlay_selected_bg: hex(0x094771),
            overlay_selected_fg: hex(0xffffff),
            error_fg: hex(0xf48771),
            window_dots: [hex(0xff5f56), hex(0xffbd2e), hex(0x27c93f)],
            token_keyword: hex(0xc586c0),
            token_type: hex(0x4ec9b0),
            token_string: hex(0xce9178),
            token_number: hex(0xb5cea8),
            token_constant: hex(0x569cd6),
            token_component: hex(0x4ec9b0),
            token_variable: hex(0x9cdcfe),
            token_punctuation: hex(0xd4d4d4),
            token_comment: hex(0x6a9955),
        }
    }

    pub fn light() -> Self {
        Self {
            title_bg: hex(0xdddddd),
            title_fg: hex(0x333333),
            activity_bg: hex(0x2c2c2c),
            activity_fg: hex(0x858585),
            activity_active_fg: hex(0xffffff),
            sidebar_bg: hex(0xf3f3f3),
            sidebar_fg: hex(0x616161),
            sidebar_header_fg: hex(0x6f6f6f),
            row_active_bg: hex(0xe4e6f1),
            row_active_fg: hex(0x333333),
            row_selected_bg: hex(0xe8e8e8),
            editor_bg: hex(0xffffff),
            editor_fg: hex(0x333333),
            gutter_fg: hex(0x237893),
            gutter_active_fg: hex(0x0b216f),
            breadcrumb_fg: hex(0x616161),
            tab_bar_bg: hex(0xf3f3f3),
            tab_active_bg: hex(0xffffff),
            tab_active_fg: hex(0x333333),
            tab_inactive_bg: hex(0xececec),
            tab_inactive_fg: hex(0x8e8e8e),
            divider: hex(0xe5e5e5),
            divider_active: hex(0x007acc),
            status_bg: hex(0x007acc),
            status_fg: hex(0xffffff),
            overlay_bg: hex(0xf3f3f3),
            overlay_fg: hex(0x333333),
            overlay_border: hex(0x007acc),
            overlay_selected_bg: hex(0x0060c0),
            overlay_selected_fg: hex(0xffffff),
            error_fg: hex(0xa1260d),
            window_dots: [hex(0xff5f56), hex(0xffbd2e), hex(0x27c93f)],
            token_keyword: hex(0xaf00db),
            token_type: hex(0x267f99),
            token_string: hex(0xa31515),
            token_number: hex(0x098658),
            token_constant: hex(0x0000ff),
            token_component: hex(0x267f99),
            token_variable: hex(0x001080),
            token_punctuation: hex(0x333333),
            token_comment: hex(0x008000),
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    pub fn token_color(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::Plain => self.editor_fg,
            TokenKind::Keyword => self.token_keyword,
            TokenKind::Type => self.token_type,
            TokenKind::String => self.token_string,
            TokenKind::Number => self.token_number,
            TokenKind::Constant => self.token_constant,
            TokenKind::Component => self.token_component,
            TokenKind::Variable => self.token_variable,
            TokenKind::Punctuation => self.token_punctuation,
            TokenKind::Comment => self.token_comment,
        }
    }

    pub fn adapted(mut self, support: TerminalColorSupport) -> Self {
        if support != TerminalColorSupport::TrueColor {
            for color in self.colors_mut() {
                *color = map_color_for_support(*color, support);
            }
        }
        self
    }

    fn colors_mut(&mut self) -> impl Iterator<Item = &mut Color> {
        let [d0, d1, d2] = &mut self.window_dots;
        [
            &mut self.title_bg,
            &mut self.title_fg,
            &mut self.activity_bg,
            &mut self.activity_fg,
            &mut self.activity_active_fg,
            &mut self.sidebar_bg,
            &mut self.sidebar_fg,
            &mut self.sidebar_header_fg,
            &mut self.row_active_bg,
            &mut self.row_active_fg,
            &mut self.row_selected_bg,
            &mut self.editor_bg,
            &mut self.editor_fg,
            &mut self.gutter_fg,
            &mut self.gutter_active_fg,
            &mut self.breadcrumb_fg,
            &mut self.tab_bar_bg,
            &mut self.tab_active_bg,
            &mut self.tab_active_fg,
            &mut self.tab_inactive_bg,
            &mut self.tab_inactive_fg,
            &mut self.divider,
            &mut self.divider_active,
            &mut self.status_bg,
            &mut self.status_fg,
            &mut self.overlay_bg,
            &mut self.overlay_fg,
            &mut self.overlay_border,
            &mut self.overlay_selected_bg,
            &mut self.overlay_selected_fg,
            &mut self.error_fg,
            d0,
            d1,
            d2,
            &mut self.token_keyword,
            &mut self.token_type,
            &mut self.token_string,
            &mut self.token_number,
            &mut self.token_constant,
            &mut self.token_component,
            &mut self.token_variable,
            &mut self.token_punctuation,
            &mut self.token_comment,
        ]
        .into_iter()
    }
}

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(0..=255, (r, g, b)))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(0..=15, (r, g, b)))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            Color::Indexed(nearest_index(0..=15, ansi256_index_to_rgb(i)))
        }
        (_, value) => value,
    }
}

fn nearest_index(range: std::ops::RangeInclusive<u8>, (r, g, b): (u8, u8, u8)) -> u8 {
    let distance = |index: &u8| {
        let (pr, pg, pb) = ansi256_index_to_rgb(*index);
        let dr = i32::from(r) - i32::from(pr);
        let dg = i32::from(g) - i32::from(pg);
        let db = i32::from(b) - i32::from(pb);
        dr * dr + dg * dg + db * db
    };
    range.min_by_key(distance).unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => ANSI16_RGB[index as usize],
        16..=231 => {
            let level = [0u8, 95, 135, 175, 215, 255];
            let offset = index - 16;
            (
                level[(offset / 36) as usize],
                level[((offset / 6) % 6) as usize],
                level[(offset % 6) as usize],
            )
        }
        _ => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    }
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
