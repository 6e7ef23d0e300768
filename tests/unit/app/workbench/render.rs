use super::*;
use crate::kernel::syntax::TokenKind;

fn plain(text: &str) -> Token<'_> {
    Token {
        text,
        kind: TokenKind::Plain,
    }
}

fn joined(spans: &[Span<'_>]) -> String {
    spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn tabs_expand_to_the_next_stop() {
    let theme = UiTheme::dark();
    let tokens = [plain("a\tb")];
    assert_eq!(joined(&visible_spans(&tokens, &theme, 0, 10, 4)), "a   b");
}

#[test]
fn horizontal_scroll_clips_the_left_edge() {
    let theme = UiTheme::dark();
    let tokens = [plain("hello "), plain("world")];
    assert_eq!(joined(&visible_spans(&tokens, &theme, 3, 5, 2)), "lo wo");
}

#[test]
fn wide_graphemes_cut_by_an_edge_become_spaces() {
    let theme = UiTheme::dark();
    let tokens = [plain("a中b")];
    assert_eq!(joined(&visible_spans(&tokens, &theme, 2, 3, 2)), " b");
    assert_eq!(joined(&visible_spans(&tokens, &theme, 0, 2, 2)), "a ");
}

#[test]
fn each_token_keeps_its_color() {
    let theme = UiTheme::dark();
    let tokens = [
        Token {
            text: "const",
            kind: TokenKind::Keyword,
        },
        plain(" x"),
    ];
    let spans = visible_spans(&tokens, &theme, 0, 20, 2);
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].style.fg, Some(theme.token_keyword));
    assert_eq!(spans[1].style.fg, Some(theme.token_color(TokenKind::Plain)));
}

#[test]
fn cursor_outside_the_viewport_is_hidden() {
    let mut tab = OpenTab::new("f".into());
    let text = Rect::new(10, 5, 20, 3);
    let content = "one\ntwo\nthree\nfour";

    tab.cursor = 5; // "two", column 1
    assert_eq!(cursor_cell(content, &tab, text, 2), Some((11, 6)));

    tab.cursor = content.len();
    assert_eq!(cursor_cell(content, &tab, text, 2), None);
    tab.scroll_row = 1;
    assert_eq!(cursor_cell(content, &tab, text, 2), Some((14, 7)));
}
