use super::*;

#[test]
fn truncate_keeps_wide_chars_whole() {
    assert_eq!(truncate_to_width("abc", 2), 2);
    assert_eq!(truncate_to_width("日本", 3), "日".len());
    assert_eq!(truncate_to_width("e\u{301}x", 1), "e\u{301}".len());
    assert_eq!(truncate_to_width("", 5), 0);
}

#[test]
fn ellipsize_marks_cut_text() {
    assert_eq!(ellipsize("short", 10), "short");
    assert_eq!(ellipsize("components", 6), "compo…");
    assert_eq!(ellipsize("abc", 0), "");
}

#[test]
fn window_follows_cursor() {
    let text = "abcdefghij";
    assert_eq!(window(text, 0, 5), (0, 5));
    assert_eq!(window(text, 3, 5), (0, 5));
    assert_eq!(window(text, 10, 5), (6, 10));
    assert_eq!(window(text, 2, 0), (2, 2));
}
