use super::*;
use std::fs;

#[test]
fn missing_fields_fall_back_to_defaults() {
    let settings: Settings = serde_json::from_str(r#"{ "theme": "light" }"#).unwrap();
    assert_eq!(settings.theme, ThemeKind::Light);
    assert_eq!(settings.layout, SplitConfig::default());
    assert_eq!(settings.editor.tab_size, 2);
    assert!(settings.keybindings.is_empty());
}

#[test]
fn layout_is_sanitized_into_the_view_config() {
    let settings: Settings = serde_json::from_str(
        r#"{ "layout": { "min_left_percent": 50, "max_left_percent": 30 }, "editor": { "tab_size": 0 } }"#,
    )
    .unwrap();
    let config = settings.view_config();
    assert_eq!(config.split.min_left_percent, 10.0);
    assert_eq!(config.split.max_left_percent, 40.0);
    assert_eq!(config.tab_size, 1);
}

#[test]
fn ensure_then_load_round_trips_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file(&path).unwrap();
    assert!(path.exists());
    assert_eq!(load_settings(&path).unwrap(), Settings::default());
}

#[test]
fn existing_file_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

    ensure_settings_file(&path).unwrap();
    assert_eq!(load_or_default(Some(path)).theme, ThemeKind::Light);
}

#[test]
fn broken_file_yields_parse_error_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(load_settings(&path), Err(SettingsError::Parse(_))));
    assert_eq!(load_or_default(Some(path)), Settings::default());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
    assert!(err.to_string().starts_with("IO error"));
}

#[test]
fn keybinding_strings() {
    assert_eq!(
        parse_keybinding("ctrl+shift+e"),
        Some(Key::ctrl_shift(KeyCode::Char('e')))
    );
    assert_eq!(
        parse_keybinding("Ctrl+E"),
        Some(Key::ctrl_shift(KeyCode::Char('e')))
    );
    assert_eq!(parse_keybinding("f6"), Some(Key::simple(KeyCode::F(6))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(
        parse_keybinding("ctrl+pagedown"),
        Some(Key::ctrl(KeyCode::PageDown))
    );
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+nope"), None);
}
