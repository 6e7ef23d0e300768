use super::*;
use crate::core::event::KeyModifiers;

#[test]
fn defaults() {
    let keys = KeybindingService::with_defaults();
    assert_eq!(keys.get(&Key::ctrl(KeyCode::Char('q'))), Some(Command::Quit));
    assert_eq!(keys.get(&Key::simple(KeyCode::F(6))), Some(Command::ToggleFocus));
    assert_eq!(
        keys.get(&Key::ctrl_shift(KeyCode::Char('e'))),
        Some(Command::FocusExplorer)
    );
    assert_eq!(keys.get(&Key::simple(KeyCode::Char('q'))), None);
}

#[test]
fn user_rules_override_and_bad_rules_are_skipped() {
    let rules = vec![
        KeybindingRule {
            key: "ctrl+t".into(),
            command: "quit".into(),
        },
        KeybindingRule {
            key: "alt+x".into(),
            command: "doesNotExist".into(),
        },
        KeybindingRule {
            key: "hyper+??".into(),
            command: "quit".into(),
        },
    ];
    let keys = KeybindingService::from_rules(&rules);
    assert_eq!(keys.get(&Key::ctrl(KeyCode::Char('t'))), Some(Command::Quit));
    assert_eq!(
        keys.get(&Key::new(KeyCode::Char('x'), KeyModifiers::ALT)),
        None
    );
    assert_eq!(keys.len(), KeybindingService::with_defaults().len());
}

#[test]
fn bind_and_unbind() {
    let mut keys = KeybindingService::empty();
    assert!(keys.is_empty());
    keys.bind(Key::ctrl(KeyCode::Char('n')), Command::ExplorerNewFile);
    assert_eq!(
        keys.keys_for_command(Command::ExplorerNewFile),
        vec![Key::ctrl(KeyCode::Char('n'))]
    );
    assert_eq!(
        keys.unbind(&Key::ctrl(KeyCode::Char('n'))),
        Some(Command::ExplorerNewFile)
    );
    assert!(keys.is_empty());
}
