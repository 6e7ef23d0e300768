//! Conversion from crossterm events into [`crate::core::event`] types.

use crossterm::event as ct;

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Converts a terminal event. Key releases are dropped; the workbench reacts to presses and
/// repeats only.
pub fn into_input_event(event: ct::Event) -> Option<InputEvent> {
    let event = match event {
        ct::Event::Key(key) if key.kind == ct::KeyEventKind::Release => return None,
        ct::Event::Key(key) => InputEvent::Key(key.into()),
        ct::Event::Mouse(mouse) => InputEvent::Mouse(mouse.into()),
        ct::Event::Resize(w, h) => InputEvent::Resize(w, h),
        ct::Event::FocusGained => InputEvent::FocusGained,
        ct::Event::FocusLost => InputEvent::FocusLost,
        ct::Event::Paste(text) => InputEvent::Paste(text),
    };
    Some(event)
}

impl From<ct::KeyModifiers> for KeyModifiers {
    fn from(mods: ct::KeyModifiers) -> Self {
        [
            (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
            (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
            (ct::KeyModifiers::ALT, KeyModifiers::ALT),
            (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
        ]
        .into_iter()
        .filter(|(ct_mod, _)| mods.contains(*ct_mod))
        .fold(KeyModifiers::NONE, |acc, (_, m)| acc | m)
    }
}

impl From<ct::KeyEvent> for KeyEvent {
    fn from(event: ct::KeyEvent) -> Self {
        let mut modifiers = KeyModifiers::from(event.modifiers);
        let code = match event.code {
            ct::KeyCode::Char(ch) => KeyCode::Char(ch),
            ct::KeyCode::Enter => KeyCode::Enter,
            ct::KeyCode::Tab => KeyCode::Tab,
            ct::KeyCode::BackTab => KeyCode::BackTab,
            ct::KeyCode::Esc => KeyCode::Esc,
            ct::KeyCode::Backspace => KeyCode::Backspace,
            ct::KeyCode::Delete => KeyCode::Delete,
            ct::KeyCode::Up => KeyCode::Up,
            ct::KeyCode::Down => KeyCode::Down,
            ct::KeyCode::Left => KeyCode::Left,
            ct::KeyCode::Right => KeyCode::Right,
            ct::KeyCode::Home => KeyCode::Home,
            ct::KeyCode::End => KeyCode::End,
            ct::KeyCode::PageUp => KeyCode::PageUp,
            ct::KeyCode::PageDown => KeyCode::PageDown,
            ct::KeyCode::F(n) => KeyCode::F(n),
            // Some terminals report Ctrl+Space as NUL.
            ct::KeyCode::Null => {
                modifiers |= KeyModifiers::CONTROL;
                KeyCode::Char(' ')
            }
            _ => KeyCode::Unknown,
        };
        let kind = match event.kind {
            ct::KeyEventKind::Press => KeyEventKind::Press,
            ct::KeyEventKind::Release => KeyEventKind::Release,
            ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        };
        KeyEvent {
            code,
            modifiers,
            kind,
        }
    }
}

impl From<ct::MouseButton> for MouseButton {
    fn from(button: ct::MouseButton) -> Self {
        match button {
            ct::MouseButton::Left => MouseButton::Left,
            ct::MouseButton::Right => MouseButton::Right,
            ct::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

impl From<ct::MouseEvent> for MouseEvent {
    fn from(event: ct::MouseEvent) -> Self {
        let kind = match event.kind {
            ct::MouseEventKind::Down(b) => MouseEventKind::Down(b.into()),
            ct::MouseEventKind::Up(b) => MouseEventKind::Up(b.into()),
            ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(b.into()),
            ct::MouseEventKind::Moved => MouseEventKind::Moved,
            ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
            ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
            ct::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
            ct::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
        };
        MouseEvent {
            kind,
            column: event.column,
            row: event.row,
            modifiers: event.modifiers.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
