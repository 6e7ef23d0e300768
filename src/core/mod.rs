//! Frontend-neutral building blocks: input events, commands and text windowing.

pub mod command;
pub mod event;
pub mod text_window;

pub use command::Command;
pub use event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
