//! Services around the kernel: user settings and the keymap.

pub mod keybinding;
pub mod settings;

pub use keybinding::KeybindingService;
pub use settings::{KeybindingRule, Settings, SettingsError};
