//! Key chord to command mapping.

use rustc_hash::FxHashMap;

use crate::core::event::{Key, KeyCode};
use crate::core::Command;

use super::settings::{parse_keybinding, KeybindingRule};

pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl KeybindingService {
    pub fn empty() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut service = Self::empty();
        service.bind(Key::ctrl(KeyCode::Char('q')), Command::Quit);
        service.bind(Key::ctrl(KeyCode::Char('t')), Command::ToggleTheme);
        service.bind(Key::ctrl(KeyCode::Char('w')), Command::CloseTab);
        service.bind(Key::ctrl(KeyCode::PageDown), Command::NextTab);
        service.bind(Key::ctrl(KeyCode::PageUp), Command::PrevTab);
        service.bind(Key::ctrl_shift(KeyCode::Char('e')), Command::FocusExplorer);
        service.bind(Key::simple(KeyCode::F(6)), Command::ToggleFocus);
        service.bind(Key::shift(KeyCode::F(10)), Command::ExplorerContextMenu);
        service
    }

    /// Defaults overlaid with user rules. Unparseable rules are skipped with a warning.
    pub fn from_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::with_defaults();
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unknown key");
                continue;
            };
            let Some(command) = Command::from_name(&rule.command) else {
                tracing::warn!(command = %rule.command, "ignoring keybinding with unknown command");
                continue;
            };
            service.bind(key, command);
        }
        service
    }

    pub fn get(&self, key: &Key) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    pub fn keys_for_command(&self, command: Command) -> Vec<Key> {
        self.bindings
            .iter()
            .filter(|(_, cmd)| **cmd == command)
            .map(|(key, _)| *key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/keybinding.rs"]
mod tests;
