//! Semantic commands, independent of the keys bound to them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    ToggleTheme,
    CloseTab,
    NextTab,
    PrevTab,
    FocusExplorer,
    FocusEditor,
    ToggleFocus,
    ExplorerNewFile,
    ExplorerNewFolder,
    ExplorerRename,
    ExplorerDelete,
    ExplorerContextMenu,
}

impl Command {
    pub const ALL: [Command; 13] = [
        Command::Quit,
        Command::ToggleTheme,
        Command::CloseTab,
        Command::NextTab,
        Command::PrevTab,
        Command::FocusExplorer,
        Command::FocusEditor,
        Command::ToggleFocus,
        Command::ExplorerNewFile,
        Command::ExplorerNewFolder,
        Command::ExplorerRename,
        Command::ExplorerDelete,
        Command::ExplorerContextMenu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::ToggleTheme => "toggleTheme",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::FocusExplorer => "focusExplorer",
            Command::FocusEditor => "focusEditor",
            Command::ToggleFocus => "toggleFocus",
            Command::ExplorerNewFile => "explorerNewFile",
            Command::ExplorerNewFolder => "explorerNewFolder",
            Command::ExplorerRename => "explorerRename",
            Command::ExplorerDelete => "explorerDelete",
            Command::ExplorerContextMenu => "explorerContextMenu",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
