//! Terminal application: theme and the workbench that hosts the store.

pub mod theme;
pub mod workbench;

pub use theme::{detect_terminal_color_support, TerminalColorSupport, UiTheme};
pub use workbench::{CaptureRegistry, DragCapture, Workbench, WorkbenchLayout};
