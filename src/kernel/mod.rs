//! Headless application core: state, actions and the reducing store.

pub mod action;
pub mod editor;
pub mod split;
pub mod state;
pub mod store;
pub mod syntax;

pub use action::Action;
pub use split::{ContainerBounds, DragPhase, SplitConfig, SplitLayout};
pub use state::{
    AppState, ConfirmDialogState, ContextMenuItem, ContextMenuState, ExplorerState, FocusTarget,
    InputDialogKind, InputDialogState, OpenTab, PendingAction, ThemeKind, UiState, ViewConfig,
};
pub use store::{DispatchResult, Store};
