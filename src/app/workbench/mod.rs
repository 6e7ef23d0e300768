//! The terminal host of the store: routes input to actions and renders the state.

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::core::event::InputEvent;
use crate::kernel::{Action, AppState, FocusTarget, Store, ThemeKind, ViewConfig};
use crate::models::seed_tree;
use crate::services::{KeybindingService, Settings};
use crate::views::ExplorerView;

use super::theme::{detect_terminal_color_support, TerminalColorSupport, UiTheme};

mod capture;
mod key;
mod layout;
mod mouse;
mod render;

pub use capture::{CaptureRegistry, DragCapture};
pub use layout::WorkbenchLayout;

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    color_support: TerminalColorSupport,
    theme: UiTheme,
    explorer: ExplorerView,
    captures: CaptureRegistry,
    drag: Option<DragCapture>,
    area: Rect,
    layout: Option<WorkbenchLayout>,
}

impl Workbench {
    /// A workbench over the seed tree, configured from `settings`.
    pub fn new(settings: &Settings) -> Self {
        let state = AppState::new(seed_tree(), settings.view_config());
        let keybindings = KeybindingService::from_rules(&settings.keybindings);
        Self::with_parts(state, keybindings, detect_terminal_color_support())
    }

    pub fn with_parts(
        state: AppState,
        keybindings: KeybindingService,
        color_support: TerminalColorSupport,
    ) -> Self {
        let theme = UiTheme::for_kind(state.ui.theme).adapted(color_support);
        Self {
            store: Store::new(state),
            keybindings,
            color_support,
            theme,
            explorer: ExplorerView::new(),
            captures: CaptureRegistry::new(),
            drag: None,
            area: Rect::default(),
            layout: None,
        }
    }

    /// Defaults throughout, RGB colors. Used by tests and embedders without a settings file.
    pub fn with_defaults() -> Self {
        Self::with_parts(
            AppState::new(seed_tree(), ViewConfig::default()),
            KeybindingService::with_defaults(),
            TerminalColorSupport::TrueColor,
        )
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub fn captures(&self) -> &CaptureRegistry {
        &self.captures
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn layout(&self) -> Option<&WorkbenchLayout> {
        self.layout.as_ref()
    }

    /// Routes one input event. Returns whether anything visible changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Paste(text) => self.handle_paste(text),
            InputEvent::Resize(width, height) => {
                self.area = Rect::new(0, 0, *width, *height);
                true
            }
            InputEvent::FocusLost => self.cancel_drag(),
            InputEvent::FocusGained => false,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let prev_theme = self.store.state().ui.theme;
        let changed = self.store.dispatch(action).state_changed;
        let theme = self.store.state().ui.theme;
        if theme != prev_theme {
            self.apply_theme(theme);
        }
        changed
    }

    fn apply_theme(&mut self, kind: ThemeKind) {
        tracing::info!(theme = ?kind, "theme changed");
        self.theme = UiTheme::for_kind(kind).adapted(self.color_support);
    }

    fn begin_drag(&mut self) -> bool {
        if !self.dispatch(Action::SplitPointerDown) {
            return false;
        }
        self.drag = Some(self.captures.acquire());
        true
    }

    fn end_drag(&mut self, action: Action) -> bool {
        let changed = self.dispatch(action);
        self.drag = None;
        changed
    }

    fn cancel_drag(&mut self) -> bool {
        if self.drag.is_none() {
            return false;
        }
        tracing::debug!("drag cancelled");
        self.end_drag(Action::SplitPointerCancel)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        render::render(self, frame);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/mod.rs"]
mod tests;
