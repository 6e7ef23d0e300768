//! mockcode - a mock VSCode workbench for the terminal.
//!
//! - core: frontend-neutral events and commands
//! - models: the in-memory file tree and its seed
//! - kernel: application state, actions and the store
//! - services: settings and keybindings
//! - views, app, tui: the ratatui/crossterm frontend (`tui` feature)

pub mod core;
pub mod kernel;
pub mod models;
pub mod services;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
