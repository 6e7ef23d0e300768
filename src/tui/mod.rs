//! Terminal integration (crossterm).
//!
//! Kept apart from `kernel` and `models` so the state machine does not depend on terminal crates.

pub mod crossterm;
pub mod terminal_guard;
