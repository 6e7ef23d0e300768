//! Two-pane split layout: a draggable divider expressed as a clamped left-pane percentage.
//!
//! The engine is a two-state machine (idle / dragging). It never caches the container geometry:
//! every move carries the bounds the caller measured for that event.

use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_LEFT_PERCENT: f32 = 20.0;
pub const DEFAULT_MIN_LEFT_PERCENT: f32 = 10.0;
pub const DEFAULT_MAX_LEFT_PERCENT: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub initial_left_percent: f32,
    pub min_left_percent: f32,
    pub max_left_percent: f32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            initial_left_percent: DEFAULT_INITIAL_LEFT_PERCENT,
            min_left_percent: DEFAULT_MIN_LEFT_PERCENT,
            max_left_percent: DEFAULT_MAX_LEFT_PERCENT,
        }
    }
}

fn sane_percent(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        fallback
    }
}

impl SplitConfig {
    /// Builds a config satisfying `0 <= min <= initial <= max <= 100`.
    ///
    /// Out-of-range values are clamped; `min > max` falls back to the default bounds.
    pub fn new(initial: f32, min: f32, max: f32) -> Self {
        let mut min_left = sane_percent(min, DEFAULT_MIN_LEFT_PERCENT);
        let mut max_left = sane_percent(max, DEFAULT_MAX_LEFT_PERCENT);
        if min_left > max_left {
            tracing::warn!(min, max, "split bounds inverted, using defaults");
            min_left = DEFAULT_MIN_LEFT_PERCENT;
            max_left = DEFAULT_MAX_LEFT_PERCENT;
        }
        let initial_left =
            sane_percent(initial, DEFAULT_INITIAL_LEFT_PERCENT).clamp(min_left, max_left);

        let config = Self {
            initial_left_percent: initial_left,
            min_left_percent: min_left,
            max_left_percent: max_left,
        };
        if config.initial_left_percent != initial
            || config.min_left_percent != min
            || config.max_left_percent != max
        {
            tracing::debug!(?config, initial, min, max, "split config sanitized");
        }
        config
    }

    pub fn sanitized(self) -> Self {
        Self::new(
            self.initial_left_percent,
            self.min_left_percent,
            self.max_left_percent,
        )
    }
}

/// Horizontal extent of the container holding both panes, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerBounds {
    pub left: u16,
    pub width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone)]
pub struct SplitLayout {
    config: SplitConfig,
    left_percent: f32,
    phase: DragPhase,
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

impl SplitLayout {
    pub fn new(config: SplitConfig) -> Self {
        let config = config.sanitized();
        Self {
            left_percent: config.initial_left_percent,
            config,
            phase: DragPhase::Idle,
        }
    }

    pub fn config(&self) -> SplitConfig {
        self.config
    }

    pub fn left_percent(&self) -> f32 {
        self.left_percent
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn pointer_down(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.phase = DragPhase::Dragging;
        true
    }

    /// Recomputes the left width from the pointer column. Ignored unless dragging.
    pub fn pointer_move(&mut self, pointer_x: u16, container: ContainerBounds) -> bool {
        if !self.is_dragging() || container.width == 0 {
            return false;
        }

        let offset = f32::from(pointer_x) - f32::from(container.left);
        let percent = offset * 100.0 / f32::from(container.width);
        let clamped = percent.clamp(self.config.min_left_percent, self.config.max_left_percent);
        if clamped == self.left_percent {
            return false;
        }
        self.left_percent = clamped;
        true
    }

    pub fn pointer_up(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.phase = DragPhase::Idle;
        true
    }

    /// Cancellation (focus loss, capture lost) ends the drag exactly like a release.
    pub fn pointer_cancel(&mut self) -> bool {
        self.pointer_up()
    }

    /// Width of the left pane in cells for a container `total` cells wide.
    pub fn left_width(&self, total: u16) -> u16 {
        let cells = (f32::from(total) * self.left_percent / 100.0).round();
        (cells.max(0.0) as u16).min(total)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/split.rs"]
mod tests;
