//! Pointer capture for the split divider.
//!
//! A drag owns a [`DragCapture`]; while it is alive every mouse event goes to the divider.
//! Dropping the guard (release, cancel, or workbench teardown) unregisters it, so the
//! registry count always returns to zero.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct CaptureRegistry {
    active: Rc<Cell<usize>>,
}

impl CaptureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> DragCapture {
        self.active.set(self.active.get() + 1);
        tracing::trace!(active = self.active.get(), "pointer capture acquired");
        DragCapture {
            active: Rc::clone(&self.active),
        }
    }

    /// Number of live captures.
    pub fn active(&self) -> usize {
        self.active.get()
    }
}

#[derive(Debug)]
pub struct DragCapture {
    active: Rc<Cell<usize>>,
}

impl Drop for DragCapture {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        tracing::trace!(active = self.active.get(), "pointer capture released");
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/capture.rs"]
mod tests;
