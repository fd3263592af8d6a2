//! Recording surface

use std::cell::Cell;

use launchpad_core::{LaunchError, LaunchResult, SurfaceEffects};

use crate::events::{EventLog, LaunchEvent};

/// Tracks container state and logs every transition.
#[derive(Debug)]
pub struct RecordingSurface {
    log: EventLog,
    start_attached: Cell<bool>,
    canvas_visible: Cell<bool>,
    fail_show_canvas: Cell<bool>,
}

impl RecordingSurface {
    /// Start container attached, canvas hidden
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            start_attached: Cell::new(true),
            canvas_visible: Cell::new(false),
            fail_show_canvas: Cell::new(false),
        }
    }

    /// Make `show_canvas` fail, like a missing canvas element
    pub fn fail_show_canvas(&self, fail: bool) {
        self.fail_show_canvas.set(fail);
    }

    /// Whether the start container is in the document
    pub fn start_attached(&self) -> bool {
        self.start_attached.get()
    }

    /// Whether the canvas container is visible
    pub fn canvas_visible(&self) -> bool {
        self.canvas_visible.get()
    }
}

impl SurfaceEffects for RecordingSurface {
    fn remove_start_screen(&self) -> LaunchResult<()> {
        if !self.start_attached.get() {
            return Err(LaunchError::dom("start container already detached"));
        }
        self.start_attached.set(false);
        self.log.push(LaunchEvent::StartScreenRemoved);
        Ok(())
    }

    fn show_canvas(&self) -> LaunchResult<()> {
        if self.fail_show_canvas.get() {
            return Err(LaunchError::dom("canvas container not found"));
        }
        self.canvas_visible.set(true);
        self.log.push(LaunchEvent::CanvasShown);
        Ok(())
    }

    fn restore_start_screen(&self) -> LaunchResult<()> {
        if !self.start_attached.get() {
            self.start_attached.set(true);
            self.log.push(LaunchEvent::StartScreenRestored);
        }
        Ok(())
    }

    fn hide_canvas(&self) -> LaunchResult<()> {
        if self.canvas_visible.get() {
            self.canvas_visible.set(false);
            self.log.push(LaunchEvent::CanvasHidden);
        }
        Ok(())
    }
}
