//! Ordered record of what the launch sequence did

use std::cell::RefCell;
use std::rc::Rc;

/// One observable step of a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchEvent {
    /// A file read began
    ConfigRead {
        /// File name
        file: String,
    },
    /// The start container was detached
    StartScreenRemoved,
    /// The canvas container was made visible
    CanvasShown,
    /// The start container was put back
    StartScreenRestored,
    /// The canvas container was hidden again
    CanvasHidden,
    /// The module import was issued, with the payload it received
    ModuleImported {
        /// Payload text, if any
        config: Option<String>,
    },
}

/// Shared, append-only event log. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<LaunchEvent>>>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&self, event: LaunchEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Snapshot of all events so far
    pub fn events(&self) -> Vec<LaunchEvent> {
        self.events.borrow().clone()
    }

    /// Position of the first event equal to `event`
    pub fn position(&self, event: &LaunchEvent) -> Option<usize> {
        self.events.borrow().iter().position(|e| e == event)
    }

    /// Number of module imports issued
    pub fn import_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, LaunchEvent::ModuleImported { .. }))
            .count()
    }

    /// Drop all events
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
