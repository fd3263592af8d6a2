//! Recording module loader

use std::cell::Cell;

use async_trait::async_trait;
use launchpad_core::{ConfigPayload, LaunchError, LaunchResult, ModuleEffects};

use crate::events::{EventLog, LaunchEvent};
use crate::yield_now::yield_now;

/// Logs each import with the payload it received, yields once like a real
/// `import()`, then succeeds unless failures were queued.
#[derive(Debug)]
pub struct RecordingModule {
    log: EventLog,
    pending_failures: Cell<usize>,
}

impl RecordingModule {
    /// Loader that always succeeds
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            pending_failures: Cell::new(0),
        }
    }

    /// Make the next `count` imports fail
    pub fn fail_next(&self, count: usize) {
        self.pending_failures.set(count);
    }
}

#[async_trait(?Send)]
impl ModuleEffects for RecordingModule {
    async fn initialize(&self, config: Option<ConfigPayload>) -> LaunchResult<()> {
        self.log.push(LaunchEvent::ModuleImported {
            config: config.map(ConfigPayload::into_string),
        });
        yield_now().await;

        let failures = self.pending_failures.get();
        if failures > 0 {
            self.pending_failures.set(failures - 1);
            return Err(LaunchError::module_load("instantiate failed: invalid wasm"));
        }
        Ok(())
    }
}
