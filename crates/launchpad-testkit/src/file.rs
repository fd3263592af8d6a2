//! Scripted file sources

use async_trait::async_trait;
use launchpad_core::{FileSource, LaunchError, LaunchResult};

use crate::events::{EventLog, LaunchEvent};
use crate::yield_now::yield_now;

/// A file whose read yields to the executor once, then returns canned text or
/// a canned error.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    content: Result<String, String>,
    log: Option<EventLog>,
}

impl MemoryFile {
    /// File that reads as `text`
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Ok(text.into()),
            log: None,
        }
    }

    /// File whose read fails with `message`
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Err(message.into()),
            log: None,
        }
    }

    /// Record a [`LaunchEvent::ConfigRead`] when the read starts
    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }
}

#[async_trait(?Send)]
impl FileSource for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn read_text(&self) -> LaunchResult<String> {
        if let Some(log) = &self.log {
            log.push(LaunchEvent::ConfigRead {
                file: self.name.clone(),
            });
        }
        yield_now().await;
        self.content.clone().map_err(LaunchError::config_read)
    }
}
