//! Optional config file loading

use launchpad_core::{ConfigPayload, FileSource, LaunchResult};

/// Reads the user's selected config file, if any, into a [`ConfigPayload`].
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    validate: bool,
}

impl ConfigLoader {
    /// Loader that passes text through without looking at it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also parse the payload as a session config and warn when it is
    /// invalid. The payload is delivered unchanged either way.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Read `selected` as text.
    ///
    /// `None` resolves immediately with no payload. A read failure is
    /// returned as [`launchpad_core::LaunchError::ConfigRead`].
    pub async fn load<F>(&self, selected: Option<&F>) -> LaunchResult<Option<ConfigPayload>>
    where
        F: FileSource + ?Sized,
    {
        let Some(file) = selected else {
            tracing::debug!("no config file selected");
            return Ok(None);
        };

        let name = file.name();
        let text = file.read_text().await?;
        tracing::info!(file = %name, bytes = text.len(), "config file loaded");

        let payload = ConfigPayload::new(text);
        if self.validate {
            if let Err(err) = payload.parse_session_config() {
                tracing::warn!(
                    file = %name,
                    error = %err,
                    "config file is not a valid session config"
                );
            }
        }
        Ok(Some(payload))
    }
}
