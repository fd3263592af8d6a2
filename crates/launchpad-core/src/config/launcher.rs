//! Launcher options
//!
//! Passed from the hosting page as a plain JS object (camelCase keys). Every
//! field has a default, so `boot({})` works against the stock markup.

use serde::{Deserialize, Serialize};

use crate::consent::DEFAULT_CONSENT_COOKIE;
use crate::cookie::is_valid_name;
use crate::errors::{LaunchError, LaunchResult};

fn default_entry_point() -> String {
    "start_with_config".to_string()
}

fn default_global_name() -> String {
    "config".to_string()
}

/// Where consent is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsentBackend {
    /// The consent marker cookie
    #[default]
    Cookie,
    /// `window.localStorage`
    LocalStorage,
}

/// How the config payload reaches the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ConfigDelivery {
    /// Call the named module export with the payload once `default()` resolves
    Argument {
        /// Export that receives the payload string or `undefined`
        #[serde(rename = "entryPoint", default = "default_entry_point")]
        entry_point: String,
    },
    /// Write the payload to a global before the module is imported
    Global {
        /// Name of the global property
        #[serde(default = "default_global_name")]
        name: String,
    },
}

impl Default for ConfigDelivery {
    fn default() -> Self {
        Self::Argument {
            entry_point: default_entry_point(),
        }
    }
}

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// State transitions and DOM operations
    Debug,
    /// Start/run milestones
    #[default]
    Info,
    /// Swallowed failures
    Warn,
    /// Aborted starts only
    Error,
}

/// DOM identifiers and module options for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LauncherConfig {
    /// Checkbox that shows and toggles consent
    pub consent_checkbox_id: String,
    /// File input for the optional config file
    pub config_input_id: String,
    /// Pre-start container, removed on start
    pub start_container_id: String,
    /// Application container, shown on start
    pub canvas_container_id: String,
    /// Button that triggers `start()`
    pub play_button_id: String,
    /// Name of the consent marker cookie (or storage key)
    pub consent_cookie: String,
    /// Consent medium
    pub consent_backend: ConsentBackend,
    /// URL of the module's JS wrapper, resolved against the page
    pub module_url: String,
    /// Config payload delivery mode
    pub config_delivery: ConfigDelivery,
    /// Parse the payload as a session config and warn on errors
    pub validate_payload: bool,
    /// Console log verbosity
    pub log_level: LogLevel,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            consent_checkbox_id: "cookie-consent".to_string(),
            config_input_id: "config-file".to_string(),
            start_container_id: "start".to_string(),
            canvas_container_id: "canvas".to_string(),
            play_button_id: "play".to_string(),
            consent_cookie: DEFAULT_CONSENT_COOKIE.to_string(),
            consent_backend: ConsentBackend::Cookie,
            module_url: "./app.js".to_string(),
            config_delivery: ConfigDelivery::default(),
            validate_payload: false,
            log_level: LogLevel::Info,
        }
    }
}

impl LauncherConfig {
    /// Start building a config from defaults.
    pub fn builder() -> LauncherConfigBuilder {
        LauncherConfigBuilder::new()
    }

    /// Reject options that would make the page unusable.
    pub fn validate(&self) -> LaunchResult<()> {
        let ids = [
            ("consentCheckboxId", &self.consent_checkbox_id),
            ("configInputId", &self.config_input_id),
            ("startContainerId", &self.start_container_id),
            ("canvasContainerId", &self.canvas_container_id),
            ("playButtonId", &self.play_button_id),
        ];
        for (field, id) in ids {
            if id.trim().is_empty() {
                return Err(LaunchError::invalid_config(format!("{field} is empty")));
            }
        }

        if !is_valid_name(&self.consent_cookie) {
            return Err(LaunchError::invalid_config(format!(
                "consentCookie {:?} is not a valid cookie name",
                self.consent_cookie
            )));
        }

        if self.module_url.trim().is_empty() {
            return Err(LaunchError::invalid_config("moduleUrl is empty"));
        }

        match &self.config_delivery {
            ConfigDelivery::Argument { entry_point } if entry_point.trim().is_empty() => {
                Err(LaunchError::invalid_config("configDelivery.entryPoint is empty"))
            }
            ConfigDelivery::Global { name } if name.trim().is_empty() => {
                Err(LaunchError::invalid_config("configDelivery.name is empty"))
            }
            _ => Ok(()),
        }
    }
}

/// Builder for [`LauncherConfig`].
#[derive(Debug, Clone, Default)]
pub struct LauncherConfigBuilder {
    config: LauncherConfig,
}

impl LauncherConfigBuilder {
    /// Create a builder seeded with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the consent checkbox id.
    pub fn consent_checkbox_id(mut self, id: impl Into<String>) -> Self {
        self.config.consent_checkbox_id = id.into();
        self
    }

    /// Set the config file input id.
    pub fn config_input_id(mut self, id: impl Into<String>) -> Self {
        self.config.config_input_id = id.into();
        self
    }

    /// Set the start and canvas container ids.
    pub fn containers(mut self, start: impl Into<String>, canvas: impl Into<String>) -> Self {
        self.config.start_container_id = start.into();
        self.config.canvas_container_id = canvas.into();
        self
    }

    /// Set the play button id.
    pub fn play_button_id(mut self, id: impl Into<String>) -> Self {
        self.config.play_button_id = id.into();
        self
    }

    /// Set the consent marker name.
    pub fn consent_cookie(mut self, name: impl Into<String>) -> Self {
        self.config.consent_cookie = name.into();
        self
    }

    /// Choose the consent medium.
    pub fn consent_backend(mut self, backend: ConsentBackend) -> Self {
        self.config.consent_backend = backend;
        self
    }

    /// Set the module URL.
    pub fn module_url(mut self, url: impl Into<String>) -> Self {
        self.config.module_url = url.into();
        self
    }

    /// Choose how the payload reaches the module.
    pub fn config_delivery(mut self, delivery: ConfigDelivery) -> Self {
        self.config.config_delivery = delivery;
        self
    }

    /// Enable payload validation warnings.
    pub fn validate_payload(mut self, enabled: bool) -> Self {
        self.config.validate_payload = enabled;
        self
    }

    /// Set console verbosity.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = level;
        self
    }

    /// Validate and return the config.
    pub fn build(self) -> LaunchResult<LauncherConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
