//! Unified error type for the bootstrap layer
//!
//! Every failure in the consent, config, and launch paths is one of these
//! variants. None of them is fatal to the page: callers either log and carry
//! on (consent writes) or roll the launch back to a retryable state.

use serde::{Deserialize, Serialize};

/// Unified error type for all Launchpad operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum LaunchError {
    /// The consent medium refused a write
    #[error("Consent write failed: {message}")]
    ConsentWrite {
        /// What the storage medium reported
        message: String,
    },

    /// The selected configuration file could not be read
    #[error("Config read failed: {message}")]
    ConfigRead {
        /// Error message describing the read failure
        message: String,
    },

    /// Importing or initializing the application module failed
    #[error("Module load failed: {message}")]
    ModuleLoad {
        /// Error message describing the import/initialize failure
        message: String,
    },

    /// A required DOM element is missing or has the wrong type
    #[error("DOM error: {message}")]
    Dom {
        /// Error message describing the DOM problem
        message: String,
    },

    /// Launcher options or a session config failed validation
    #[error("Invalid config: {message}")]
    InvalidConfig {
        /// Error message describing the invalid field
        message: String,
    },
}

impl LaunchError {
    /// Create a consent write error
    pub fn consent_write(message: impl Into<String>) -> Self {
        Self::ConsentWrite {
            message: message.into(),
        }
    }

    /// Create a config read error
    pub fn config_read(message: impl Into<String>) -> Self {
        Self::ConfigRead {
            message: message.into(),
        }
    }

    /// Create a module load error
    pub fn module_load(message: impl Into<String>) -> Self {
        Self::ModuleLoad {
            message: message.into(),
        }
    }

    /// Create a DOM error
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether a `start()` that failed with this error can simply be retried.
    ///
    /// Config read failures need a different file, and invalid options need
    /// a page reload, so only module and DOM failures count.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ModuleLoad { .. } | Self::Dom { .. })
    }
}

impl From<serde_json::Error> for LaunchError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

/// Standard Result type for Launchpad operations
pub type LaunchResult<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LaunchError::config_read("permission denied");
        assert!(matches!(err, LaunchError::ConfigRead { .. }));
        assert_eq!(err.to_string(), "Config read failed: permission denied");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(LaunchError::module_load("404").is_retryable());
        assert!(LaunchError::dom("missing #canvas").is_retryable());
        assert!(!LaunchError::config_read("gone").is_retryable());
        assert!(!LaunchError::consent_write("blocked").is_retryable());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LaunchError::from(json_err);
        assert!(matches!(err, LaunchError::InvalidConfig { .. }));
    }
}
