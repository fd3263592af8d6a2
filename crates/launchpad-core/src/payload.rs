//! User-supplied configuration payload

use crate::config::SessionConfig;
use crate::errors::LaunchResult;

/// Raw text read from the user's configuration file.
///
/// Carried to the module exactly as read; the launcher never rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPayload(String);

impl ConfigPayload {
    /// Wrap text read from a file.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The payload text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the payload text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the file was empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the payload as a [`SessionConfig`] and validate it.
    pub fn parse_session_config(&self) -> LaunchResult<SessionConfig> {
        let config: SessionConfig = serde_json::from_str(&self.0)?;
        config.validate()?;
        Ok(config)
    }
}

impl From<String> for ConfigPayload {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_preserves_text() {
        let text = "{ \"tempo\": 90.0 }\r\n\u{feff}trailing";
        let payload = ConfigPayload::new(text);
        assert_eq!(payload.as_str(), text);
        assert_eq!(payload.len(), text.len());
        assert_eq!(payload.into_string(), text);
    }

    #[test]
    fn test_parse_session_config() {
        let payload = ConfigPayload::new(r#"{"sample_rate": 44100, "backend": "dummy"}"#);
        let config = payload.parse_session_config().unwrap();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.period_size, 512);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ConfigPayload::new("not json").parse_session_config().is_err());
        assert!(ConfigPayload::new(r#"{"sample_rate": 0}"#)
            .parse_session_config()
            .is_err());
    }
}
