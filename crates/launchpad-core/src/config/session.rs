//! Session config schema shared with the application module
//!
//! This is the JSON document a user selects before pressing play. The module
//! parses it at startup; the launcher only uses it for optional validation.

use serde::{Deserialize, Serialize};

use crate::errors::{LaunchError, LaunchResult};
use crate::payload::ConfigPayload;

/// Audio backend the module should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioBackend {
    /// Try WebAudio, fall back to the dummy backend
    #[default]
    Auto,
    /// WebAudio only
    WebAudio,
    /// No audio or MIDI I/O
    Dummy,
}

/// Standalone wrapper settings read by the module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Audio backend
    pub backend: AudioBackend,
    /// Input device name, or the backend default
    pub input_device: Option<String>,
    /// Output device name, or the backend default
    pub output_device: Option<String>,
    /// Number of input channels, or the plugin's default layout
    pub input_channels: Option<u32>,
    /// Number of output channels, or the plugin's default layout
    pub output_channels: Option<u32>,
    /// MIDI input port name
    pub midi_input: Option<String>,
    /// MIDI output port name
    pub midi_output: Option<String>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Buffer size in samples
    pub period_size: u32,
    /// Editor scale factor
    pub dpi_scale: f32,
    /// Transport tempo in BPM
    pub tempo: f32,
    /// Time signature numerator
    pub timesig_num: u32,
    /// Time signature denominator
    pub timesig_denom: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: AudioBackend::Auto,
            input_device: None,
            output_device: None,
            input_channels: None,
            output_channels: None,
            midi_input: None,
            midi_output: None,
            sample_rate: 48000,
            period_size: 512,
            dpi_scale: 1.0,
            tempo: 120.0,
            timesig_num: 4,
            timesig_denom: 4,
        }
    }
}

impl SessionConfig {
    /// Parse `payload` if present and valid, otherwise return defaults.
    pub fn from_payload_or_default(payload: Option<&ConfigPayload>) -> Self {
        payload
            .and_then(|payload| payload.parse_session_config().ok())
            .unwrap_or_default()
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> LaunchResult<()> {
        if self.sample_rate == 0 {
            return Err(LaunchError::invalid_config("sample_rate must be non-zero"));
        }
        if self.period_size == 0 {
            return Err(LaunchError::invalid_config("period_size must be non-zero"));
        }
        if self.dpi_scale.is_nan() || self.dpi_scale <= 0.0 {
            return Err(LaunchError::invalid_config("dpi_scale must be positive"));
        }
        if self.tempo.is_nan() || self.tempo <= 0.0 {
            return Err(LaunchError::invalid_config("tempo must be positive"));
        }
        if self.timesig_num == 0 {
            return Err(LaunchError::invalid_config("timesig_num must be non-zero"));
        }
        if !self.timesig_denom.is_power_of_two() {
            return Err(LaunchError::invalid_config(format!(
                "timesig_denom must be a power of two, got {}",
                self.timesig_denom
            )));
        }
        Ok(())
    }
}
