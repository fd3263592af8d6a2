//! Configuration: launcher options from the page, session config for the module

pub mod launcher;
pub mod session;

pub use launcher::{ConfigDelivery, ConsentBackend, LauncherConfig, LauncherConfigBuilder, LogLevel};
pub use session::{AudioBackend, SessionConfig};
