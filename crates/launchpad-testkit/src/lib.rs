//! Launchpad Testing Infrastructure
//!
//! In-memory handlers for every effect trait in `launchpad-core`, plus a
//! shared [`EventLog`] so tests can assert on the order in which the launch
//! sequence touched the page and the module.
//!
//! # Usage
//!
//! ```rust,no_run
//! use launchpad_testkit::*;
//!
//! let log = EventLog::new();
//! let surface = RecordingSurface::new(log.clone());
//! let module = RecordingModule::new(log.clone());
//! // ... build a BootstrapController over them and call start()
//! ```

pub mod cookies;
pub mod events;
pub mod file;
pub mod module;
pub mod surface;
pub mod yield_now;

pub use cookies::MemoryCookieJar;
pub use events::{EventLog, LaunchEvent};
pub use file::MemoryFile;
pub use module::RecordingModule;
pub use surface::RecordingSurface;
pub use yield_now::yield_now;
