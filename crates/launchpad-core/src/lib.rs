//! # Launchpad Core
//!
//! Foundation types for the browser bootstrap layer that sits in front of a
//! WASM application module:
//!
//! - [`ConsentFlag`] and the cookie wire format it is stored in
//! - [`ConfigPayload`], the optional user-supplied config text
//! - [`ModuleSession`], the one-shot launch lifecycle
//! - [`LaunchError`], the single error type
//! - [`config`], launcher options and the session config schema
//! - [`effects`], traits for cookies, files, DOM containers, and module loading
//!
//! This crate has no browser dependencies. Logic lives in `launchpad-app`,
//! browser handlers in `launchpad-web`.

pub mod config;
pub mod consent;
pub mod cookie;
pub mod effects;
pub mod errors;
pub mod payload;
pub mod session;

pub use config::{LauncherConfig, SessionConfig};
pub use consent::ConsentFlag;
pub use cookie::{CookieEntry, CookieExpiry, SetCookie};
pub use effects::{ConsentStorage, CookieJarEffects, FileSource, ModuleEffects, SurfaceEffects};
pub use errors::{LaunchError, LaunchResult};
pub use payload::ConfigPayload;
pub use session::{ModuleSession, StartOutcome};
