//! Effect trait definitions
//!
//! Pure trait definitions for every side effect the bootstrap layer performs.
//! This module defines **what** effects can be performed; handlers define
//! **how**.
//!
//! - `launchpad-web` implements them against `web-sys` for the browser.
//! - `launchpad-testkit` implements them in memory for deterministic tests.
//!
//! The browser is single-threaded and `web-sys` handles are `!Send`, so the
//! async traits are declared with `#[async_trait(?Send)]` and nothing here
//! requires `Send` or `Sync`.

pub mod consent;
pub mod cookies;
pub mod file;
pub mod module;
pub mod surface;

pub use consent::ConsentStorage;
pub use cookies::CookieJarEffects;
pub use file::FileSource;
pub use module::ModuleEffects;
pub use surface::SurfaceEffects;
