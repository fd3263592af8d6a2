//! # Launchpad App
//!
//! Portable logic for the bootstrap layer, generic over the effect traits in
//! `launchpad-core`:
//!
//! - [`CookieConsentStore`] persists consent in the cookie jar
//! - [`ConfigLoader`] turns an optional selected file into a payload
//! - [`BootstrapController`] runs the one-shot start sequence
//!
//! Nothing here touches the browser directly; `launchpad-web` supplies the
//! handlers and `launchpad-testkit` supplies in-memory ones.

pub mod consent;
pub mod controller;
pub mod loader;

pub use consent::CookieConsentStore;
pub use controller::BootstrapController;
pub use loader::ConfigLoader;
