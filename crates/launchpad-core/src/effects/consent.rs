//! Consent storage capability
//!
//! # Effect Classification
//!
//! - **Category**: Application Effect
//! - **Implementation**: `launchpad-app` (cookie-backed), `launchpad-web`
//!   (local storage)
//! - **Usage**: consent checkbox wiring
//!
//! The controller only ever sees this trait, so the medium can change without
//! touching the launch sequence.

use crate::errors::LaunchResult;

/// Persisted boolean consent flag.
pub trait ConsentStorage {
    /// Current consent. Missing or unreadable state reads as `false`.
    fn get(&self) -> bool;

    /// Persist consent.
    ///
    /// Opting out also clears whatever the medium holds for the origin.
    /// Errors are informational; callers log them and carry on.
    fn set(&self, enabled: bool) -> LaunchResult<()>;
}
