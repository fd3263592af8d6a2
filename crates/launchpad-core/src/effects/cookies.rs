//! Cookie jar effect interface
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `launchpad-web` (`document.cookie`), `launchpad-testkit`
//! - **Usage**: `CookieConsentStore`

use std::rc::Rc;

use crate::cookie::SetCookie;
use crate::errors::LaunchResult;

/// Read and write access to the origin's cookie jar.
pub trait CookieJarEffects {
    /// The serialized jar, as `document.cookie` returns it.
    fn read_all(&self) -> String;

    /// Apply one cookie assignment.
    ///
    /// An error means the medium threw. A medium that silently drops the
    /// write (cookies disabled by policy) returns `Ok`.
    fn write(&self, cookie: &SetCookie) -> LaunchResult<()>;
}

impl<T: CookieJarEffects + ?Sized> CookieJarEffects for Rc<T> {
    fn read_all(&self) -> String {
        (**self).read_all()
    }

    fn write(&self, cookie: &SetCookie) -> LaunchResult<()> {
        (**self).write(cookie)
    }
}
