//! Surface effect interface
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `launchpad-web` (DOM containers), `launchpad-testkit`
//! - **Usage**: `BootstrapController`

use std::rc::Rc;

use crate::errors::LaunchResult;

/// The two page containers the launch sequence switches between.
pub trait SurfaceEffects {
    /// Detach the start container from the document.
    fn remove_start_screen(&self) -> LaunchResult<()>;

    /// Make the canvas container visible (`display: block`).
    fn show_canvas(&self) -> LaunchResult<()>;

    /// Put the start container back where it was. No-op if it is attached.
    fn restore_start_screen(&self) -> LaunchResult<()>;

    /// Hide the canvas container again.
    fn hide_canvas(&self) -> LaunchResult<()>;
}

impl<T: SurfaceEffects + ?Sized> SurfaceEffects for Rc<T> {
    fn remove_start_screen(&self) -> LaunchResult<()> {
        (**self).remove_start_screen()
    }

    fn show_canvas(&self) -> LaunchResult<()> {
        (**self).show_canvas()
    }

    fn restore_start_screen(&self) -> LaunchResult<()> {
        (**self).restore_start_screen()
    }

    fn hide_canvas(&self) -> LaunchResult<()> {
        (**self).hide_canvas()
    }
}
