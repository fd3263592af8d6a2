//! Module session lifecycle
//!
//! A page launches the application module at most once. The session moves
//! `NotStarted -> Loading -> Running`; the only way back is a failed launch,
//! which returns `Loading` to `NotStarted` so the user can retry.

use std::fmt;

/// Lifecycle state of the application module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleSession {
    /// Start screen is showing; `start()` is accepted
    #[default]
    NotStarted,
    /// Config read or module import/initialize in flight
    Loading,
    /// Module initialized and owns the canvas
    Running,
}

impl ModuleSession {
    /// Whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: ModuleSession) -> bool {
        matches!(
            (self, next),
            (Self::NotStarted, Self::Loading)
                | (Self::Loading, Self::Running)
                | (Self::Loading, Self::NotStarted)
        )
    }

    /// Whether `start()` would begin a new launch from this state.
    pub fn accepts_start(self) -> bool {
        self == Self::NotStarted
    }
}

impl fmt::Display for ModuleSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not-started",
            Self::Loading => "loading",
            Self::Running => "running",
        };
        write!(f, "{label}")
    }
}

/// Result of a `start()` call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// This call launched the module
    Started,
    /// Another launch is in flight; nothing was done
    AlreadyLoading,
    /// The module is already running; nothing was done
    AlreadyRunning,
}

impl StartOutcome {
    /// Outcome for a `start()` observed in `session` that must not proceed.
    pub fn ignored_in(session: ModuleSession) -> Option<Self> {
        match session {
            ModuleSession::NotStarted => None,
            ModuleSession::Loading => Some(Self::AlreadyLoading),
            ModuleSession::Running => Some(Self::AlreadyRunning),
        }
    }
}
