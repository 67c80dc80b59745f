//! Interfaces of the user-facing collaborators the core reports to.
//!
//! The core never renders anything itself. It signals request activity to a
//! [`LoadingIndicator`] and hands user-readable messages to a [`Notifier`];
//! the shell decides how to show them.

use std::fmt;

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// Receives transient, user-visible messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Toggled around every remote call.
///
/// `end` is called exactly once for every `begin`, whatever the outcome.
pub trait LoadingIndicator: Send + Sync {
    fn begin(&self);
    fn end(&self);
}

/// Scoped `begin`/`end` pairing; `end` fires on drop.
pub struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    pub fn start(indicator: &'a dyn LoadingIndicator) -> Self {
        indicator.begin();
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.end();
    }
}
