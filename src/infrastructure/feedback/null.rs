//! Collaborators for headless use: no-op loading indicator and a notifier that logs.

use tracing::{debug, error, info, warn};

use crate::domain::collaborators::{LoadingIndicator, Notifier, Severity};

/// A loading indicator that does nothing.
///
/// Used by library consumers without a UI and by tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullIndicator;

impl LoadingIndicator for NullIndicator {
    fn begin(&self) {}

    fn end(&self) {}
}

/// Forwards notifications to `tracing` at a level matching their severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => info!(%severity, "{}", message),
            Severity::Warning => warn!(%severity, "{}", message),
            Severity::Error => error!(%severity, "{}", message),
        }
    }
}

impl TracingNotifier {
    pub fn new() -> Self {
        debug!("Using TracingNotifier");
        Self
    }
}
