//! Terminal collaborators used by the `school-admin` binary.

use colored::Colorize;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::collaborators::{LoadingIndicator, Notifier, Severity};

/// Prints notifications as colored one-liners.
///
/// Errors and warnings go to stderr, everything else to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => println!("{} {}", "✓".green().bold(), message.green()),
            Severity::Info => println!("{} {}", "ℹ".bright_blue().bold(), message),
            Severity::Warning => eprintln!("{} {}", "⚠".yellow().bold(), message.yellow()),
            Severity::Error => eprintln!("{} {}", "✗".red().bold(), message.red()),
        }
    }
}

/// Shows a "Loading..." marker on stderr while at least one request is in flight.
///
/// Concurrent requests share one marker: it appears on the first `begin` and
/// is cleared by the `end` that brings the count back to zero.
#[derive(Debug, Default)]
pub struct ConsoleIndicator {
    in_flight: AtomicUsize,
}

impl ConsoleIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

impl LoadingIndicator for ConsoleIndicator {
    fn begin(&self) {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "{}", "⏳ Loading...".bright_black());
            let _ = stderr.flush();
        }
    }

    fn end(&self) {
        let previous = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .unwrap_or(0);
        if previous == 1 {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "\r\x1b[2K");
            let _ = stderr.flush();
        }
    }
}
