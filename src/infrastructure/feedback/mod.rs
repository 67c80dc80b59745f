//! Implementations of the user-facing collaborators.
//!
//! - [`ConsoleNotifier`] / [`ConsoleIndicator`] - Terminal output for the CLI
//! - [`TracingNotifier`] - Notifications as log events
//! - [`NullIndicator`] - No-op indicator for headless use and tests

mod console;
mod null;

pub use console::{ConsoleIndicator, ConsoleNotifier};
pub use null::{NullIndicator, TracingNotifier};
