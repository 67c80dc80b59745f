//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest-backed transport to the remote store
//! - [`feedback`] - Loading indicator and notifier implementations (terminal, tracing, no-op)

pub mod feedback;
pub mod http;
