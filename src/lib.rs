//! # School Admin
//!
//! Typed client and admin shell for an educational records REST API: teachers,
//! students, courses and the enrollments linking them.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Records, the transport contract, joins and search
//! - **Application Layer** ([`application`]) - CRUD services, dashboard and list views
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP transport and terminal feedback
//!
//! ## Features
//!
//! - One generic CRUD service configured per table
//! - Concurrent, fail-fast fetching of related collections
//! - Joins that tolerate dangling references
//! - Case-insensitive search and field sorting
//! - Per-request deadlines with a loading indicator
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="https://project.supabase.co/rest/v1"
//! export API_KEY="anon-key"
//! export API_AUTH_TOKEN="jwt"
//!
//! cargo run -- dashboard
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        Catalog, CollectionBundle, DashboardService, ResourceService, RosterService, report_error,
    };
    pub use crate::config::Config;
    pub use crate::domain::collaborators::{LoadingIndicator, Notifier, Severity};
    pub use crate::domain::entities::{Course, Enrollment, Entity, Student, Teacher};
    pub use crate::domain::search::{ListQuery, SortDirection};
    pub use crate::domain::transport::{Method, Transport};
    pub use crate::error::{AppError, ErrorKind};
    pub use crate::infrastructure::http::HttpTransport;
}
