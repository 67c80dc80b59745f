//! Business logic services for the application layer.

pub mod catalog;
pub mod dashboard_service;
pub mod error_reporter;
pub mod resource_service;
pub mod roster_service;

pub use catalog::{Catalog, CollectionBundle};
pub use dashboard_service::{Dashboard, DashboardService};
pub use error_reporter::report_error;
pub use resource_service::ResourceService;
pub use roster_service::RosterService;
