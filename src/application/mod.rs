//! Application layer services implementing the school administration use cases.
//!
//! Services talk to the remote store only through the
//! [`Transport`](crate::domain::transport::Transport) trait and hand back
//! domain values. They never print; turning an error into something the user
//! sees is [`services::report_error`]'s job.
//!
//! # Available Services
//!
//! - [`services::ResourceService`] - CRUD for one table
//! - [`services::Catalog`] - The four tables and the combined fetch
//! - [`services::DashboardService`] - Totals, popular courses and teacher load
//! - [`services::RosterService`] - Searchable list views and pick lists

pub mod services;
