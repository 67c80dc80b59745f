//! Domain layer: records, pure view logic, and the seams to the outside world.
//!
//! Nothing here performs I/O. The layer defines the records stored by the
//! remote API, the transport contract the services talk through, and the
//! collaborator interfaces the shell implements.
//!
//! # Architecture
//!
//! - [`entities`] - Teacher, Student, Course and Enrollment records and their payloads
//! - [`transport`] - Request contract implemented by the infrastructure layer
//! - [`collaborators`] - Loading indicator and notifier interfaces
//! - [`aggregation`] - Joins and counts over fetched collections
//! - [`search`] - Free-text filtering and sorting
//!
//! # Design Principles
//!
//! - Collections handed to [`aggregation`] and [`search`] are borrowed snapshots;
//!   results are always new values
//! - A dangling foreign key resolves to a placeholder label, never to an error

pub mod aggregation;
pub mod collaborators;
pub mod entities;
pub mod search;
pub mod transport;
