//! HTTP access to the remote REST store.
//!
//! Provides [`HttpTransport`], the production [`crate::domain::transport::Transport`].

mod client;

pub use client::HttpTransport;
