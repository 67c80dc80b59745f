//! Transport contract between the resource services and the remote store.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::error::AppError;

/// HTTP verbs used against the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the request carries a payload the store should echo back.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executes one request against the remote store.
///
/// One attempt per call: implementations never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpTransport`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `body` (if any) to `path`, relative to the configured base URL.
    ///
    /// # Returns
    ///
    /// The decoded JSON body; an empty body decodes to `Value::Null`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Timeout`] when the deadline elapses first
    /// - [`AppError::Network`] on connection-level failures
    /// - [`AppError::HttpStatus`] on a non-2xx status
    /// - [`AppError::Decode`] when the body is not valid JSON
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, AppError>;
}
