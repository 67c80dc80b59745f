//! Error type shared by the transport, the resource services and the views.
//!
//! Every failure carries a structured [`ErrorKind`] so callers map errors to
//! user-facing text with a plain `match`, never by inspecting message strings.

use serde_json::{Value, json};
use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

/// Classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection-level failure (DNS, refused connection, reset).
    Network,
    /// The request deadline elapsed before a response arrived.
    Timeout,
    /// The remote store answered with a non-2xx status.
    HttpStatus(u16),
    /// The response body was not valid JSON or did not match the record shape.
    Decode,
    /// A payload failed the required-field checks before any request was made.
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Timeout => f.write_str("timeout"),
            Self::HttpStatus(code) => write!(f, "http_status({code})"),
            Self::Decode => f.write_str("decode"),
            Self::Validation => f.write_str("validation"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: status {status}")]
    HttpStatus { status: u16, body: String },

    #[error("decode error: {message}")]
    Decode { message: String },

    #[error("validation error: {message}")]
    Validation { message: String, details: Value },
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Returns the structured kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::HttpStatus { status, .. } => ErrorKind::HttpStatus(*status),
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// Text suitable for a transient user notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout { .. } => "Request timed out. Please try again.".to_string(),
            Self::Network { .. } => {
                "Connection error. Check your internet connection.".to_string()
            }
            Self::HttpStatus { status, .. } => match status {
                401 => "Unauthorized. Check your credentials.".to_string(),
                403 => "Access denied.".to_string(),
                404 => "Resource not found.".to_string(),
                500 => "Internal server error.".to_string(),
                other => format!("Request failed with status {other}."),
            },
            Self::Decode { .. } => "The server returned an unreadable response.".to_string(),
            Self::Validation { message, .. } => message.clone(),
        }
    }
}

/// Flattens validator output into `"name is required, Invalid email"`.
///
/// Fields are sorted so the message is stable across runs.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let codes = errs.iter().map(|e| e.code.to_string()).collect();
                (field.to_string(), codes)
            })
            .collect();
        fields.sort();

        let mut messages = Vec::new();
        for (field, codes) in &fields {
            for code in codes {
                messages.push(match code.as_str() {
                    "required" => format!("{field} is required"),
                    "email" => "Invalid email".to_string(),
                    other => format!("{field} is invalid ({other})"),
                });
            }
        }

        let details: serde_json::Map<String, Value> = fields
            .into_iter()
            .map(|(field, codes)| (field, json!(codes)))
            .collect();

        AppError::validation(messages.join(", "), Value::Object(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(AppError::network("refused").kind(), ErrorKind::Network);
        assert_eq!(AppError::timeout(10_000).kind(), ErrorKind::Timeout);
        assert_eq!(
            AppError::http_status(404, "").kind(),
            ErrorKind::HttpStatus(404)
        );
        assert_eq!(AppError::decode("eof").kind(), ErrorKind::Decode);
        assert_eq!(
            AppError::validation("bad", json!({})).kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_user_message_by_status() {
        assert_eq!(
            AppError::http_status(404, "").user_message(),
            "Resource not found."
        );
        assert_eq!(
            AppError::http_status(401, "").user_message(),
            "Unauthorized. Check your credentials."
        );
        assert_eq!(
            AppError::http_status(403, "").user_message(),
            "Access denied."
        );
        assert_eq!(
            AppError::http_status(500, "").user_message(),
            "Internal server error."
        );
        assert_eq!(
            AppError::http_status(418, "").user_message(),
            "Request failed with status 418."
        );
    }

    #[test]
    fn test_user_message_does_not_depend_on_text() {
        // A network error whose text mentions a status code is still a network error.
        let err = AppError::network("proxy returned 404 page");
        assert_eq!(
            err.user_message(),
            "Connection error. Check your internet connection."
        );
        assert_eq!(
            AppError::timeout(5).user_message(),
            "Request timed out. Please try again."
        );
    }

    #[test]
    fn test_from_validation_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("specialty", ValidationError::new("required"));
        errors.add("name", ValidationError::new("required"));
        errors.add("email", ValidationError::new("email"));

        let err = AppError::from(errors);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.user_message(),
            "Invalid email, name is required, specialty is required"
        );

        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details["name"], json!(["required"]));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
