//! Core domain entities mirroring the remote store's tables.
//!
//! Entities are plain serde records whose wire names match the remote column
//! names. Each entity comes with two payload types:
//! - `NewTeacher`, `NewStudent`, ... - For creating records (validated)
//! - `TeacherPatch`, `StudentPatch`, ... - For partial updates; `None` fields are not sent
//!
//! The [`Entity`] trait ties a record to its [`ResourceSpec`] so one generic
//! service can serve every table.

pub mod course;
pub mod enrollment;
pub mod student;
pub mod teacher;

pub use course::{Course, CoursePatch, NewCourse};
pub use enrollment::{Enrollment, EnrollmentPatch, NewEnrollment};
pub use student::{NewStudent, Student, StudentPatch};
pub use teacher::{NewTeacher, Teacher, TeacherPatch};

use chrono::NaiveDate;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::domain::search::Searchable;

/// `local@domain.tld` with no whitespace in any part.
pub(crate) static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Where a table lives on the remote store and which column identifies a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    pub path: Cow<'static, str>,
    pub id_field: &'static str,
}

impl ResourceSpec {
    pub const fn new(path: &'static str, id_field: &'static str) -> Self {
        Self {
            path: Cow::Borrowed(path),
            id_field,
        }
    }

    /// Same id column, different path (e.g. a configured override).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Cow::Owned(path.into());
        self
    }

    /// Path of a single record: `{path}/{id}`.
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.path, id)
    }

    /// Filter-based delete target: `{path}?{id_field}=eq.{id}`.
    pub fn delete_path(&self, id: i64) -> String {
        format!("{}?{}=eq.{}", self.path, self.id_field, id)
    }
}

/// A record type stored in one table of the remote store.
pub trait Entity: DeserializeOwned + Searchable + Clone + Send + Sync + 'static {
    /// Default location of the table.
    const SPEC: ResourceSpec;

    /// Human-readable singular name, used in logs.
    const NAME: &'static str;

    type New: Serialize + Validate + Send + Sync;
    type Patch: Serialize + Validate + Send + Sync;

    fn id(&self) -> i64;
}

/// Rejects empty and whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Accepts `YYYY-MM-DD` as well as timestamps such as `2025-08-13T10:00:00+00:00`.
///
/// `null`, a missing column and `""` all read as `None`.
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };
    let date_part = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(serde::de::Error::custom)
}
