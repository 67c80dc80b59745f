//! Enrollment entity linking a student to a course.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Entity, ResourceSpec, lenient_date};
use crate::domain::search::{FieldValue, Searchable};

/// A student's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "id_enrollment")]
    pub id: i64,
    #[serde(rename = "id_student")]
    pub student_id: i64,
    #[serde(rename = "id_course")]
    pub course_id: i64,
    #[serde(default, deserialize_with = "lenient_date")]
    pub enrollment_date: Option<NaiveDate>,
}

impl Enrollment {
    pub fn new(
        id: i64,
        student_id: i64,
        course_id: i64,
        enrollment_date: impl Into<Option<NaiveDate>>,
    ) -> Self {
        Self {
            id,
            student_id,
            course_id,
            enrollment_date: enrollment_date.into(),
        }
    }
}

/// Input data for enrolling a student.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewEnrollment {
    #[serde(rename = "id_student")]
    #[validate(range(min = 1))]
    pub student_id: i64,
    #[serde(rename = "id_course")]
    #[validate(range(min = 1))]
    pub course_id: i64,
    pub enrollment_date: NaiveDate,
}

/// Partial update for an existing enrollment.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct EnrollmentPatch {
    #[serde(rename = "id_student", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub student_id: Option<i64>,
    #[serde(rename = "id_course", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub course_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<NaiveDate>,
}

impl Entity for Enrollment {
    const SPEC: ResourceSpec = ResourceSpec::new("/enrollments", "id_enrollment");
    const NAME: &'static str = "enrollment";

    type New = NewEnrollment;
    type Patch = EnrollmentPatch;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Enrollment {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id_enrollment" => Some(FieldValue::Int(self.id)),
            "id_student" => Some(FieldValue::Int(self.student_id)),
            "id_course" => Some(FieldValue::Int(self.course_id)),
            "enrollment_date" => self.enrollment_date.map(FieldValue::Date),
            _ => None,
        }
    }
}
