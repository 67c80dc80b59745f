//! Student entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{EMAIL_REGEX, Entity, ResourceSpec, lenient_date, not_blank};
use crate::domain::search::{FieldValue, Searchable};

/// A registered student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "id_student")]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub registration_date: Option<NaiveDate>,
}

impl Student {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        registration_date: impl Into<Option<NaiveDate>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            registration_date: registration_date.into(),
        }
    }
}

/// Input data for registering a student.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewStudent {
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(
        custom(function = not_blank),
        regex(path = *EMAIL_REGEX, code = "email")
    )]
    pub email: String,
    pub registration_date: NaiveDate,
}

/// Partial update for an existing student.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = not_blank))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *EMAIL_REGEX, code = "email"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDate>,
}

impl Entity for Student {
    const SPEC: ResourceSpec = ResourceSpec::new("/students", "id_student");
    const NAME: &'static str = "student";

    type New = NewStudent;
    type Patch = StudentPatch;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Student {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id_student" => Some(FieldValue::Int(self.id)),
            "name" => Some(FieldValue::text(&self.name)),
            "email" => Some(FieldValue::text(&self.email)),
            "registration_date" => self.registration_date.map(FieldValue::Date),
            _ => None,
        }
    }
}
