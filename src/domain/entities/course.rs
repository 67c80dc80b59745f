//! Course entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Entity, ResourceSpec, not_blank};
use crate::domain::search::{FieldValue, Searchable};

/// A course, optionally taught by a teacher.
///
/// `teacher_id` may reference a teacher that no longer exists; views resolve
/// it with a placeholder instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "id_course")]
    pub id: i64,
    #[serde(rename = "course_name")]
    pub name: String,
    #[serde(rename = "id_teacher", default)]
    pub teacher_id: Option<i64>,
}

impl Course {
    pub fn new(id: i64, name: impl Into<String>, teacher_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            teacher_id,
        }
    }
}

/// Input data for creating a course. A teacher must be chosen.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewCourse {
    #[serde(rename = "course_name")]
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[serde(rename = "id_teacher")]
    pub teacher_id: i64,
}

/// Partial update for an existing course.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct CoursePatch {
    #[serde(rename = "course_name", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = not_blank))]
    pub name: Option<String>,
    #[serde(rename = "id_teacher", skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
}

impl Entity for Course {
    const SPEC: ResourceSpec = ResourceSpec::new("/courses", "id_course");
    const NAME: &'static str = "course";

    type New = NewCourse;
    type Patch = CoursePatch;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Course {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id_course" => Some(FieldValue::Int(self.id)),
            "course_name" => Some(FieldValue::text(&self.name)),
            "id_teacher" => self.teacher_id.map(FieldValue::Int),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_null_teacher() {
        let course: Course = serde_json::from_value(json!({
            "id_course": 3,
            "course_name": "Algebra",
            "id_teacher": null
        }))
        .unwrap();
        assert_eq!(course, Course::new(3, "Algebra", None));
        assert!(course.field("id_teacher").is_none());
    }

    #[test]
    fn test_course_missing_teacher_column() {
        let course: Course = serde_json::from_value(json!({
            "id_course": 4,
            "course_name": "History"
        }))
        .unwrap();
        assert!(course.teacher_id.is_none());
    }

    #[test]
    fn test_new_course_wire_names() {
        let new_course = NewCourse {
            name: "Algebra".to_string(),
            teacher_id: 7,
        };
        assert!(new_course.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&new_course).unwrap(),
            json!({ "course_name": "Algebra", "id_teacher": 7 })
        );
    }
}
