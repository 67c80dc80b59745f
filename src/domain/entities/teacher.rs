//! Teacher entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Entity, ResourceSpec, not_blank};
use crate::domain::search::{FieldValue, Searchable};

/// A teacher who can be assigned to courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "id_teacher")]
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

impl Teacher {
    pub fn new(id: i64, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}

/// Input data for creating a new teacher.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewTeacher {
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(custom(function = not_blank))]
    pub specialty: String,
}

/// Partial update for an existing teacher.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct TeacherPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = not_blank))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = not_blank))]
    pub specialty: Option<String>,
}

impl Entity for Teacher {
    const SPEC: ResourceSpec = ResourceSpec::new("/teachers", "id_teacher");
    const NAME: &'static str = "teacher";

    type New = NewTeacher;
    type Patch = TeacherPatch;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Searchable for Teacher {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id_teacher" => Some(FieldValue::Int(self.id)),
            "name" => Some(FieldValue::text(&self.name)),
            "specialty" => Some(FieldValue::text(&self.specialty)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_teacher_wire_format() {
        let teacher: Teacher = serde_json::from_value(json!({
            "id_teacher": 7,
            "name": "Marta Ruiz",
            "specialty": "Mathematics"
        }))
        .unwrap();

        assert_eq!(teacher, Teacher::new(7, "Marta Ruiz", "Mathematics"));
        assert_eq!(serde_json::to_value(&teacher).unwrap()["id_teacher"], 7);
    }

    #[test]
    fn test_new_teacher_requires_fields() {
        let new_teacher = NewTeacher {
            name: "  ".to_string(),
            specialty: "Physics".to_string(),
        };
        let errors = new_teacher.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(!errors.field_errors().contains_key("specialty"));
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let patch = TeacherPatch {
            specialty: Some("Chemistry".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "specialty": "Chemistry" })
        );
    }
}
