//! Relational views rebuilt from independently fetched collections.
//!
//! The remote store does not guarantee referential integrity, so every lookup
//! that misses resolves to one of the placeholder labels below. Rows are never
//! dropped because a reference is dangling.

use std::collections::HashMap;

use crate::domain::entities::{Course, Enrollment, Student, Teacher};
use crate::domain::search::{FieldValue, Searchable};

pub const NO_TEACHER: &str = "No teacher assigned";
pub const STUDENT_NOT_FOUND: &str = "Student not found";
pub const COURSE_NOT_FOUND: &str = "Course not found";

/// A course ranked by how many enrollments reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct PopularCourse {
    pub course: Course,
    pub enrollment_count: usize,
    pub teacher_name: String,
}

/// Number of courses taught by a teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherLoad {
    pub teacher: Teacher,
    pub course_count: usize,
}

/// A course with its resolved teacher and number of enrolled students.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseOverview {
    pub course: Course,
    pub teacher_name: String,
    pub student_count: usize,
}

/// A student with the number of courses they are enrolled in.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentOverview {
    pub student: Student,
    pub course_count: usize,
}

/// Denormalized enrollment row.
///
/// `student` and `course` are `None` when the reference is dangling; the
/// `*_name` fields then hold the placeholder label.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentDetail {
    pub enrollment: Enrollment,
    pub student: Option<Student>,
    pub course: Option<Course>,
    pub student_name: String,
    pub course_name: String,
    pub teacher_name: String,
}

/// Collection sizes shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardTotals {
    pub teachers: usize,
    pub students: usize,
    pub courses: usize,
    pub enrollments: usize,
}

fn index_by_id<T, F>(items: &[T], id: F) -> HashMap<i64, &T>
where
    F: Fn(&T) -> i64,
{
    // First occurrence wins, matching a linear `find`.
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(id(item)).or_insert(item);
    }
    index
}

fn count_by<T, F>(items: &[T], key: F) -> HashMap<i64, usize>
where
    F: Fn(&T) -> Option<i64>,
{
    let mut counts = HashMap::new();
    for item in items {
        if let Some(k) = key(item) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

fn teacher_name(teachers: &HashMap<i64, &Teacher>, teacher_id: Option<i64>) -> String {
    teacher_id
        .and_then(|id| teachers.get(&id))
        .map(|t| t.name.clone())
        .unwrap_or_else(|| NO_TEACHER.to_string())
}

/// Ranks courses by enrollment count, highest first.
///
/// The sort is stable: courses with equal counts keep their input order.
/// Callers truncate with [`top_courses`].
pub fn most_popular_courses(
    courses: &[Course],
    enrollments: &[Enrollment],
    teachers: &[Teacher],
) -> Vec<PopularCourse> {
    let teachers = index_by_id(teachers, |t| t.id);
    let counts = count_by(enrollments, |e| Some(e.course_id));

    let mut ranked: Vec<PopularCourse> = courses
        .iter()
        .map(|course| PopularCourse {
            course: course.clone(),
            enrollment_count: counts.get(&course.id).copied().unwrap_or(0),
            teacher_name: teacher_name(&teachers, course.teacher_id),
        })
        .collect();

    ranked.sort_by(|a, b| b.enrollment_count.cmp(&a.enrollment_count));
    ranked
}

/// The first `n` entries of [`most_popular_courses`].
pub fn top_courses(
    courses: &[Course],
    enrollments: &[Enrollment],
    teachers: &[Teacher],
    n: usize,
) -> Vec<PopularCourse> {
    let mut ranked = most_popular_courses(courses, enrollments, teachers);
    ranked.truncate(n);
    ranked
}

/// Counts the courses referencing each teacher, in teacher order.
pub fn course_count_by_teacher(teachers: &[Teacher], courses: &[Course]) -> Vec<TeacherLoad> {
    let counts = count_by(courses, |c| c.teacher_id);
    teachers
        .iter()
        .map(|teacher| TeacherLoad {
            teacher: teacher.clone(),
            course_count: counts.get(&teacher.id).copied().unwrap_or(0),
        })
        .collect()
}

/// Maps every student id to its number of enrollments (0 when none).
///
/// Enrollments of unknown students are not counted.
pub fn enrollment_count_by_student(
    students: &[Student],
    enrollments: &[Enrollment],
) -> HashMap<i64, usize> {
    let counts = count_by(enrollments, |e| Some(e.student_id));
    students
        .iter()
        .map(|s| (s.id, counts.get(&s.id).copied().unwrap_or(0)))
        .collect()
}

/// Students with their enrollment counts, in student order.
pub fn student_overview(students: &[Student], enrollments: &[Enrollment]) -> Vec<StudentOverview> {
    let counts = enrollment_count_by_student(students, enrollments);
    students
        .iter()
        .map(|student| StudentOverview {
            student: student.clone(),
            course_count: counts.get(&student.id).copied().unwrap_or(0),
        })
        .collect()
}

/// Courses with resolved teacher names and student counts, in course order.
pub fn course_overview(
    courses: &[Course],
    teachers: &[Teacher],
    enrollments: &[Enrollment],
) -> Vec<CourseOverview> {
    let teachers = index_by_id(teachers, |t| t.id);
    let counts = count_by(enrollments, |e| Some(e.course_id));
    courses
        .iter()
        .map(|course| CourseOverview {
            course: course.clone(),
            teacher_name: teacher_name(&teachers, course.teacher_id),
            student_count: counts.get(&course.id).copied().unwrap_or(0),
        })
        .collect()
}

/// Resolves student, course and teacher for every enrollment.
///
/// Produces exactly one row per enrollment, in input order.
pub fn resolve_enrollment_details(
    enrollments: &[Enrollment],
    students: &[Student],
    courses: &[Course],
    teachers: &[Teacher],
) -> Vec<EnrollmentDetail> {
    let students = index_by_id(students, |s| s.id);
    let courses = index_by_id(courses, |c| c.id);
    let teachers = index_by_id(teachers, |t| t.id);

    enrollments
        .iter()
        .map(|enrollment| {
            let student = students.get(&enrollment.student_id).map(|s| (*s).clone());
            let course = courses.get(&enrollment.course_id).map(|c| (*c).clone());

            EnrollmentDetail {
                student_name: student
                    .as_ref()
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| STUDENT_NOT_FOUND.to_string()),
                course_name: course
                    .as_ref()
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| COURSE_NOT_FOUND.to_string()),
                teacher_name: teacher_name(&teachers, course.as_ref().and_then(|c| c.teacher_id)),
                enrollment: enrollment.clone(),
                student,
                course,
            }
        })
        .collect()
}

pub fn dashboard_totals(
    teachers: &[Teacher],
    students: &[Student],
    courses: &[Course],
    enrollments: &[Enrollment],
) -> DashboardTotals {
    DashboardTotals {
        teachers: teachers.len(),
        students: students.len(),
        courses: courses.len(),
        enrollments: enrollments.len(),
    }
}

impl Searchable for CourseOverview {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "teacher_name" => Some(FieldValue::text(&self.teacher_name)),
            "student_count" => Some(FieldValue::Int(self.student_count as i64)),
            other => self.course.field(other),
        }
    }
}

impl Searchable for StudentOverview {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "course_count" => Some(FieldValue::Int(self.course_count as i64)),
            other => self.student.field(other),
        }
    }
}

impl Searchable for EnrollmentDetail {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "student_name" => Some(FieldValue::text(&self.student_name)),
            "course_name" => Some(FieldValue::text(&self.course_name)),
            "teacher_name" => Some(FieldValue::text(&self.teacher_name)),
            other => self.enrollment.field(other),
        }
    }
}

/// One entry of a pick list for a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}

/// `"{name} - {specialty}"` for every teacher, in input order.
pub fn teacher_options(teachers: &[Teacher]) -> Vec<SelectOption> {
    teachers
        .iter()
        .map(|t| SelectOption {
            id: t.id,
            label: format!("{} - {}", t.name, t.specialty),
        })
        .collect()
}

/// `"{name} - {email}"` for every student, in input order.
pub fn student_options(students: &[Student]) -> Vec<SelectOption> {
    students
        .iter()
        .map(|s| SelectOption {
            id: s.id,
            label: format!("{} - {}", s.name, s.email),
        })
        .collect()
}

/// `"{course} - {teacher}"` for every course, with the placeholder for a missing teacher.
pub fn course_options(courses: &[Course], teachers: &[Teacher]) -> Vec<SelectOption> {
    let teachers = index_by_id(teachers, |t| t.id);
    courses
        .iter()
        .map(|c| SelectOption {
            id: c.id,
            label: format!("{} - {}", c.name, teacher_name(&teachers, c.teacher_id)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn student(id: i64, name: &str) -> Student {
        let email = format!("{}@school.edu", name.to_lowercase());
        Student::new(id, name, email, date())
    }

    fn enrollment(id: i64, student_id: i64, course_id: i64) -> Enrollment {
        Enrollment::new(id, student_id, course_id, date())
    }

    #[test]
    fn test_enrollment_count_by_student_scenario() {
        let students = vec![student(1, "Ana"), student(2, "Luis")];
        let enrollments = vec![
            enrollment(1, 1, 10),
            enrollment(2, 1, 11),
            enrollment(3, 2, 10),
        ];

        let counts = enrollment_count_by_student(&students, &enrollments);

        assert_eq!(counts, HashMap::from([(1, 2), (2, 1)]));
    }

    #[test]
    fn test_enrollment_count_includes_students_without_enrollments() {
        let students = vec![student(1, "Ana"), student(5, "Eva")];
        let enrollments = vec![enrollment(1, 1, 10), enrollment(2, 99, 10)];

        let counts = enrollment_count_by_student(&students, &enrollments);

        assert_eq!(counts.get(&5), Some(&0));
        assert!(!counts.contains_key(&99));
    }

    #[test]
    fn test_most_popular_courses_sorted_and_stable() {
        let teachers = vec![Teacher::new(1, "Marta", "Math")];
        let courses = vec![
            Course::new(10, "Algebra", Some(1)),
            Course::new(11, "Art", None),
            Course::new(12, "Biology", Some(1)),
            Course::new(13, "Chemistry", Some(42)),
        ];
        let enrollments = vec![
            enrollment(1, 1, 12),
            enrollment(2, 2, 12),
            enrollment(3, 3, 10),
            enrollment(4, 4, 13),
        ];

        let ranked = most_popular_courses(&courses, &enrollments, &teachers);

        let order: Vec<(i64, usize)> = ranked
            .iter()
            .map(|p| (p.course.id, p.enrollment_count))
            .collect();
        assert_eq!(order, vec![(12, 2), (10, 1), (13, 1), (11, 0)]);
        let counts: Vec<usize> = ranked.iter().map(|p| p.enrollment_count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_missing_teacher_resolves_to_sentinel() {
        let courses = vec![
            Course::new(10, "Algebra", Some(42)),
            Course::new(11, "Art", None),
        ];

        let ranked = most_popular_courses(&courses, &[], &[]);

        assert!(ranked.iter().all(|p| p.teacher_name == NO_TEACHER));
    }

    #[test]
    fn test_top_courses_truncates() {
        let courses: Vec<Course> = (1..=8).map(|i| Course::new(i, format!("C{i}"), None)).collect();
        assert_eq!(top_courses(&courses, &[], &[], 5).len(), 5);
        assert_eq!(top_courses(&courses[..3], &[], &[], 5).len(), 3);
    }

    #[test]
    fn test_course_count_by_teacher() {
        let teachers = vec![
            Teacher::new(1, "Marta", "Math"),
            Teacher::new(2, "Jorge", "Physics"),
        ];
        let courses = vec![
            Course::new(10, "Algebra", Some(1)),
            Course::new(11, "Geometry", Some(1)),
            Course::new(12, "Art", None),
        ];

        let loads = course_count_by_teacher(&teachers, &courses);

        assert_eq!(loads.len(), 2);
        assert_eq!((loads[0].teacher.id, loads[0].course_count), (1, 2));
        assert_eq!((loads[1].teacher.id, loads[1].course_count), (2, 0));
    }

    #[test]
    fn test_resolve_enrollment_details_keeps_dangling_rows() {
        let teachers = vec![Teacher::new(1, "Marta", "Math")];
        let students = vec![student(1, "Ana")];
        let courses = vec![
            Course::new(10, "Algebra", Some(1)),
            Course::new(11, "Art", None),
        ];
        let enrollments = vec![
            enrollment(1, 1, 10),
            enrollment(2, 77, 88),
            enrollment(3, 1, 11),
        ];

        let rows = resolve_enrollment_details(&enrollments, &students, &courses, &teachers);

        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].student_name, "Ana");
        assert_eq!(rows[0].course_name, "Algebra");
        assert_eq!(rows[0].teacher_name, "Marta");

        assert_eq!(rows[1].student_name, STUDENT_NOT_FOUND);
        assert_eq!(rows[1].course_name, COURSE_NOT_FOUND);
        assert_eq!(rows[1].teacher_name, NO_TEACHER);
        assert!(rows[1].student.is_none());
        assert!(rows[1].course.is_none());

        assert_eq!(rows[2].teacher_name, NO_TEACHER);
    }

    #[test]
    fn test_course_overview_counts_students() {
        let teachers = vec![Teacher::new(1, "Marta", "Math")];
        let courses = vec![
            Course::new(10, "Algebra", Some(1)),
            Course::new(11, "Art", Some(5)),
        ];
        let enrollments = vec![enrollment(1, 1, 10), enrollment(2, 2, 10)];

        let rows = course_overview(&courses, &teachers, &enrollments);

        assert_eq!(rows[0].teacher_name, "Marta");
        assert_eq!(rows[0].student_count, 2);
        assert_eq!(rows[1].teacher_name, NO_TEACHER);
        assert_eq!(rows[1].student_count, 0);
        assert_eq!(
            rows[0].field("course_name"),
            Some(FieldValue::text("Algebra"))
        );
    }

    #[test]
    fn test_dashboard_totals() {
        let totals = dashboard_totals(
            &[Teacher::new(1, "Marta", "Math")],
            &[student(1, "Ana"), student(2, "Luis")],
            &[],
            &[enrollment(1, 1, 10)],
        );
        assert_eq!(
            totals,
            DashboardTotals {
                teachers: 1,
                students: 2,
                courses: 0,
                enrollments: 1
            }
        );
    }

    #[test]
    fn test_select_option_labels() {
        let teachers = vec![Teacher::new(1, "Marta", "Math")];
        let courses = vec![
            Course::new(10, "Algebra", Some(1)),
            Course::new(11, "Art", Some(8)),
        ];

        let options = course_options(&courses, &teachers);
        assert_eq!(options[0].label, "Algebra - Marta");
        assert_eq!(options[1].label, format!("Art - {NO_TEACHER}"));

        assert_eq!(teacher_options(&teachers)[0].label, "Marta - Math");
        assert_eq!(
            student_options(&[student(3, "Ana")])[0],
            SelectOption {
                id: 3,
                label: "Ana - ana@school.edu".to_string(),
            }
        );
    }
}
