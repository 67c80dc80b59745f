//! Searchable list views for each table, with references resolved.

use std::sync::Arc;

use super::catalog::Catalog;
use crate::domain::aggregation::{
    self, CourseOverview, EnrollmentDetail, SelectOption, StudentOverview,
};
use crate::domain::entities::Teacher;
use crate::domain::search::ListQuery;
use crate::domain::transport::Transport;
use crate::error::AppError;

pub const TEACHER_SEARCH_FIELDS: &[&str] = &["name", "specialty"];
pub const STUDENT_SEARCH_FIELDS: &[&str] = &["name", "email"];
pub const COURSE_SEARCH_FIELDS: &[&str] = &["course_name", "teacher_name"];
pub const ENROLLMENT_SEARCH_FIELDS: &[&str] = &["student_name", "course_name"];

/// Builds the rows of each list screen.
///
/// Every call refetches what it needs, so rows always reflect the store at
/// the time of the call. Related collections are fetched concurrently and a
/// failure in any of them fails the whole view.
pub struct RosterService<T: Transport + ?Sized> {
    catalog: Arc<Catalog<T>>,
}

impl<T: Transport + ?Sized> RosterService<T> {
    pub fn new(catalog: Arc<Catalog<T>>) -> Self {
        Self { catalog }
    }

    pub async fn teachers(&self, query: &ListQuery) -> Result<Vec<Teacher>, AppError> {
        let teachers = self.catalog.teachers.list().await?;
        Ok(query.apply(&teachers, TEACHER_SEARCH_FIELDS))
    }

    /// Students with how many courses each is enrolled in.
    pub async fn students(&self, query: &ListQuery) -> Result<Vec<StudentOverview>, AppError> {
        let (students, enrollments) = tokio::try_join!(
            self.catalog.students.list(),
            self.catalog.enrollments.list(),
        )?;
        let rows = aggregation::student_overview(&students, &enrollments);
        Ok(query.apply(&rows, STUDENT_SEARCH_FIELDS))
    }

    /// Courses with their teacher's name and student count.
    pub async fn courses(&self, query: &ListQuery) -> Result<Vec<CourseOverview>, AppError> {
        let (courses, teachers, enrollments) = tokio::try_join!(
            self.catalog.courses.list(),
            self.catalog.teachers.list(),
            self.catalog.enrollments.list(),
        )?;
        let rows = aggregation::course_overview(&courses, &teachers, &enrollments);
        Ok(query.apply(&rows, COURSE_SEARCH_FIELDS))
    }

    /// Enrollments with student, course and teacher names resolved.
    pub async fn enrollments(&self, query: &ListQuery) -> Result<Vec<EnrollmentDetail>, AppError> {
        let bundle = self.catalog.fetch_all().await?;
        let rows = aggregation::resolve_enrollment_details(
            &bundle.enrollments,
            &bundle.students,
            &bundle.courses,
            &bundle.teachers,
        );
        Ok(query.apply(&rows, ENROLLMENT_SEARCH_FIELDS))
    }

    pub async fn teacher_options(&self) -> Result<Vec<SelectOption>, AppError> {
        let teachers = self.catalog.teachers.list().await?;
        Ok(aggregation::teacher_options(&teachers))
    }

    pub async fn student_options(&self) -> Result<Vec<SelectOption>, AppError> {
        let students = self.catalog.students.list().await?;
        Ok(aggregation::student_options(&students))
    }

    pub async fn course_options(&self) -> Result<Vec<SelectOption>, AppError> {
        let (courses, teachers) =
            tokio::try_join!(self.catalog.courses.list(), self.catalog.teachers.list())?;
        Ok(aggregation::course_options(&courses, &teachers))
    }
}
