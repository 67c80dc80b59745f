//! The four school tables behind one shared transport.

use std::sync::Arc;
use tracing::info;

use super::resource_service::ResourceService;
use crate::config::ResourcePaths;
use crate::domain::entities::{Course, Enrollment, Entity, Student, Teacher};
use crate::domain::transport::Transport;
use crate::error::AppError;

/// All four collections fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionBundle {
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
}

/// One [`ResourceService`] per table.
pub struct Catalog<T: Transport + ?Sized> {
    pub teachers: ResourceService<Teacher, T>,
    pub students: ResourceService<Student, T>,
    pub courses: ResourceService<Course, T>,
    pub enrollments: ResourceService<Enrollment, T>,
}

impl<T: Transport + ?Sized> Catalog<T> {
    /// Creates the services at the configured paths.
    pub fn new(transport: Arc<T>, paths: &ResourcePaths) -> Self {
        Self {
            teachers: ResourceService::with_spec(
                Arc::clone(&transport),
                Teacher::SPEC.with_path(paths.teachers.clone()),
            ),
            students: ResourceService::with_spec(
                Arc::clone(&transport),
                Student::SPEC.with_path(paths.students.clone()),
            ),
            courses: ResourceService::with_spec(
                Arc::clone(&transport),
                Course::SPEC.with_path(paths.courses.clone()),
            ),
            enrollments: ResourceService::with_spec(
                transport,
                Enrollment::SPEC.with_path(paths.enrollments.clone()),
            ),
        }
    }

    /// Fetches every collection concurrently.
    ///
    /// # Errors
    ///
    /// Fails with the first error any fetch produces; the remaining fetches are
    /// dropped and no partial bundle is returned.
    pub async fn fetch_all(&self) -> Result<CollectionBundle, AppError> {
        let (teachers, students, courses, enrollments) = tokio::try_join!(
            self.teachers.list(),
            self.students.list(),
            self.courses.list(),
            self.enrollments.list(),
        )?;

        info!(
            teachers = teachers.len(),
            students = students.len(),
            courses = courses.len(),
            enrollments = enrollments.len(),
            "Fetched all collections"
        );

        Ok(CollectionBundle {
            teachers,
            students,
            courses,
            enrollments,
        })
    }
}
