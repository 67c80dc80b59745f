use std::sync::Arc;

use super::catalog::{Catalog, CollectionBundle};
use super::error_reporter::report_error;
use crate::domain::aggregation::{self, DashboardTotals, PopularCourse, TeacherLoad};
use crate::domain::collaborators::Notifier;
use crate::domain::transport::Transport;
use crate::error::AppError;

/// Everything the dashboard screen shows, built from one consistent fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub totals: DashboardTotals,
    pub popular_courses: Vec<PopularCourse>,
    pub teacher_loads: Vec<TeacherLoad>,
}

impl Dashboard {
    /// Builds the view from already fetched collections.
    pub fn from_bundle(bundle: &CollectionBundle, top_courses: usize) -> Self {
        Self {
            totals: aggregation::dashboard_totals(
                &bundle.teachers,
                &bundle.students,
                &bundle.courses,
                &bundle.enrollments,
            ),
            popular_courses: aggregation::top_courses(
                &bundle.courses,
                &bundle.enrollments,
                &bundle.teachers,
                top_courses,
            ),
            teacher_loads: aggregation::course_count_by_teacher(&bundle.teachers, &bundle.courses),
        }
    }
}

pub struct DashboardService<T: Transport + ?Sized> {
    catalog: Arc<Catalog<T>>,
    top_courses: usize,
}

impl<T: Transport + ?Sized> DashboardService<T> {
    pub fn new(catalog: Arc<Catalog<T>>, top_courses: usize) -> Self {
        Self {
            catalog,
            top_courses,
        }
    }

    /// Fetches all collections and aggregates them.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; nothing is aggregated from a partial fetch.
    pub async fn load(&self) -> Result<Dashboard, AppError> {
        let bundle = self.catalog.fetch_all().await?;
        Ok(Dashboard::from_bundle(&bundle, self.top_courses))
    }

    /// One auto-refresh step: loads the dashboard, or reports the failure
    /// through `notifier` and returns `None` so the caller keeps going.
    pub async fn refresh(&self, notifier: &dyn Notifier) -> Option<Dashboard> {
        match self.load().await {
            Ok(dashboard) => Some(dashboard),
            Err(e) => {
                report_error(notifier, &e);
                None
            }
        }
    }
}
