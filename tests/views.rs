mod common;

use chrono::NaiveDate;
use common::{create_catalog, mount_school};
use school_admin::application::services::{DashboardService, RosterService};
use school_admin::domain::aggregation::{COURSE_NOT_FOUND, NO_TEACHER, STUDENT_NOT_FOUND};
use school_admin::domain::search::{ListQuery, SortDirection};
use school_admin::error::ErrorKind;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_all_collections() {
    let server = MockServer::start().await;
    mount_school(&server).await;

    let bundle = create_catalog(&server).fetch_all().await.unwrap();

    assert_eq!(bundle.teachers.len(), 2);
    assert_eq!(bundle.students.len(), 2);
    assert_eq!(bundle.courses.len(), 3);
    assert_eq!(bundle.enrollments.len(), 4);
}

#[tokio::test]
async fn test_fetch_all_fails_when_one_collection_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_school(&server).await;

    let err = create_catalog(&server).fetch_all().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::HttpStatus(500));
}

#[tokio::test]
async fn test_dashboard_ranks_courses() {
    let server = MockServer::start().await;
    mount_school(&server).await;

    let service = DashboardService::new(Arc::new(create_catalog(&server)), 2);
    let dashboard = service.load().await.unwrap();

    assert_eq!(dashboard.totals.enrollments, 4);
    let ranked: Vec<(&str, usize)> = dashboard
        .popular_courses
        .iter()
        .map(|p| (p.course.name.as_str(), p.enrollment_count))
        .collect();
    assert_eq!(ranked, vec![("Optics", 2), ("Algebra", 1)]);
    assert_eq!(dashboard.popular_courses[0].teacher_name, "Jorge Peña");

    let loads: Vec<usize> = dashboard.teacher_loads.iter().map(|l| l.course_count).collect();
    assert_eq!(loads, vec![1, 1]);
}

#[tokio::test]
async fn test_enrollment_rows_resolve_names() {
    let server = MockServer::start().await;
    mount_school(&server).await;

    let roster = RosterService::new(Arc::new(create_catalog(&server)));
    let rows = roster.enrollments(&ListQuery::default()).await.unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].student_name, "Ana Gómez");
    assert_eq!(rows[0].course_name, "Optics");
    assert_eq!(rows[0].teacher_name, "Jorge Peña");
    assert_eq!(rows[3].student_name, STUDENT_NOT_FOUND);
    assert_eq!(rows[3].course_name, "Drawing");
    assert_eq!(rows[3].teacher_name, NO_TEACHER);
    assert_ne!(rows[3].course_name, COURSE_NOT_FOUND);

    let found = roster.enrollments(&ListQuery::search("luis")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].enrollment.id, 2);
}

#[tokio::test]
async fn test_student_rows_sorted_by_course_count() {
    let server = MockServer::start().await;
    mount_school(&server).await;

    let roster = RosterService::new(Arc::new(create_catalog(&server)));
    let query = ListQuery::default().sorted_by("course_count", SortDirection::Descending);
    let rows = roster.students(&query).await.unwrap();

    let counts: Vec<(&str, usize)> = rows
        .iter()
        .map(|r| (r.student.name.as_str(), r.course_count))
        .collect();
    assert_eq!(counts, vec![("Ana Gómez", 2), ("Luis Vera", 1)]);
}

#[tokio::test]
async fn test_course_rows_search_by_teacher() {
    let server = MockServer::start().await;
    mount_school(&server).await;

    let roster = RosterService::new(Arc::new(create_catalog(&server)));
    let rows = roster.courses(&ListQuery::search("peña")).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].course.name, "Optics");
    assert_eq!(rows[0].student_count, 2);
}

#[tokio::test]
async fn test_missing_dates_do_not_break_views() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id_student": 1, "name": "Ana Gómez", "email": "ana@school.edu", "registration_date": "2025-01-10" },
            { "id_student": 2, "name": "Luis Vera", "email": "luis@school.edu", "registration_date": null }
        ])))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/enrollments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id_enrollment": 1, "id_student": 1, "id_course": 11, "enrollment_date": "" },
            { "id_enrollment": 2, "id_student": 2, "id_course": 11 }
        ])))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_school(&server).await;

    let catalog = Arc::new(create_catalog(&server));
    let dashboard = DashboardService::new(Arc::clone(&catalog), 5)
        .load()
        .await
        .unwrap();
    assert_eq!(dashboard.totals.students, 2);
    assert_eq!(dashboard.totals.enrollments, 2);

    let roster = RosterService::new(catalog);
    let query = ListQuery::default().sorted_by("registration_date", SortDirection::Descending);
    let students = roster.students(&query).await.unwrap();
    assert_eq!(
        students[0].student.registration_date,
        NaiveDate::from_ymd_opt(2025, 1, 10)
    );
    assert_eq!(students[1].student.registration_date, None);

    let rows = roster.enrollments(&ListQuery::default()).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.enrollment.enrollment_date.is_none()));
    assert_eq!(rows[1].student_name, "Luis Vera");
}
