//! End-to-end tests driving the router in-process against an in-memory store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use database::{DbRepository, connect_in_memory, run_migrations};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{AppState, app};

async fn test_app() -> Router {
    let pool = connect_in_memory().await.unwrap();
    run_migrations(&pool).await.unwrap();
    app(Arc::new(AppState {
        repo: DbRepository::new(pool),
    }))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn course_body() -> Value {
    json!({"name": "Database Systems", "code": "CSE452", "description": "Good"})
}

#[tokio::test]
async fn create_then_fetch_course_returns_the_same_fields() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/api/courses", Some(course_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = send(&app, "GET", "/api/courses/CSE452", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Database Systems");
    assert_eq!(body["data"]["description"], "Good");
    assert!(body["data"]["staff_code"].is_null());
}

#[tokio::test]
async fn duplicate_course_is_a_conflict_and_leaves_the_original() {
    let app = test_app().await;
    send(&app, "POST", "/api/courses", Some(course_body())).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({"name": "Another Course", "code": "CSE452"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert!(
        body["message"].as_str().unwrap().contains("already exists"),
        "unexpected message: {}",
        body["message"]
    );

    let (_, body) = send(&app, "GET", "/api/courses/CSE452", None).await;
    assert_eq!(body["data"]["name"], "Database Systems");
}

#[tokio::test]
async fn malformed_payloads_are_rejected_before_the_store() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({"name": "Database Systems", "code": "CS452"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, body) = send(&app, "GET", "/api/courses", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn updating_a_missing_course_is_not_found() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/courses",
        Some(json!({"code": "XYZ999", "name": "Ghost Course"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/api/courses", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn update_is_partial() {
    let app = test_app().await;
    send(&app, "POST", "/api/courses", Some(course_body())).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/courses",
        Some(json!({"code": "CSE452", "name": "Advanced Databases", "description": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Advanced Databases");
    assert_eq!(body["data"]["description"], "Good");
}

#[tokio::test]
async fn deleted_courses_stop_resolving() {
    let app = test_app().await;
    send(&app, "POST", "/api/courses", Some(course_body())).await;

    let (status, body) = send(&app, "DELETE", "/api/courses/CSE452", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["code"], "CSE452");

    let (status, _) = send(&app, "GET", "/api/courses/CSE452", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn enrollment_lifecycle() {
    let app = test_app().await;
    send(&app, "POST", "/api/courses", Some(course_body())).await;
    send(
        &app,
        "POST",
        "/api/students",
        Some(json!({"name": "Ahmad", "code": "1600122"})),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/students/1600122/enroll",
        Some(json!({"course_code": "CSE452"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The same pair again conflicts.
    let (status, body) = send(
        &app,
        "POST",
        "/api/students/1600122/enroll",
        Some(json!({"course_code": "CSE452"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(
        body["message"].as_str().unwrap().contains("already enrolled"),
        "unexpected message: {}",
        body["message"]
    );

    let (_, body) = send(&app, "GET", "/api/courses/CSE452/students", None).await;
    let students = body["data"].as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["code"], "1600122");

    let (_, body) = send(&app, "GET", "/api/students/1600122/courses", None).await;
    assert_eq!(body["data"][0]["code"], "CSE452");

    // Deleting the course takes its enrollments with it.
    send(&app, "DELETE", "/api/courses/CSE452", None).await;
    let (status, body) = send(&app, "GET", "/api/courses/CSE452/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn enrolling_in_an_unknown_course_is_not_found() {
    let app = test_app().await;
    send(
        &app,
        "POST",
        "/api/students",
        Some(json!({"name": "Ahmad", "code": "1600122"})),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/students/1600122/enroll",
        Some(json!({"course_code": "CSE452"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unenrolling_a_missing_pair_is_not_found() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/students/1600122/unenroll",
        Some(json!({"course_code": "CSE452"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn staff_assignment_round_trip() {
    let app = test_app().await;
    send(&app, "POST", "/api/courses", Some(course_body())).await;
    send(
        &app,
        "POST",
        "/api/staff",
        Some(json!({"name": "Mohamed Hassan", "code": "9100221", "title": "Professor"})),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/courses/assignStaff",
        Some(json!({"course_code": "CSE452", "staff_code": "9100221"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["staff_code"], "9100221");

    let (_, body) = send(&app, "GET", "/api/courses/CSE452/staff", None).await;
    assert_eq!(body["data"]["name"], "Mohamed Hassan");

    let (_, body) = send(&app, "GET", "/api/staff/9100221/courses", None).await;
    assert_eq!(body["data"][0]["code"], "CSE452");

    // Assigning an unknown staff member fails without touching the course.
    let (status, _) = send(
        &app,
        "POST",
        "/api/courses/assignStaff",
        Some(json!({"course_code": "CSE452", "staff_code": "0000000"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/api/courses/CSE452", None).await;
    assert_eq!(body["data"]["staff_code"], "9100221");
}

#[tokio::test]
async fn statistics_reflect_enrollment_sizes() {
    let app = test_app().await;
    send(&app, "POST", "/api/courses", Some(course_body())).await;
    send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({"name": "Control Engineering", "code": "CSE462"})),
    )
    .await;
    for (name, code) in [
        ("Ahmad", "1600122"),
        ("AbdELHakim", "1600133"),
        ("Deif", "1600144"),
    ] {
        send(
            &app,
            "POST",
            "/api/students",
            Some(json!({"name": name, "code": code})),
        )
        .await;
    }
    for (student, course) in [
        ("1600122", "CSE452"),
        ("1600133", "CSE452"),
        ("1600144", "CSE462"),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/students/{student}/enroll"),
            Some(json!({"course_code": course})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", "/api/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];
    assert_eq!(stats["total_courses"], 2);
    assert_eq!(stats["total_students"], 3);
    assert_eq!(stats["average_students_per_course"], 1.5);

    let courses = stats["courses"].as_array().unwrap();
    assert_eq!(courses[0]["code"], "CSE452");
    assert_eq!(courses[0]["enrolled"], 2);
    assert_eq!(courses[1]["code"], "CSE462");
    assert_eq!(courses[1]["enrolled"], 1);
}
