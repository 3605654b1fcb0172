use crate::{AppState, error::AppError, response::ApiResponse};
use axum::{Json, extract::State};
use core_types::Statistics;
use std::sync::Arc;

/// # GET /api/statistics
pub async fn get(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Statistics>>, AppError> {
    let total_courses = state.repo.count_courses().await?;
    let total_students = state.repo.count_students().await?;
    let total_staff = state.repo.count_staff().await?;
    let courses = state.repo.course_enrollment_counts().await?;

    let statistics = Statistics {
        total_courses,
        total_students,
        total_staff,
        average_students_per_course: average_students_per_course(total_students, total_courses),
        courses,
    };
    Ok(ApiResponse::ok(
        "Statistics retrieved successfully",
        statistics,
    ))
}

/// Total students divided by total courses; zero when the catalogue is empty.
fn average_students_per_course(total_students: i64, total_courses: i64) -> f64 {
    if total_courses == 0 {
        0.0
    } else {
        total_students as f64 / total_courses as f64
    }
}
