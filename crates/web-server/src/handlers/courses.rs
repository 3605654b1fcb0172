use crate::{AppState, error::AppError, response::ApiResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use core_types::{Course, RecordRef};
use std::sync::Arc;
use validation::{
    AssignStaffPayload, CoursePayload, validate_course, validate_course_update,
    validate_staff_assignment,
};

const NOT_FOUND: &str = "The course with the given code was not found";

/// # GET /api/courses
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Course>>>, AppError> {
    let courses = state.repo.get_all_courses().await?;
    Ok(ApiResponse::ok("Courses retrieved successfully", courses))
}

/// # GET /api/courses/:code
pub async fn get(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let course = state
        .repo
        .get_course_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Course retrieved successfully", course))
}

/// # POST /api/courses
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CoursePayload>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let new_course = validate_course(payload)?;
    let course = state
        .repo
        .add_course(
            &new_course.name,
            &new_course.code,
            new_course.description.as_deref(),
        )
        .await?;
    Ok(ApiResponse::ok("Course added successfully", course))
}

/// # PUT /api/courses
/// The course code in the body is the key; other fields are optional.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CoursePayload>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let update = validate_course_update(payload)?;
    let course = state
        .repo
        .update_course(&update.code, update.name.as_deref(), update.description.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Course updated successfully", course))
}

/// # DELETE /api/courses/:code
pub async fn remove(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let course = state
        .repo
        .delete_course(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Course deleted successfully", course))
}

/// # GET /api/courses/:code/students
pub async fn enrolled_students(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<RecordRef>>>, AppError> {
    let students = state.repo.get_enrolled_students(&code).await?;
    Ok(ApiResponse::ok(
        "Enrolled students retrieved successfully",
        students,
    ))
}

/// # GET /api/courses/:code/staff
pub async fn assigned_staff(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<RecordRef>>, AppError> {
    let staff = state.repo.get_assigned_staff(&code).await?.ok_or_else(|| {
        AppError::NotFound("No staff member is assigned to the course".to_string())
    })?;
    Ok(ApiResponse::ok("Assigned staff retrieved successfully", staff))
}

/// # POST /api/courses/assignStaff
pub async fn assign_staff(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AssignStaffPayload>,
) -> Result<Json<ApiResponse<Course>>, AppError> {
    let assignment = validate_staff_assignment(payload)?;
    let course = state
        .repo
        .assign_staff(&assignment.course_code, &assignment.staff_code)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Staff assigned successfully", course))
}
