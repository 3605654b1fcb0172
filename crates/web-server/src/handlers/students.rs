use crate::{AppState, error::AppError, response::ApiResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use core_types::{Enrollment, RecordRef, Student};
use database::DbError;
use std::sync::Arc;
use validation::{
    EnrollPayload, StudentPayload, validate_enrollment, validate_student, validate_student_update,
};

const NOT_FOUND: &str = "The student with the given code was not found";

/// # GET /api/students
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Student>>>, AppError> {
    let students = state.repo.get_all_students().await?;
    Ok(ApiResponse::ok("Students retrieved successfully", students))
}

/// # GET /api/students/:code
pub async fn get(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let student = state
        .repo
        .get_student_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Student retrieved successfully", student))
}

/// # POST /api/students
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let new_student = validate_student(payload)?;
    let student = state
        .repo
        .add_student(&new_student.name, &new_student.code)
        .await?;
    Ok(ApiResponse::ok("Student added successfully", student))
}

/// # PUT /api/students
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StudentPayload>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let update = validate_student_update(payload)?;
    let student = state
        .repo
        .update_student(&update.code, update.name.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Student updated successfully", student))
}

/// # DELETE /api/students/:code
pub async fn remove(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let student = state
        .repo
        .delete_student(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Student deleted successfully", student))
}

/// # GET /api/students/:code/courses
pub async fn enrolled_courses(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<RecordRef>>>, AppError> {
    let courses = state.repo.get_enrolled_courses(&code).await?;
    Ok(ApiResponse::ok(
        "Enrolled courses retrieved successfully",
        courses,
    ))
}

/// # POST /api/students/:code/enroll
pub async fn enroll(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EnrollPayload>,
) -> Result<Json<ApiResponse<Enrollment>>, AppError> {
    let course_code = validate_enrollment(payload)?;
    match state.repo.enroll(&code, &course_code).await {
        Ok(enrollment) => Ok(ApiResponse::ok("Student enrolled successfully", enrollment)),
        Err(DbError::Duplicate(_)) => Err(AppError::Conflict(format!(
            "Student {code} is already enrolled in course {course_code}"
        ))),
        Err(err) => Err(err.into()),
    }
}

/// # DELETE /api/students/:code/unenroll
pub async fn unenroll(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EnrollPayload>,
) -> Result<Json<ApiResponse<Enrollment>>, AppError> {
    let course_code = validate_enrollment(payload)?;
    let enrollment = state
        .repo
        .unenroll(&code, &course_code)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Student {code} is not enrolled in course {course_code}"
            ))
        })?;
    Ok(ApiResponse::ok(
        "Student unenrolled successfully",
        enrollment,
    ))
}
