use crate::{AppState, error::AppError, response::ApiResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use core_types::{RecordRef, Staff};
use std::sync::Arc;
use validation::{StaffPayload, validate_staff, validate_staff_update};

const NOT_FOUND: &str = "The staff member with the given code was not found";

/// # GET /api/staff
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Staff>>>, AppError> {
    let staff = state.repo.get_all_staff().await?;
    Ok(ApiResponse::ok("Staff retrieved successfully", staff))
}

/// # GET /api/staff/:code
pub async fn get(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Staff>>, AppError> {
    let staff = state
        .repo
        .get_staff_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Staff retrieved successfully", staff))
}

/// # POST /api/staff
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StaffPayload>,
) -> Result<Json<ApiResponse<Staff>>, AppError> {
    let new_staff = validate_staff(payload)?;
    let staff = state
        .repo
        .add_staff(&new_staff.name, &new_staff.code, new_staff.title.as_deref())
        .await?;
    Ok(ApiResponse::ok("Staff member added successfully", staff))
}

/// # PUT /api/staff
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StaffPayload>,
) -> Result<Json<ApiResponse<Staff>>, AppError> {
    let update = validate_staff_update(payload)?;
    let staff = state
        .repo
        .update_staff(&update.code, update.name.as_deref(), update.title.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Staff member updated successfully", staff))
}

/// # DELETE /api/staff/:code
pub async fn remove(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Staff>>, AppError> {
    let staff = state
        .repo
        .delete_staff(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(ApiResponse::ok("Staff member deleted successfully", staff))
}

/// # GET /api/staff/:code/courses
pub async fn assigned_courses(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<RecordRef>>>, AppError> {
    let courses = state.repo.get_assigned_courses(&code).await?;
    Ok(ApiResponse::ok(
        "Assigned courses retrieved successfully",
        courses,
    ))
}
