use crate::error::ValidationError;
use crate::rules::{is_course_code, supplied};
use crate::staff::check_staff_code;
use serde::Deserialize;

/// Raw request body for course create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursePayload {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Raw request body for `POST /api/courses/assignStaff`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignStaffPayload {
    pub course_code: Option<String>,
    pub staff_code: Option<String>,
}

/// A validated course creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

/// A validated partial update, keyed by course code.
/// `None` fields are left unchanged by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseUpdate {
    pub code: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A validated staff-assignment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffAssignment {
    pub course_code: String,
    pub staff_code: String,
}

/// Validates course data for POST requests. `name` and `code` are required.
pub fn validate_course(payload: CoursePayload) -> Result<NewCourse, ValidationError> {
    let code = supplied(payload.code)
        .ok_or_else(|| ValidationError::new("code", "code is required"))?;
    check_course_code(&code)?;

    let name = supplied(payload.name)
        .ok_or_else(|| ValidationError::new("name", "name is required"))?;
    check_course_name(&name)?;

    let description = supplied(payload.description);
    check_description(description.as_deref())?;

    Ok(NewCourse {
        name,
        code,
        description,
    })
}

/// Validates course data for PUT requests. Only `code` (the key) is
/// required; empty or absent fields mean "do not change".
pub fn validate_course_update(payload: CoursePayload) -> Result<CourseUpdate, ValidationError> {
    let code = supplied(payload.code)
        .ok_or_else(|| ValidationError::new("code", "code is required"))?;
    check_course_code(&code)?;

    let name = supplied(payload.name);
    if let Some(name) = name.as_deref() {
        check_course_name(name)?;
    }

    let description = supplied(payload.description);
    check_description(description.as_deref())?;

    Ok(CourseUpdate {
        code,
        name,
        description,
    })
}

/// Validates the body of a staff-assignment request. Both codes are required.
pub fn validate_staff_assignment(
    payload: AssignStaffPayload,
) -> Result<StaffAssignment, ValidationError> {
    let course_code = supplied(payload.course_code)
        .ok_or_else(|| ValidationError::new("course_code", "course_code is required"))?;
    if !is_course_code(&course_code) {
        return Err(ValidationError::new(
            "course_code",
            "must be 3 letters followed by 3 digits",
        ));
    }

    let staff_code = supplied(payload.staff_code)
        .ok_or_else(|| ValidationError::new("staff_code", "staff_code is required"))?;
    check_staff_code(&staff_code).map_err(|err| ValidationError::new("staff_code", err.message))?;

    Ok(StaffAssignment {
        course_code,
        staff_code,
    })
}

fn check_course_code(code: &str) -> Result<(), ValidationError> {
    if is_course_code(code) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "code",
            "must be 3 letters followed by 3 digits",
        ))
    }
}

fn check_course_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() >= 5 {
        Ok(())
    } else {
        Err(ValidationError::new(
            "name",
            "must be at least 5 characters long",
        ))
    }
}

fn check_description(description: Option<&str>) -> Result<(), ValidationError> {
    match description {
        Some(d) if d.chars().count() > 200 => Err(ValidationError::new(
            "description",
            "must be at most 200 characters long",
        )),
        _ => Ok(()),
    }
}
