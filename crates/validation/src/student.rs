use crate::error::ValidationError;
use crate::rules::{is_course_code, is_person_name, supplied};
use serde::Deserialize;

/// Raw request body for student create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// Raw request body for the enroll/unenroll endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollPayload {
    pub course_code: Option<String>,
}

/// A validated student creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub code: String,
}

/// A validated partial update, keyed by student code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentUpdate {
    pub code: String,
    pub name: Option<String>,
}

/// Validates student data for POST requests. `name` and `code` are required.
pub fn validate_student(payload: StudentPayload) -> Result<NewStudent, ValidationError> {
    let code = supplied(payload.code)
        .ok_or_else(|| ValidationError::new("code", "code is required"))?;
    check_student_code(&code)?;

    let name = supplied(payload.name)
        .ok_or_else(|| ValidationError::new("name", "name is required"))?;
    check_student_name(&name)?;

    Ok(NewStudent { name, code })
}

/// Validates student data for PUT requests. Only `code` (the key) is
/// required; an empty or absent name means "do not change".
pub fn validate_student_update(payload: StudentPayload) -> Result<StudentUpdate, ValidationError> {
    let code = supplied(payload.code)
        .ok_or_else(|| ValidationError::new("code", "code is required"))?;
    check_student_code(&code)?;

    let name = supplied(payload.name);
    if let Some(name) = name.as_deref() {
        check_student_name(name)?;
    }

    Ok(StudentUpdate { code, name })
}

/// Validates the body of an enroll/unenroll request, returning the course code.
pub fn validate_enrollment(payload: EnrollPayload) -> Result<String, ValidationError> {
    let course_code = supplied(payload.course_code)
        .ok_or_else(|| ValidationError::new("course_code", "course_code is required"))?;
    if !is_course_code(&course_code) {
        return Err(ValidationError::new(
            "course_code",
            "must be 3 letters followed by 3 digits",
        ));
    }
    Ok(course_code)
}

fn check_student_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().count() == 7 {
        Ok(())
    } else {
        Err(ValidationError::new(
            "code",
            "must be exactly 7 characters long",
        ))
    }
}

fn check_student_name(name: &str) -> Result<(), ValidationError> {
    if is_person_name(name) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "name",
            "may only contain letters, spaces, hyphens, apostrophes and periods",
        ))
    }
}
