use crate::error::ValidationError;
use crate::rules::{is_person_name, supplied};
use serde::Deserialize;

/// Raw request body for staff create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffPayload {
    pub name: Option<String>,
    pub code: Option<String>,
    pub title: Option<String>,
}

/// A validated staff creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    pub name: String,
    pub code: String,
    pub title: Option<String>,
}

/// A validated partial update, keyed by staff code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffUpdate {
    pub code: String,
    pub name: Option<String>,
    pub title: Option<String>,
}

/// Validates staff data for POST requests. `name` and `code` are required,
/// `title` is optional.
pub fn validate_staff(payload: StaffPayload) -> Result<NewStaff, ValidationError> {
    let code = supplied(payload.code)
        .ok_or_else(|| ValidationError::new("code", "code is required"))?;
    check_staff_code(&code)?;

    let name = supplied(payload.name)
        .ok_or_else(|| ValidationError::new("name", "name is required"))?;
    check_staff_name(&name)?;

    Ok(NewStaff {
        name,
        code,
        title: supplied(payload.title),
    })
}

/// Validates staff data for PUT requests. Only `code` (the key) is
/// required; empty or absent fields mean "do not change".
pub fn validate_staff_update(payload: StaffPayload) -> Result<StaffUpdate, ValidationError> {
    let code = supplied(payload.code)
        .ok_or_else(|| ValidationError::new("code", "code is required"))?;
    check_staff_code(&code)?;

    let name = supplied(payload.name);
    if let Some(name) = name.as_deref() {
        check_staff_name(name)?;
    }

    Ok(StaffUpdate {
        code,
        name,
        title: supplied(payload.title),
    })
}

// Staff codes use the same registrar scheme as student codes: 7 characters.
pub(crate) fn check_staff_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().count() == 7 {
        Ok(())
    } else {
        Err(ValidationError::new(
            "code",
            "must be exactly 7 characters long",
        ))
    }
}

fn check_staff_name(name: &str) -> Result<(), ValidationError> {
    if !is_person_name(name) {
        return Err(ValidationError::new(
            "name",
            "may only contain letters, spaces, hyphens, apostrophes and periods",
        ));
    }
    if name.trim().chars().count() < 5 {
        return Err(ValidationError::new(
            "name",
            "must be at least 5 characters long",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, code: &str, title: Option<&str>) -> StaffPayload {
        StaffPayload {
            name: Some(name.to_string()),
            code: Some(code.to_string()),
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn accepts_a_well_formed_staff_member() {
        let staff = validate_staff(payload("Mohamed Hassan", "9100221", Some("Professor"))).unwrap();
        assert_eq!(staff.code, "9100221");
        assert_eq!(staff.title.as_deref(), Some("Professor"));
    }

    #[test]
    fn title_is_optional() {
        let staff = validate_staff(payload("Mohamed Hassan", "9100221", None)).unwrap();
        assert_eq!(staff.title, None);
    }

    #[test]
    fn rejects_short_or_malformed_names() {
        let err = validate_staff(payload("Mo", "9100221", None)).unwrap_err();
        assert_eq!(err.field, "name");

        let err = validate_staff(payload("Mohamed2", "9100221", None)).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn rejects_codes_of_the_wrong_length() {
        let err = validate_staff(payload("Mohamed Hassan", "910022", None)).unwrap_err();
        assert_eq!(err.field, "code");
    }

    #[test]
    fn update_leaves_absent_fields_alone() {
        let update = validate_staff_update(StaffPayload {
            code: Some("9100221".to_string()),
            name: Some(String::new()),
            title: None,
        })
        .unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.title, None);
    }
}
