//! Payload validation for the LMS API.
//!
//! Pure shape/format checking: one `validate_*` / `validate_*_update` pair
//! per entity, each taking a raw payload deserialized from the request body
//! and returning either the validated fields or a [`ValidationError`] naming
//! the first failing field. Validators never consult the store, so duplicate
//! keys are not detected here; those surface from the database layer.

pub mod course;
pub mod error;
pub mod staff;
pub mod student;

mod rules;

// Re-export the validators and their types to provide a clean public API.
pub use course::{
    AssignStaffPayload, CoursePayload, CourseUpdate, NewCourse, StaffAssignment, validate_course,
    validate_course_update, validate_staff_assignment,
};
pub use error::ValidationError;
pub use staff::{NewStaff, StaffPayload, StaffUpdate, validate_staff, validate_staff_update};
pub use student::{
    EnrollPayload, NewStudent, StudentPayload, StudentUpdate, validate_enrollment,
    validate_student, validate_student_update,
};
