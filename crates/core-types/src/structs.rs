use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course in the catalogue, identified by its unique six-character code
/// (three letters followed by three digits, e.g. `CSE452`).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// The staff member assigned to teach this course, if any.
    /// At most one staff member per course in this model.
    pub staff_code: Option<String>,
}

/// A student, identified by a unique seven-character code.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub code: String,
    pub name: String,
}

/// A staff member, identified by a unique seven-character code.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Staff {
    pub code: String,
    pub name: String,
    pub title: Option<String>,
}

/// One row of the associative table linking a student to a course.
/// A given (student, course) pair is unique.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_code: String,
    pub course_code: String,
}

/// Partial projection (code + name) of a related record, as returned by
/// the enrollment and staff-assignment join queries.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct RecordRef {
    pub code: String,
    pub name: String,
}

/// Per-course enrollment size, used by the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct CourseEnrollment {
    pub code: String,
    pub name: String,
    pub enrolled: i64,
}

/// Aggregate counts for `GET /api/statistics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_courses: i64,
    pub total_students: i64,
    pub total_staff: i64,
    /// Total students divided by total courses; zero when there are no courses.
    pub average_students_per_course: f64,
    pub courses: Vec<CourseEnrollment>,
}
