use crate::DbError;
use core_types::{Course, CourseEnrollment, Enrollment, RecordRef, Staff, Student};
use sqlx::SqlitePool;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the record store. It encapsulates all SQL queries and data access
/// logic; nothing outside this crate writes SQL.
///
/// Every operation is a single round-trip. There are no multi-statement
/// transactions, so a caller performing related writes (e.g. create a
/// course, then assign staff) owns the gap between them.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: SqlitePool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ------------------------------------------------------------------
    // Courses
    // ------------------------------------------------------------------

    pub async fn get_all_courses(&self) -> Result<Vec<Course>, DbError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT code, name, description, staff_code FROM courses",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    pub async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>, DbError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT code, name, description, staff_code FROM courses WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    /// Inserts a course and returns the persisted row. A second insert with
    /// the same code fails with `DbError::Duplicate`.
    pub async fn add_course(
        &self,
        name: &str,
        code: &str,
        description: Option<&str>,
    ) -> Result<Course, DbError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name, code, description) VALUES ($1, $2, $3) \
             RETURNING code, name, description, staff_code",
        )
        .bind(name)
        .bind(code)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| duplicate_key(e, code))?;
        Ok(course)
    }

    /// Partial update by course code. `None` fields keep their stored
    /// value; a `None` return means no row matched the key.
    pub async fn update_course(
        &self,
        code: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Course>, DbError> {
        let course = sqlx::query_as::<_, Course>(
            "UPDATE courses \
             SET name = COALESCE($1, name), description = COALESCE($2, description) \
             WHERE code = $3 \
             RETURNING code, name, description, staff_code",
        )
        .bind(name)
        .bind(description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    /// Physically removes a course, returning the prior row. Enrollments
    /// referencing the course are cascaded away by the schema.
    pub async fn delete_course(&self, code: &str) -> Result<Option<Course>, DbError> {
        let course = sqlx::query_as::<_, Course>(
            "DELETE FROM courses WHERE code = $1 \
             RETURNING code, name, description, staff_code",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    /// Sets or replaces the staff member assigned to a course. Idempotent.
    /// `None` means the course does not exist; an unknown staff code
    /// surfaces as `DbError::MissingReference`.
    pub async fn assign_staff(
        &self,
        course_code: &str,
        staff_code: &str,
    ) -> Result<Option<Course>, DbError> {
        let course = sqlx::query_as::<_, Course>(
            "UPDATE courses SET staff_code = $1 WHERE code = $2 \
             RETURNING code, name, description, staff_code",
        )
        .bind(staff_code)
        .bind(course_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            missing_reference(e, "The staff member with the given code was not found")
        })?;
        Ok(course)
    }

    pub async fn get_enrolled_students(
        &self,
        course_code: &str,
    ) -> Result<Vec<RecordRef>, DbError> {
        let students = sqlx::query_as::<_, RecordRef>(
            "SELECT students.code, students.name \
             FROM students \
             JOIN enrollments ON students.code = enrollments.student_code \
             WHERE enrollments.course_code = $1",
        )
        .bind(course_code)
        .fetch_all(&self.pool)
        .await?;
        Ok(students)
    }

    pub async fn get_assigned_staff(
        &self,
        course_code: &str,
    ) -> Result<Option<RecordRef>, DbError> {
        let staff = sqlx::query_as::<_, RecordRef>(
            "SELECT staff.code, staff.name \
             FROM staff \
             JOIN courses ON staff.code = courses.staff_code \
             WHERE courses.code = $1",
        )
        .bind(course_code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(staff)
    }

    pub async fn count_courses(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Per-course enrolled-student counts, for the statistics endpoint.
    /// Courses with no enrollments are included with a count of zero.
    pub async fn course_enrollment_counts(&self) -> Result<Vec<CourseEnrollment>, DbError> {
        let counts = sqlx::query_as::<_, CourseEnrollment>(
            "SELECT courses.code, courses.name, COUNT(enrollments.student_code) AS enrolled \
             FROM courses \
             LEFT JOIN enrollments ON enrollments.course_code = courses.code \
             GROUP BY courses.code, courses.name \
             ORDER BY courses.code",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    // ------------------------------------------------------------------
    // Students
    // ------------------------------------------------------------------

    pub async fn get_all_students(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>("SELECT code, name FROM students")
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    pub async fn get_student_by_code(&self, code: &str) -> Result<Option<Student>, DbError> {
        let student =
            sqlx::query_as::<_, Student>("SELECT code, name FROM students WHERE code = $1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;
        Ok(student)
    }

    pub async fn add_student(&self, name: &str, code: &str) -> Result<Student, DbError> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, code) VALUES ($1, $2) RETURNING code, name",
        )
        .bind(name)
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| duplicate_key(e, code))?;
        Ok(student)
    }

    pub async fn update_student(
        &self,
        code: &str,
        name: Option<&str>,
    ) -> Result<Option<Student>, DbError> {
        let student = sqlx::query_as::<_, Student>(
            "UPDATE students SET name = COALESCE($1, name) WHERE code = $2 \
             RETURNING code, name",
        )
        .bind(name)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    pub async fn delete_student(&self, code: &str) -> Result<Option<Student>, DbError> {
        let student = sqlx::query_as::<_, Student>(
            "DELETE FROM students WHERE code = $1 RETURNING code, name",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }

    /// Inserts one enrollment row. A repeated (student, course) pair fails
    /// with `Duplicate`; an unknown student or course with `MissingReference`.
    pub async fn enroll(
        &self,
        student_code: &str,
        course_code: &str,
    ) -> Result<Enrollment, DbError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_code, course_code) VALUES ($1, $2) \
             RETURNING student_code, course_code",
        )
        .bind(student_code)
        .bind(course_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| enrollment_error(e, student_code, course_code))?;
        Ok(enrollment)
    }

    /// Deletes one enrollment row. A non-existent pair is a no-op
    /// returning `None`.
    pub async fn unenroll(
        &self,
        student_code: &str,
        course_code: &str,
    ) -> Result<Option<Enrollment>, DbError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "DELETE FROM enrollments WHERE student_code = $1 AND course_code = $2 \
             RETURNING student_code, course_code",
        )
        .bind(student_code)
        .bind(course_code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(enrollment)
    }

    pub async fn get_enrolled_courses(
        &self,
        student_code: &str,
    ) -> Result<Vec<RecordRef>, DbError> {
        let courses = sqlx::query_as::<_, RecordRef>(
            "SELECT courses.code, courses.name \
             FROM courses \
             JOIN enrollments ON courses.code = enrollments.course_code \
             WHERE enrollments.student_code = $1",
        )
        .bind(student_code)
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    pub async fn count_students(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ------------------------------------------------------------------
    // Staff
    // ------------------------------------------------------------------

    pub async fn get_all_staff(&self) -> Result<Vec<Staff>, DbError> {
        let staff = sqlx::query_as::<_, Staff>("SELECT code, name, title FROM staff")
            .fetch_all(&self.pool)
            .await?;
        Ok(staff)
    }

    pub async fn get_staff_by_code(&self, code: &str) -> Result<Option<Staff>, DbError> {
        let staff =
            sqlx::query_as::<_, Staff>("SELECT code, name, title FROM staff WHERE code = $1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;
        Ok(staff)
    }

    pub async fn add_staff(
        &self,
        name: &str,
        code: &str,
        title: Option<&str>,
    ) -> Result<Staff, DbError> {
        let staff = sqlx::query_as::<_, Staff>(
            "INSERT INTO staff (name, code, title) VALUES ($1, $2, $3) \
             RETURNING code, name, title",
        )
        .bind(name)
        .bind(code)
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| duplicate_key(e, code))?;
        Ok(staff)
    }

    pub async fn update_staff(
        &self,
        code: &str,
        name: Option<&str>,
        title: Option<&str>,
    ) -> Result<Option<Staff>, DbError> {
        let staff = sqlx::query_as::<_, Staff>(
            "UPDATE staff SET name = COALESCE($1, name), title = COALESCE($2, title) \
             WHERE code = $3 \
             RETURNING code, name, title",
        )
        .bind(name)
        .bind(title)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(staff)
    }

    /// Physically removes a staff member. Courses they were assigned to
    /// are left unassigned by the schema (`ON DELETE SET NULL`).
    pub async fn delete_staff(&self, code: &str) -> Result<Option<Staff>, DbError> {
        let staff = sqlx::query_as::<_, Staff>(
            "DELETE FROM staff WHERE code = $1 RETURNING code, name, title",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(staff)
    }

    pub async fn get_assigned_courses(
        &self,
        staff_code: &str,
    ) -> Result<Vec<RecordRef>, DbError> {
        let courses = sqlx::query_as::<_, RecordRef>(
            "SELECT code, name FROM courses WHERE staff_code = $1",
        )
        .bind(staff_code)
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    pub async fn count_staff(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM staff")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Maps a unique-constraint violation onto `DbError::Duplicate`, leaving
/// every other failure as a plain query error.
fn duplicate_key(err: sqlx::Error, code: &str) -> DbError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return DbError::Duplicate(code.to_string());
        }
    }
    err.into()
}

/// Maps a foreign-key violation onto `DbError::MissingReference`.
fn missing_reference(err: sqlx::Error, message: &str) -> DbError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_foreign_key_violation() {
            return DbError::MissingReference(message.to_string());
        }
    }
    err.into()
}

/// Enrollment inserts can fail either way: a repeated pair or a missing side.
fn enrollment_error(err: sqlx::Error, student_code: &str, course_code: &str) -> DbError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return DbError::Duplicate(format!("{student_code}/{course_code}"));
        }
        if db.is_foreign_key_violation() {
            return DbError::MissingReference(
                "The referenced student or course was not found".to_string(),
            );
        }
    }
    err.into()
}
