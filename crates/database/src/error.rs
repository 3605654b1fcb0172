use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A unique-constraint violation on a natural key. Carries the key so
    /// callers can build a message naming the conflicting record.
    #[error("A record with code {0} already exists")]
    Duplicate(String),

    /// A foreign-key violation: the write referenced a record that does
    /// not exist (e.g. enrolling in an unknown course).
    #[error("{0}")]
    MissingReference(String),
}
