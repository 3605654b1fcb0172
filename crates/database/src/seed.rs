use crate::error::DbError;
use sqlx::SqlitePool;

/// Inserts the demo records used by fresh deployments.
///
/// Idempotent: every statement is `ON CONFLICT DO NOTHING`, so this can run
/// on every startup without disturbing existing data.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO staff (name, code, title) VALUES \
            ('Mohamed Hassan', '9100221', 'Professor'), \
            ('Sara Ibrahim', '9100232', 'Lecturer') \
         ON CONFLICT (code) DO NOTHING",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO courses (name, code, description) VALUES \
            ('Database', 'CSE452', 'Good'), \
            ('Multimedia', 'CSE458', ''), \
            ('Control', 'CSE462', 'Bad') \
         ON CONFLICT (code) DO NOTHING",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO students (name, code) VALUES \
            ('Ahmad', '1600122'), \
            ('AbdELHakim', '1600133'), \
            ('Deif', '1600144') \
         ON CONFLICT (code) DO NOTHING",
    )
    .execute(pool)
    .await?;

    tracing::info!("Demo records seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{connect_in_memory, run_migrations};
    use crate::repository::DbRepository;

    #[tokio::test]
    async fn seeding_twice_is_harmless() {
        let pool = connect_in_memory().await.unwrap();
        run_migrations(&pool).await.unwrap();

        seed_demo_data(&pool).await.unwrap();
        seed_demo_data(&pool).await.unwrap();

        let repo = DbRepository::new(pool);
        assert_eq!(repo.count_courses().await.unwrap(), 3);
        assert_eq!(repo.count_students().await.unwrap(), 3);
        assert_eq!(repo.count_staff().await.unwrap(), 2);
    }
}
