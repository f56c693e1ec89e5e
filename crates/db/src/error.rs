use std::time::Duration;

/// Errors raised while talking to the store.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Statement execution or connection failure reported by sqlx.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// Applying the bootstrap schema failed.
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// A connection attempt or statement did not finish in time.
    #[error("Database {stage} timed out after {elapsed:?}")]
    Timeout {
        stage: &'static str,
        elapsed: Duration,
    },
}
