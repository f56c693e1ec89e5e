//! Data access for the `museums` table.
//!
//! There is no connection pool: every unit of work goes through
//! [`ConnectionProvider::run`], which opens a fresh connection, runs one
//! operation against it, and closes it again.

use sqlx::PgConnection;

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::ConnectionProvider;
pub use error::DbError;

/// Verify the store answers a trivial query.
pub async fn health_check(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(conn).await?;
    Ok(())
}

/// Apply the bootstrap schema in `db/migrations`.
pub async fn run_migrations(provider: &ConnectionProvider) -> Result<(), DbError> {
    let mut conn = provider.acquire().await?;
    let outcome = sqlx::migrate!("../../db/migrations").run(&mut conn).await;
    provider.release(conn).await;
    outcome?;
    Ok(())
}
