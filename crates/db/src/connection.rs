//! Per-request connection lifecycle.
//!
//! [`ConnectionProvider`] replaces a pool: each call to [`ConnectionProvider::run`]
//! opens one connection, hands it to a single operation, and closes it before
//! returning, on success and on failure alike. Opening, running, and closing are
//! each bounded by a timeout so an unreachable store cannot stall a request.

use std::str::FromStr;
use std::time::Duration;

use futures::future::BoxFuture;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

use crate::error::DbError;

/// Default time allowed to establish a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default time allowed for one operation on an open connection.
pub const DEFAULT_STATEMENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Opens a fresh connection for every unit of work and closes it afterwards.
///
/// Cheap to clone; holds only connection options and timeouts.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    options: PgConnectOptions,
    connect_timeout: Duration,
    statement_timeout: Duration,
}

impl ConnectionProvider {
    /// Build a provider from explicit connect options.
    pub fn new(options: PgConnectOptions) -> Self {
        Self {
            options,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            statement_timeout: DEFAULT_STATEMENT_TIMEOUT,
        }
    }

    /// Build a provider from a `postgres://` URL.
    pub fn from_url(database_url: &str) -> Result<Self, DbError> {
        let options = PgConnectOptions::from_str(database_url)?;
        Ok(Self::new(options))
    }

    /// Override the connection acquisition timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the per-operation timeout.
    pub fn with_statement_timeout(mut self, timeout: Duration) -> Self {
        self.statement_timeout = timeout;
        self
    }

    /// Open a new connection, bounded by the connect timeout.
    ///
    /// Callers that take a connection this way must hand it back through
    /// [`ConnectionProvider::release`]. Prefer [`ConnectionProvider::run`].
    pub async fn acquire(&self) -> Result<PgConnection, DbError> {
        match tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&self.options))
            .await
        {
            Ok(conn) => Ok(conn?),
            Err(_) => Err(DbError::Timeout {
                stage: "connect",
                elapsed: self.connect_timeout,
            }),
        }
    }

    /// Close a connection gracefully. Failures are logged, never returned.
    pub async fn release(&self, conn: PgConnection) {
        match tokio::time::timeout(self.connect_timeout, conn.close()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "Failed to close database connection"),
            Err(_) => tracing::warn!("Timed out closing database connection"),
        }
    }

    /// Run one operation on a freshly opened connection.
    ///
    /// The connection is closed after `op` completes, fails, or times out,
    /// and only then is the outcome returned.
    ///
    /// ```ignore
    /// let museums = provider
    ///     .run(|conn| Box::pin(async move { MuseumRepo::list(conn).await }))
    ///     .await?;
    /// ```
    pub async fn run<T, F>(&self, op: F) -> Result<T, DbError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, sqlx::Error>> + Send,
    {
        let mut conn = self.acquire().await?;
        let outcome = tokio::time::timeout(self.statement_timeout, op(&mut conn)).await;
        self.release(conn).await;

        match outcome {
            Ok(result) => Ok(result?),
            Err(_) => Err(DbError::Timeout {
                stage: "statement",
                elapsed: self.statement_timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_url_rejects_garbage() {
        assert!(ConnectionProvider::from_url("not a url").is_err());
    }

    #[test]
    fn builder_overrides_timeouts() {
        let provider = ConnectionProvider::from_url("postgres://user:pw@localhost/museums")
            .unwrap()
            .with_connect_timeout(Duration::from_millis(250))
            .with_statement_timeout(Duration::from_secs(2));

        assert_eq!(provider.connect_timeout, Duration::from_millis(250));
        assert_eq!(provider.statement_timeout, Duration::from_secs(2));
    }
}
