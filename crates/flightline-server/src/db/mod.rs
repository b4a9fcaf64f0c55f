//! Database pool lifecycle and error types

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;

pub mod store;

pub use store::SqlStore;

/// Database operation errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Database configuration is invalid or missing
    #[error("Database configuration error: {0}. Check DATABASE_URL and connection settings.")]
    Config(String),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Record already exists (unique constraint violation)
    #[error("{0}")]
    Duplicate(String),
}

impl DbError {
    /// Create a not found error with resource context
    pub fn not_found(resource_type: &str, identifier: &str) -> Self {
        Self::NotFound(format!("{} '{}' not found in database", resource_type, identifier))
    }

    /// Create a duplicate error with resource context
    pub fn duplicate(resource_type: &str, identifier: &str) -> Self {
        Self::Duplicate(format!("{} '{}' already exists", resource_type, identifier))
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Open the connection pool described by `config`.
///
/// Opened once at startup and passed down explicitly; closed via
/// [`SqlitePool::close`] during shutdown. Foreign-key enforcement is on for
/// every connection.
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DbError::config(format!("invalid database URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(connect_options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Cheap connectivity probe used by the `/health` endpoint
pub async fn health_check(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(DbError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_create_pool_in_memory() {
        let mut config = Config::default().database;
        config.url = "sqlite::memory:".to_string();
        config.min_connections = 0;

        let pool = create_pool(&config).await.unwrap();
        assert!(health_check(&pool).await.is_ok());
        pool.close().await;
    }

    #[tokio::test]
    async fn test_create_pool_rejects_bad_url() {
        let mut config = Config::default().database;
        config.url = "postgres://nope".to_string();

        assert!(create_pool(&config).await.is_err());
    }
}
