//! Get aircraft by id

use sqlx::SqlitePool;

use super::super::types::{Aircraft, AIRCRAFT_COLUMNS};

#[derive(Debug, thiserror::Error)]
pub enum GetAircraftError {
    #[error("Aircraft '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: String) -> Result<Aircraft, GetAircraftError> {
    sqlx::query_as::<_, Aircraft>(&format!(
        "SELECT {AIRCRAFT_COLUMNS} FROM aircraft WHERE id = $1"
    ))
    .bind(&id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetAircraftError::NotFound(id))
}
