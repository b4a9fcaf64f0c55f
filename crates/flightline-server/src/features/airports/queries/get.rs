//! Get airport by id

use sqlx::SqlitePool;

use super::super::types::{Airport, AIRPORT_COLUMNS};

#[derive(Debug, thiserror::Error)]
pub enum GetAirportError {
    #[error("Airport '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: String) -> Result<Airport, GetAirportError> {
    sqlx::query_as::<_, Airport>(&format!(
        "SELECT {AIRPORT_COLUMNS} FROM airports WHERE id = $1"
    ))
    .bind(&id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetAirportError::NotFound(id))
}
