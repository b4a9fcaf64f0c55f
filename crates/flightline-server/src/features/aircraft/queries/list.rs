//! List aircraft with pagination, optionally filtered by owning airline

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Aircraft, AIRCRAFT_COLUMNS};
use crate::features::shared::pagination::{Paginated, PaginationParams};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListAircraftQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListAircraftError {
    #[error("{0}")]
    InvalidPagination(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListAircraftQuery,
) -> Result<Paginated<Aircraft>, ListAircraftError> {
    let params = PaginationParams::new(query.page, query.per_page);
    params.validate().map_err(ListAircraftError::InvalidPagination)?;

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM aircraft WHERE ($1 IS NULL OR airline_id = $1)",
    )
    .bind(&query.airline_id)
    .fetch_one(&pool)
    .await?;

    let items = sqlx::query_as::<_, Aircraft>(&format!(
        r#"
        SELECT {AIRCRAFT_COLUMNS} FROM aircraft
        WHERE ($1 IS NULL OR airline_id = $1)
        ORDER BY created_at
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(&query.airline_id)
    .bind(params.per_page())
    .bind(params.offset())
    .fetch_all(&pool)
    .await?;

    Ok(Paginated::from_items(items, &params, total))
}
