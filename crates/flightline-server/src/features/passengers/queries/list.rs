//! List passengers with pagination

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Passenger, PASSENGER_COLUMNS};
use crate::features::shared::pagination::{Paginated, PaginationParams};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListPassengersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListPassengersError {
    #[error("{0}")]
    InvalidPagination(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListPassengersQuery,
) -> Result<Paginated<Passenger>, ListPassengersError> {
    let params = PaginationParams::new(query.page, query.per_page);
    params.validate().map_err(ListPassengersError::InvalidPagination)?;

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM passengers")
        .fetch_one(&pool)
        .await?;

    let items = sqlx::query_as::<_, Passenger>(&format!(
        r#"
        SELECT {PASSENGER_COLUMNS} FROM passengers
        ORDER BY last_name, first_name
        LIMIT $1 OFFSET $2
        "#
    ))
    .bind(params.per_page())
    .bind(params.offset())
    .fetch_all(&pool)
    .await?;

    Ok(Paginated::from_items(items, &params, total))
}
