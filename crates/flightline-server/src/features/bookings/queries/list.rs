//! List bookings with pagination, filtered by flight or passenger

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Booking, BOOKING_COLUMNS};
use crate::features::shared::pagination::{Paginated, PaginationParams};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListBookingsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListBookingsError {
    #[error("{0}")]
    InvalidPagination(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListBookingsQuery,
) -> Result<Paginated<Booking>, ListBookingsError> {
    let params = PaginationParams::new(query.page, query.per_page);
    params.validate().map_err(ListBookingsError::InvalidPagination)?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM bookings
        WHERE ($1 IS NULL OR flight_id = $1)
          AND ($2 IS NULL OR passenger_id = $2)
        "#,
    )
    .bind(&query.flight_id)
    .bind(&query.passenger_id)
    .fetch_one(&pool)
    .await?;

    let items = sqlx::query_as::<_, Booking>(&format!(
        r#"
        SELECT {BOOKING_COLUMNS} FROM bookings
        WHERE ($1 IS NULL OR flight_id = $1)
          AND ($2 IS NULL OR passenger_id = $2)
        ORDER BY booking_date DESC
        LIMIT $3 OFFSET $4
        "#
    ))
    .bind(&query.flight_id)
    .bind(&query.passenger_id)
    .bind(params.per_page())
    .bind(params.offset())
    .fetch_all(&pool)
    .await?;

    Ok(Paginated::from_items(items, &params, total))
}
