//! List flights with pagination, filtered by airline or status

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Flight, FLIGHT_COLUMNS};
use crate::features::shared::pagination::{Paginated, PaginationParams};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListFlightsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListFlightsError {
    #[error("{0}")]
    InvalidPagination(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListFlightsQuery,
) -> Result<Paginated<Flight>, ListFlightsError> {
    let params = PaginationParams::new(query.page, query.per_page);
    params.validate().map_err(ListFlightsError::InvalidPagination)?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM flights
        WHERE ($1 IS NULL OR airline_id = $1)
          AND ($2 IS NULL OR status = $2)
        "#,
    )
    .bind(&query.airline_id)
    .bind(&query.status)
    .fetch_one(&pool)
    .await?;

    let items = sqlx::query_as::<_, Flight>(&format!(
        r#"
        SELECT {FLIGHT_COLUMNS} FROM flights
        WHERE ($1 IS NULL OR airline_id = $1)
          AND ($2 IS NULL OR status = $2)
        ORDER BY departure_time
        LIMIT $3 OFFSET $4
        "#
    ))
    .bind(&query.airline_id)
    .bind(&query.status)
    .bind(params.per_page())
    .bind(params.offset())
    .fetch_all(&pool)
    .await?;

    Ok(Paginated::from_items(items, &params, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_aircraft, seed_airline, seed_airport, seed_flight,
    };

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_filters_by_airline(pool: SqlitePool) {
        let airline_a = seed_airline(&pool, "Air A").await;
        let airline_b = seed_airline(&pool, "Air B").await;
        let dep = seed_airport(&pool, "Dep Field").await;
        let arr = seed_airport(&pool, "Arr Field").await;
        let aircraft_a = seed_aircraft(&pool, Some(&airline_a)).await;
        let aircraft_b = seed_aircraft(&pool, Some(&airline_b)).await;
        seed_flight(&pool, &airline_a, &dep, &arr, &aircraft_a).await;
        seed_flight(&pool, &airline_b, &dep, &arr, &aircraft_b).await;

        let all = handle(pool.clone(), ListFlightsQuery::default()).await.unwrap();
        assert_eq!(all.items.len(), 2);

        let filtered = handle(
            pool.clone(),
            ListFlightsQuery {
                airline_id: Some(airline_a.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.items[0].airline_id, airline_a);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_filters_by_status(pool: SqlitePool) {
        let airline = seed_airline(&pool, "Test Air").await;
        let dep = seed_airport(&pool, "Dep Field").await;
        let arr = seed_airport(&pool, "Arr Field").await;
        let aircraft = seed_aircraft(&pool, Some(&airline)).await;
        seed_flight(&pool, &airline, &dep, &arr, &aircraft).await;

        let none = handle(
            pool.clone(),
            ListFlightsQuery {
                status: Some("Cancelled".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(none.items.is_empty());

        let scheduled = handle(
            pool.clone(),
            ListFlightsQuery {
                status: Some("Scheduled".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(scheduled.items.len(), 1);
    }
}
