//! Get booking by id

use sqlx::SqlitePool;

use super::super::types::{Booking, BOOKING_COLUMNS};

#[derive(Debug, thiserror::Error)]
pub enum GetBookingError {
    #[error("Booking '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: String) -> Result<Booking, GetBookingError> {
    sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
    ))
    .bind(&id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetBookingError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_aircraft, seed_airline, seed_airport, seed_booking, seed_flight, seed_passenger,
    };

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_returns_record(pool: SqlitePool) {
        let airline = seed_airline(&pool, "Test Air").await;
        let dep = seed_airport(&pool, "Dep Field").await;
        let arr = seed_airport(&pool, "Arr Field").await;
        let aircraft = seed_aircraft(&pool, Some(&airline)).await;
        let flight = seed_flight(&pool, &airline, &dep, &arr, &aircraft).await;
        let passenger = seed_passenger(&pool, "ada@example.com").await;
        let id = seed_booking(&pool, &flight, &passenger, Some("12A")).await;

        let booking = handle(pool.clone(), id.clone()).await.unwrap();
        assert_eq!(booking.id, id);
        assert_eq!(booking.booking_status, "Confirmed");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let result = handle(pool.clone(), "missing".to_string()).await;
        assert!(matches!(result, Err(GetBookingError::NotFound(_))));
    }
}
