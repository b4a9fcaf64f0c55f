//! Delete booking command
//!
//! Nothing references bookings, so deletion is unguarded.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBookingCommand {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBookingResponse {
    pub id: String,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteBookingError {
    #[error("Booking '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: DeleteBookingCommand,
) -> Result<DeleteBookingResponse, DeleteBookingError> {
    let result = sqlx::query("DELETE FROM bookings WHERE id = $1 RETURNING id")
        .bind(&command.id)
        .fetch_optional(&pool)
        .await?;

    match result {
        Some(_) => {
            tracing::info!(booking_id = %command.id, "Booking deleted");
            Ok(DeleteBookingResponse {
                id: command.id,
                deleted: true,
            })
        },
        None => Err(DeleteBookingError::NotFound(command.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_aircraft, seed_airline, seed_airport, seed_booking, seed_flight, seed_passenger,
    };

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_deletes_booking(pool: SqlitePool) {
        let airline = seed_airline(&pool, "Test Air").await;
        let dep = seed_airport(&pool, "Dep Field").await;
        let arr = seed_airport(&pool, "Arr Field").await;
        let aircraft = seed_aircraft(&pool, Some(&airline)).await;
        let flight = seed_flight(&pool, &airline, &dep, &arr, &aircraft).await;
        let passenger = seed_passenger(&pool, "ada@example.com").await;
        let id = seed_booking(&pool, &flight, &passenger, Some("12A")).await;

        let response = handle(pool.clone(), DeleteBookingCommand { id }).await.unwrap();
        assert!(response.deleted);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let result = handle(
            pool.clone(),
            DeleteBookingCommand {
                id: "missing".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(DeleteBookingError::NotFound(_))));
    }
}
