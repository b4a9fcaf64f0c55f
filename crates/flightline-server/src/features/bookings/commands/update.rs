//! Update booking command (full-record replace)
//!
//! `booking_date` records the original reservation instant and is never
//! overwritten here. The seat check excludes the booking being updated, so
//! keeping the current seat always succeeds.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Booking, BOOKING_COLUMNS, DEFAULT_BOOKING_STATUS};
use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::validation::{normalized, or_default};
use crate::validator::{self, BookingCandidate, ConflictReason, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingCommand {
    #[serde(skip)]
    pub id: String,
    pub flight_id: Option<String>,
    pub passenger_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl UpdateBookingCommand {
    fn candidate(&self) -> BookingCandidate<'_> {
        BookingCandidate {
            flight_id: self.flight_id.as_deref(),
            passenger_id: self.passenger_id.as_deref(),
            seat_number: self.seat_number.as_deref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateBookingError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Booking '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for UpdateBookingError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(booking_id = %command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateBookingCommand,
) -> Result<Booking, UpdateBookingError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_booking_write(&store, &command.candidate(), Some(&command.id)).await?;

    let seat_number = normalized(command.seat_number.clone());
    let booking_status = or_default(command.booking_status.clone(), DEFAULT_BOOKING_STATUS);

    let flight_id = command.flight_id.clone().unwrap_or_default();
    let seat_for_error = seat_number.clone().unwrap_or_default();

    let booking = sqlx::query_as::<_, Booking>(&format!(
        r#"
        UPDATE bookings
        SET flight_id = $2, passenger_id = $3, seat_number = $4,
            booking_status = $5, price = $6, updated_at = $7
        WHERE id = $1
        RETURNING {BOOKING_COLUMNS}
        "#
    ))
    .bind(&command.id)
    .bind(&flight_id)
    .bind(&command.passenger_id)
    .bind(&seat_number)
    .bind(&booking_status)
    .bind(command.price)
    .bind(Utc::now())
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        map_unique_violation(
            e,
            UpdateBookingError::Rejected(ConflictReason::SeatTaken {
                flight_id: flight_id.clone(),
                seat_number: seat_for_error.clone(),
            }),
            UpdateBookingError::Database,
        )
    })?
    .ok_or_else(|| UpdateBookingError::NotFound(command.id.clone()))?;

    tracing::info!(booking_id = %booking.id, "Booking updated");

    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_aircraft, seed_airline, seed_airport, seed_booking, seed_flight, seed_passenger,
    };

    async fn stage(pool: &SqlitePool) -> (String, String) {
        let airline = seed_airline(pool, "Test Air").await;
        let dep = seed_airport(pool, "Dep Field").await;
        let arr = seed_airport(pool, "Arr Field").await;
        let aircraft = seed_aircraft(pool, Some(&airline)).await;
        let flight = seed_flight(pool, &airline, &dep, &arr, &aircraft).await;
        let passenger = seed_passenger(pool, "ada@example.com").await;
        (flight, passenger)
    }

    fn command(id: &str, flight: &str, passenger: &str, seat: Option<&str>) -> UpdateBookingCommand {
        UpdateBookingCommand {
            id: id.to_string(),
            flight_id: Some(flight.to_string()),
            passenger_id: Some(passenger.to_string()),
            seat_number: seat.map(String::from),
            booking_status: Some("CheckedIn".to_string()),
            price: None,
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_keeps_own_seat_and_booking_date(pool: SqlitePool) {
        let (flight, passenger) = stage(&pool).await;
        let id = seed_booking(&pool, &flight, &passenger, Some("12A")).await;

        let before = sqlx::query_scalar::<_, String>(
            "SELECT booking_date FROM bookings WHERE id = $1",
        )
        .bind(&id)
        .fetch_one(&pool)
        .await
        .unwrap();

        let booking = handle(pool.clone(), command(&id, &flight, &passenger, Some("12A")))
            .await
            .unwrap();
        assert_eq!(booking.seat_number, Some("12A".to_string()));
        assert_eq!(booking.booking_status, "CheckedIn");

        let after = sqlx::query_scalar::<_, String>(
            "SELECT booking_date FROM bookings WHERE id = $1",
        )
        .bind(&id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(before, after);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_rejects_seat_held_by_other_booking(pool: SqlitePool) {
        let (flight, passenger) = stage(&pool).await;
        let other = seed_passenger(&pool, "grace@example.com").await;
        seed_booking(&pool, &flight, &passenger, Some("12A")).await;
        let id = seed_booking(&pool, &flight, &other, Some("14C")).await;

        let result = handle(pool.clone(), command(&id, &flight, &other, Some("12A"))).await;
        assert!(matches!(
            result,
            Err(UpdateBookingError::Rejected(ConflictReason::SeatTaken { .. }))
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let (flight, passenger) = stage(&pool).await;

        let result = handle(pool.clone(), command("missing", &flight, &passenger, None)).await;
        assert!(matches!(result, Err(UpdateBookingError::NotFound(_))));
    }
}
