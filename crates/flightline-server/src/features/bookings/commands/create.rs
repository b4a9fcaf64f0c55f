//! Create booking command
//!
//! The seat pre-check is a fast reject; UNIQUE(flight_id, seat_number) is
//! the arbiter when two bookings race for the same seat, and its violation
//! maps back to the same conflict the pre-check reports.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::super::types::{Booking, BOOKING_COLUMNS, DEFAULT_BOOKING_STATUS};
use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::validation::{normalized, or_default};
use crate::validator::{self, BookingCandidate, ConflictReason, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingCommand {
    pub flight_id: Option<String>,
    pub passenger_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl CreateBookingCommand {
    fn candidate(&self) -> BookingCandidate<'_> {
        BookingCandidate {
            flight_id: self.flight_id.as_deref(),
            passenger_id: self.passenger_id.as_deref(),
            seat_number: self.seat_number.as_deref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateBookingError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for CreateBookingError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateBookingCommand,
) -> Result<Booking, CreateBookingError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_booking_write(&store, &command.candidate(), None).await?;

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let seat_number = normalized(command.seat_number.clone());
    let booking_status = or_default(command.booking_status.clone(), DEFAULT_BOOKING_STATUS);

    let flight_id = command.flight_id.clone().unwrap_or_default();
    let seat_for_error = seat_number.clone().unwrap_or_default();

    let booking = sqlx::query_as::<_, Booking>(&format!(
        r#"
        INSERT INTO bookings (id, flight_id, passenger_id, booking_date, seat_number,
                              booking_status, price, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $4, $4)
        RETURNING {BOOKING_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&flight_id)
    .bind(&command.passenger_id)
    .bind(now)
    .bind(&seat_number)
    .bind(&booking_status)
    .bind(command.price)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        map_unique_violation(
            e,
            CreateBookingError::Rejected(ConflictReason::SeatTaken {
                flight_id: flight_id.clone(),
                seat_number: seat_for_error.clone(),
            }),
            CreateBookingError::Database,
        )
    })?;

    tracing::info!(booking_id = %booking.id, flight_id = %booking.flight_id, "Booking created");

    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_aircraft, seed_airline, seed_airport, seed_flight, seed_passenger,
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

    fn command(flight: &str, passenger: &str, seat: Option<&str>) -> CreateBookingCommand {
        CreateBookingCommand {
            flight_id: Some(flight.to_string()),
            passenger_id: Some(passenger.to_string()),
            seat_number: seat.map(String::from),
            booking_status: None,
            price: Some(129.90),
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_defaults_status_and_date(pool: SqlitePool) {
        let (flight, passenger) = stage(&pool).await;

        let booking = handle(pool.clone(), command(&flight, &passenger, Some("12A")))
            .await
            .unwrap();
        assert_eq!(booking.booking_status, "Confirmed");
        assert_eq!(booking.seat_number, Some("12A".to_string()));
        assert_eq!(booking.booking_date, booking.created_at);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_rejects_taken_seat(pool: SqlitePool) {
        let (flight, passenger) = stage(&pool).await;
        let other = seed_passenger(&pool, "grace@example.com").await;

        handle(pool.clone(), command(&flight, &passenger, Some("12A")))
            .await
            .unwrap();

        let result = handle(pool.clone(), command(&flight, &other, Some("12A"))).await;
        assert!(matches!(
            result,
            Err(CreateBookingError::Rejected(ConflictReason::SeatTaken { .. }))
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_allows_seatless_bookings(pool: SqlitePool) {
        let (flight, passenger) = stage(&pool).await;
        let other = seed_passenger(&pool, "grace@example.com").await;

        handle(pool.clone(), command(&flight, &passenger, None)).await.unwrap();
        // Several seatless bookings on one flight never collide.
        handle(pool.clone(), command(&flight, &other, None)).await.unwrap();
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_rejects_unknown_flight(pool: SqlitePool) {
        let (_, passenger) = stage(&pool).await;

        let result = handle(pool.clone(), command("missing", &passenger, None)).await;
        assert!(matches!(
            result,
            Err(CreateBookingError::Rejected(ConflictReason::UnknownFlight(_)))
        ));
    }
}
