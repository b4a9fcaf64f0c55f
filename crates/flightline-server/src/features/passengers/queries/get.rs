//! Get passenger by id, with their bookings embedded

use serde::Serialize;
use sqlx::SqlitePool;

use super::super::types::{Passenger, PASSENGER_COLUMNS};
use crate::features::bookings::types::{Booking, BOOKING_COLUMNS};

#[derive(Debug, Serialize)]
pub struct PassengerDetail {
    #[serde(flatten)]
    pub passenger: Passenger,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, thiserror::Error)]
pub enum GetPassengerError {
    #[error("Passenger '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: String) -> Result<PassengerDetail, GetPassengerError> {
    let passenger = sqlx::query_as::<_, Passenger>(&format!(
        "SELECT {PASSENGER_COLUMNS} FROM passengers WHERE id = $1"
    ))
    .bind(&id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| GetPassengerError::NotFound(id.clone()))?;

    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE passenger_id = $1 ORDER BY booking_date"
    ))
    .bind(&id)
    .fetch_all(&pool)
    .await?;

    Ok(PassengerDetail {
        passenger,
        bookings,
    })
}
