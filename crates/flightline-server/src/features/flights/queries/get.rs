//! Get flight by id, with bookings and crew assignments embedded

use serde::Serialize;
use sqlx::SqlitePool;

use super::super::types::{CrewAssignment, Flight, FLIGHT_COLUMNS};
use crate::features::bookings::types::{Booking, BOOKING_COLUMNS};

#[derive(Debug, Serialize)]
pub struct FlightDetail {
    #[serde(flatten)]
    pub flight: Flight,
    pub bookings: Vec<Booking>,
    pub crew: Vec<CrewAssignment>,
}

#[derive(Debug, thiserror::Error)]
pub enum GetFlightError {
    #[error("Flight '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: String) -> Result<FlightDetail, GetFlightError> {
    let flight = sqlx::query_as::<_, Flight>(&format!(
        "SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = $1"
    ))
    .bind(&id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| GetFlightError::NotFound(id.clone()))?;

    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE flight_id = $1 ORDER BY booking_date"
    ))
    .bind(&id)
    .fetch_all(&pool)
    .await?;

    let crew = sqlx::query_as::<_, CrewAssignment>(
        r#"
        SELECT fc.crew_member_id, cm.first_name, cm.last_name, cm.position, fc.role
        FROM flight_crew fc
        JOIN crew_members cm ON cm.id = fc.crew_member_id
        WHERE fc.flight_id = $1
        ORDER BY cm.last_name, cm.first_name
        "#,
    )
    .bind(&id)
    .fetch_all(&pool)
    .await?;

    Ok(FlightDetail {
        flight,
        bookings,
        crew,
    })
}
