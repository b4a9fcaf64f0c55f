//! Update flight command (full-record replace)
//!
//! An update candidate passes the same ruleset as a create.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Flight, DEFAULT_FLIGHT_STATUS, FLIGHT_COLUMNS};
use crate::db::SqlStore;
use crate::features::shared::validation::or_default;
use crate::validator::{self, ConflictReason, FlightCandidate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFlightCommand {
    #[serde(skip)]
    pub id: String,
    pub flight_number: Option<String>,
    pub departure_airport_id: Option<String>,
    pub arrival_airport_id: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub aircraft_id: Option<String>,
    pub airline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateFlightCommand {
    fn candidate(&self) -> FlightCandidate<'_> {
        FlightCandidate {
            flight_number: self.flight_number.as_deref(),
            departure_airport_id: self.departure_airport_id.as_deref(),
            arrival_airport_id: self.arrival_airport_id.as_deref(),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            aircraft_id: self.aircraft_id.as_deref(),
            airline_id: self.airline_id.as_deref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateFlightError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Flight '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for UpdateFlightError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(flight_id = %command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateFlightCommand,
) -> Result<Flight, UpdateFlightError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_flight_write(&store, &command.candidate()).await?;

    let status = or_default(command.status.clone(), DEFAULT_FLIGHT_STATUS);

    let flight = sqlx::query_as::<_, Flight>(&format!(
        r#"
        UPDATE flights
        SET flight_number = $2, departure_airport_id = $3, arrival_airport_id = $4,
            departure_time = $5, arrival_time = $6, aircraft_id = $7, airline_id = $8,
            status = $9, updated_at = $10
        WHERE id = $1
        RETURNING {FLIGHT_COLUMNS}
        "#
    ))
    .bind(&command.id)
    .bind(&command.flight_number)
    .bind(&command.departure_airport_id)
    .bind(&command.arrival_airport_id)
    .bind(command.departure_time)
    .bind(command.arrival_time)
    .bind(&command.aircraft_id)
    .bind(&command.airline_id)
    .bind(&status)
    .bind(Utc::now())
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| UpdateFlightError::NotFound(command.id.clone()))?;

    tracing::info!(flight_id = %flight.id, "Flight updated");

    Ok(flight)
}
