//! Create flight command
//!
//! The candidate runs the full flight ruleset before the insert: required
//! fields, distinct airports, strict time ordering, resolvable references,
//! and aircraft-airline ownership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::super::types::{Flight, DEFAULT_FLIGHT_STATUS, FLIGHT_COLUMNS};
use crate::db::SqlStore;
use crate::features::shared::validation::or_default;
use crate::validator::{self, ConflictReason, FlightCandidate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlightCommand {
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

impl CreateFlightCommand {
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
pub enum CreateFlightError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for CreateFlightError {
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
    command: CreateFlightCommand,
) -> Result<Flight, CreateFlightError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_flight_write(&store, &command.candidate()).await?;

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let status = or_default(command.status.clone(), DEFAULT_FLIGHT_STATUS);

    let flight = sqlx::query_as::<_, Flight>(&format!(
        r#"
        INSERT INTO flights (id, flight_number, departure_airport_id, arrival_airport_id,
                             departure_time, arrival_time, aircraft_id, airline_id, status,
                             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
        RETURNING {FLIGHT_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&command.flight_number)
    .bind(&command.departure_airport_id)
    .bind(&command.arrival_airport_id)
    .bind(command.departure_time)
    .bind(command.arrival_time)
    .bind(&command.aircraft_id)
    .bind(&command.airline_id)
    .bind(&status)
    .bind(now)
    .fetch_one(&pool)
    .await?;

    tracing::info!(
        flight_id = %flight.id,
        flight_number = %flight.flight_number,
        "Flight created"
    );

    Ok(flight)
}
