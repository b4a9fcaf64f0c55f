//! Get airline by id, with owned child rows embedded

use serde::Serialize;
use sqlx::SqlitePool;

use super::super::types::{Airline, AIRLINE_COLUMNS};
use crate::features::aircraft::types::{Aircraft, AIRCRAFT_COLUMNS};
use crate::features::crew_members::types::{CrewMember, CREW_MEMBER_COLUMNS};
use crate::features::flights::types::{Flight, FLIGHT_COLUMNS};

#[derive(Debug, Serialize)]
pub struct AirlineDetail {
    #[serde(flatten)]
    pub airline: Airline,
    pub aircraft: Vec<Aircraft>,
    pub flights: Vec<Flight>,
    pub crew_members: Vec<CrewMember>,
}

#[derive(Debug, thiserror::Error)]
pub enum GetAirlineError {
    #[error("Airline '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: String) -> Result<AirlineDetail, GetAirlineError> {
    let airline = sqlx::query_as::<_, Airline>(&format!(
        "SELECT {AIRLINE_COLUMNS} FROM airlines WHERE id = $1"
    ))
    .bind(&id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| GetAirlineError::NotFound(id.clone()))?;

    let aircraft = sqlx::query_as::<_, Aircraft>(&format!(
        "SELECT {AIRCRAFT_COLUMNS} FROM aircraft WHERE airline_id = $1 ORDER BY created_at"
    ))
    .bind(&id)
    .fetch_all(&pool)
    .await?;

    let flights = sqlx::query_as::<_, Flight>(&format!(
        "SELECT {FLIGHT_COLUMNS} FROM flights WHERE airline_id = $1 ORDER BY departure_time"
    ))
    .bind(&id)
    .fetch_all(&pool)
    .await?;

    let crew_members = sqlx::query_as::<_, CrewMember>(&format!(
        "SELECT {CREW_MEMBER_COLUMNS} FROM crew_members WHERE airline_id = $1 ORDER BY last_name"
    ))
    .bind(&id)
    .fetch_all(&pool)
    .await?;

    Ok(AirlineDetail {
        airline,
        aircraft,
        flights,
        crew_members,
    })
}
