//! Persisted flight record shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status applied when a candidate leaves it unset
pub const DEFAULT_FLIGHT_STATUS: &str = "Scheduled";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Flight {
    pub id: String,
    pub flight_number: String,
    pub departure_airport_id: String,
    pub arrival_airport_id: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub aircraft_id: String,
    pub airline_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const FLIGHT_COLUMNS: &str = "id, flight_number, departure_airport_id, arrival_airport_id, \
                                  departure_time, arrival_time, aircraft_id, airline_id, status, \
                                  created_at, updated_at";

/// One crew member assigned to a flight, as embedded in flight details
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CrewAssignment {
    pub crew_member_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
