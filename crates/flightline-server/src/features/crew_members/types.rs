//! Persisted crew member record shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CrewMember {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Employing airline. Nullable in the schema (airline removal sets it
    /// null) but required on every write path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const CREW_MEMBER_COLUMNS: &str = "id, first_name, last_name, position, airline_id, \
                                       license_number, experience_years, created_at, updated_at";
