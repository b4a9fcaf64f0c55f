//! Persisted aircraft record shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Aircraft {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_year: Option<i64>,
    /// Owning airline; `None` for an unassigned airframe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const AIRCRAFT_COLUMNS: &str = "id, registration_number, model, manufacturer, capacity, \
                                    manufacture_year, airline_id, created_at, updated_at";
