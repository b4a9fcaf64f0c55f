//! Update aircraft command (full-record replace)

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Aircraft, AIRCRAFT_COLUMNS};
use crate::db::SqlStore;
use crate::features::shared::validation::normalized;
use crate::validator::{self, require, ConflictReason, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAircraftCommand {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateAircraftError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Aircraft '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for UpdateAircraftError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(aircraft_id = %command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateAircraftCommand,
) -> Result<Aircraft, UpdateAircraftError> {
    let model = require("model", command.model.as_deref())?.to_string();

    let airline_id = normalized(command.airline_id.clone());
    let store = SqlStore::new(pool.clone());
    validator::validate_aircraft_airline(&store, airline_id.as_deref()).await?;

    let aircraft = sqlx::query_as::<_, Aircraft>(&format!(
        r#"
        UPDATE aircraft
        SET registration_number = $2, model = $3, manufacturer = $4, capacity = $5,
            manufacture_year = $6, airline_id = $7, updated_at = $8
        WHERE id = $1
        RETURNING {AIRCRAFT_COLUMNS}
        "#
    ))
    .bind(&command.id)
    .bind(&command.registration_number)
    .bind(&model)
    .bind(&command.manufacturer)
    .bind(command.capacity)
    .bind(command.manufacture_year)
    .bind(&airline_id)
    .bind(Utc::now())
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| UpdateAircraftError::NotFound(command.id.clone()))?;

    tracing::info!(aircraft_id = %aircraft.id, "Aircraft updated");

    Ok(aircraft)
}
