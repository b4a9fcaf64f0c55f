//! Create aircraft command

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::super::types::{Aircraft, AIRCRAFT_COLUMNS};
use crate::db::SqlStore;
use crate::features::shared::validation::normalized;
use crate::validator::{self, require, ConflictReason, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAircraftCommand {
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
pub enum CreateAircraftError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for CreateAircraftError {
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
    command: CreateAircraftCommand,
) -> Result<Aircraft, CreateAircraftError> {
    let model = require("model", command.model.as_deref())?.to_string();

    let airline_id = normalized(command.airline_id.clone());
    let store = SqlStore::new(pool.clone());
    validator::validate_aircraft_airline(&store, airline_id.as_deref()).await?;

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let aircraft = sqlx::query_as::<_, Aircraft>(&format!(
        r#"
        INSERT INTO aircraft (id, registration_number, model, manufacturer, capacity,
                              manufacture_year, airline_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING {AIRCRAFT_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&command.registration_number)
    .bind(&model)
    .bind(&command.manufacturer)
    .bind(command.capacity)
    .bind(command.manufacture_year)
    .bind(&airline_id)
    .bind(now)
    .fetch_one(&pool)
    .await?;

    tracing::info!(aircraft_id = %aircraft.id, "Aircraft created");

    Ok(aircraft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::seed_airline;

    fn command(model: Option<&str>, airline_id: Option<String>) -> CreateAircraftCommand {
        CreateAircraftCommand {
            registration_number: Some("TF-ABC".to_string()),
            model: model.map(String::from),
            manufacturer: Some("Airbus".to_string()),
            capacity: Some(180),
            manufacture_year: Some(2019),
            airline_id,
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_unassigned_aircraft(pool: SqlitePool) {
        let aircraft = handle(pool.clone(), command(Some("A320"), None)).await.unwrap();
        assert_eq!(aircraft.model, "A320");
        assert_eq!(aircraft.airline_id, None);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_owned_aircraft(pool: SqlitePool) {
        let airline = seed_airline(&pool, "Test Air").await;
        let aircraft = handle(pool.clone(), command(Some("A320"), Some(airline.clone())))
            .await
            .unwrap();
        assert_eq!(aircraft.airline_id, Some(airline));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_rejects_unknown_airline(pool: SqlitePool) {
        let result = handle(pool.clone(), command(Some("A320"), Some("missing".to_string()))).await;
        assert!(matches!(
            result,
            Err(CreateAircraftError::Rejected(ConflictReason::UnknownAirline(_)))
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_requires_model(pool: SqlitePool) {
        let result = handle(pool.clone(), command(None, None)).await;
        assert!(matches!(
            result,
            Err(CreateAircraftError::Rejected(ConflictReason::MissingField("model")))
        ));
    }
}
