//! Update airport command (full-record replace)

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Airport, AIRPORT_COLUMNS};
use crate::validator::{require, ConflictReason, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAirportCommand {
    #[serde(skip)]
    pub id: String,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateAirportError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Airport '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for UpdateAirportError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(airport_id = %command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateAirportCommand,
) -> Result<Airport, UpdateAirportError> {
    let name = require("name", command.name.as_deref())?.to_string();

    let airport = sqlx::query_as::<_, Airport>(&format!(
        r#"
        UPDATE airports
        SET name = $2, iata_code = $3, city = $4, country = $5,
            latitude = $6, longitude = $7, updated_at = $8
        WHERE id = $1
        RETURNING {AIRPORT_COLUMNS}
        "#
    ))
    .bind(&command.id)
    .bind(&name)
    .bind(&command.iata_code)
    .bind(&command.city)
    .bind(&command.country)
    .bind(command.latitude)
    .bind(command.longitude)
    .bind(Utc::now())
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| UpdateAirportError::NotFound(command.id.clone()))?;

    tracing::info!(airport_id = %airport.id, "Airport updated");

    Ok(airport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::seed_airport;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_replaces_record(pool: SqlitePool) {
        let id = seed_airport(&pool, "Old Field").await;

        let command = UpdateAirportCommand {
            id: id.clone(),
            name: Some("New Field".to_string()),
            iata_code: Some("NWF".to_string()),
            city: None,
            country: None,
            latitude: None,
            longitude: None,
        };

        let airport = handle(pool.clone(), command).await.unwrap();
        assert_eq!(airport.name, "New Field");
        assert_eq!(airport.iata_code, Some("NWF".to_string()));
        assert_eq!(airport.city, None);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let command = UpdateAirportCommand {
            id: "missing".to_string(),
            name: Some("Name".to_string()),
            iata_code: None,
            city: None,
            country: None,
            latitude: None,
            longitude: None,
        };

        let result = handle(pool.clone(), command).await;
        assert!(matches!(result, Err(UpdateAirportError::NotFound(_))));
    }
}
