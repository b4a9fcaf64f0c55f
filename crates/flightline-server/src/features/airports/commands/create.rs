//! Create airport command

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::super::types::{Airport, AIRPORT_COLUMNS};
use crate::validator::{require, ConflictReason, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAirportCommand {
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
pub enum CreateAirportError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for CreateAirportError {
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
    command: CreateAirportCommand,
) -> Result<Airport, CreateAirportError> {
    let name = require("name", command.name.as_deref())?.to_string();

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let airport = sqlx::query_as::<_, Airport>(&format!(
        r#"
        INSERT INTO airports (id, name, iata_code, city, country, latitude, longitude,
                              created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING {AIRPORT_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&name)
    .bind(&command.iata_code)
    .bind(&command.city)
    .bind(&command.country)
    .bind(command.latitude)
    .bind(command.longitude)
    .bind(now)
    .fetch_one(&pool)
    .await?;

    tracing::info!(airport_id = %airport.id, "Airport created");

    Ok(airport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_airport(pool: SqlitePool) {
        let command = CreateAirportCommand {
            name: Some("Keflavik".to_string()),
            iata_code: Some("KEF".to_string()),
            city: Some("Reykjavik".to_string()),
            country: Some("Iceland".to_string()),
            latitude: Some(63.985),
            longitude: Some(-22.605),
        };

        let airport = handle(pool.clone(), command).await.unwrap();
        assert_eq!(airport.name, "Keflavik");
        assert_eq!(airport.latitude, Some(63.985));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_requires_name(pool: SqlitePool) {
        let command = CreateAirportCommand {
            name: None,
            iata_code: None,
            city: None,
            country: None,
            latitude: None,
            longitude: None,
        };

        let result = handle(pool.clone(), command).await;
        assert!(matches!(
            result,
            Err(CreateAirportError::Rejected(ConflictReason::MissingField("name")))
        ));
    }
}
