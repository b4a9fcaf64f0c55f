//! Update airline command
//!
//! Full-record replace: optional fields omitted from the payload are
//! cleared, not preserved.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Airline, AIRLINE_COLUMNS};
use crate::validator::{require, ConflictReason, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAirlineCommand {
    /// Taken from the request path, not the payload
    #[serde(skip)]
    pub id: String,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateAirlineError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Airline '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for UpdateAirlineError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(airline_id = %command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateAirlineCommand,
) -> Result<Airline, UpdateAirlineError> {
    let name = require("name", command.name.as_deref())?.to_string();

    let airline = sqlx::query_as::<_, Airline>(&format!(
        r#"
        UPDATE airlines
        SET name = $2, iata_code = $3, country = $4, founded_year = $5, updated_at = $6
        WHERE id = $1
        RETURNING {AIRLINE_COLUMNS}
        "#
    ))
    .bind(&command.id)
    .bind(&name)
    .bind(&command.iata_code)
    .bind(&command.country)
    .bind(command.founded_year)
    .bind(Utc::now())
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| UpdateAirlineError::NotFound(command.id.clone()))?;

    tracing::info!(airline_id = %airline.id, "Airline updated");

    Ok(airline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::seed_airline;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_replaces_record(pool: SqlitePool) {
        let id = seed_airline(&pool, "Old Name").await;

        let command = UpdateAirlineCommand {
            id: id.clone(),
            name: Some("New Name".to_string()),
            iata_code: None,
            country: Some("Norway".to_string()),
            founded_year: None,
        };

        let airline = handle(pool.clone(), command).await.unwrap();
        assert_eq!(airline.name, "New Name");
        assert_eq!(airline.country, Some("Norway".to_string()));
        // Omitted optional fields are cleared by the full replace.
        assert_eq!(airline.iata_code, None);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let command = UpdateAirlineCommand {
            id: "missing".to_string(),
            name: Some("Name".to_string()),
            iata_code: None,
            country: None,
            founded_year: None,
        };

        let result = handle(pool.clone(), command).await;
        assert!(matches!(result, Err(UpdateAirlineError::NotFound(_))));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_requires_name(pool: SqlitePool) {
        let id = seed_airline(&pool, "Keep Air").await;

        let command = UpdateAirlineCommand {
            id,
            name: None,
            iata_code: None,
            country: None,
            founded_year: None,
        };

        let result = handle(pool.clone(), command).await;
        assert!(matches!(
            result,
            Err(UpdateAirlineError::Rejected(ConflictReason::MissingField("name")))
        ));
    }
}
