//! Create airline command

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::super::types::{Airline, AIRLINE_COLUMNS};
use crate::validator::{require, ConflictReason, ValidationError};

/// Command to create a new airline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAirlineCommand {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateAirlineError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for CreateAirlineError {
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
    command: CreateAirlineCommand,
) -> Result<Airline, CreateAirlineError> {
    let name = require("name", command.name.as_deref())?.to_string();

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let airline = sqlx::query_as::<_, Airline>(&format!(
        r#"
        INSERT INTO airlines (id, name, iata_code, country, founded_year, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING {AIRLINE_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&name)
    .bind(&command.iata_code)
    .bind(&command.country)
    .bind(command.founded_year)
    .bind(now)
    .fetch_one(&pool)
    .await?;

    tracing::info!(airline_id = %airline.id, "Airline created");

    Ok(airline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(name: Option<&str>) -> CreateAirlineCommand {
        CreateAirlineCommand {
            name: name.map(String::from),
            iata_code: Some("TA".to_string()),
            country: Some("Iceland".to_string()),
            founded_year: Some(1998),
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_airline(pool: SqlitePool) {
        let result = handle(pool.clone(), command(Some("Test Air"))).await.unwrap();
        assert_eq!(result.name, "Test Air");
        assert_eq!(result.iata_code, Some("TA".to_string()));
        assert!(!result.id.is_empty());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_requires_name(pool: SqlitePool) {
        let result = handle(pool.clone(), command(None)).await;
        assert!(matches!(
            result,
            Err(CreateAirlineError::Rejected(ConflictReason::MissingField("name")))
        ));

        let result = handle(pool.clone(), command(Some("  "))).await;
        assert!(matches!(
            result,
            Err(CreateAirlineError::Rejected(ConflictReason::MissingField("name")))
        ));
    }
}
