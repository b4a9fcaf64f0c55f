//! Create passenger command
//!
//! The email pre-check gives a friendly rejection; the UNIQUE constraint on
//! `passengers.email` is the arbiter if two creates race, and its violation
//! is mapped back to the same conflict.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::super::types::{Passenger, PASSENGER_COLUMNS};
use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::validator::{self, ConflictReason, PassengerCandidate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePassengerCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl CreatePassengerCommand {
    fn candidate(&self) -> PassengerCandidate<'_> {
        PassengerCandidate {
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
            email: self.email.as_deref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePassengerError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for CreatePassengerError {
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
    command: CreatePassengerCommand,
) -> Result<Passenger, CreatePassengerError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_passenger_write(&store, &command.candidate(), None).await?;

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let email = command.email.clone().unwrap_or_default();

    let passenger = sqlx::query_as::<_, Passenger>(&format!(
        r#"
        INSERT INTO passengers (id, first_name, last_name, email, phone, passport_number,
                                nationality, date_of_birth, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        RETURNING {PASSENGER_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&command.first_name)
    .bind(&command.last_name)
    .bind(&email)
    .bind(&command.phone)
    .bind(&command.passport_number)
    .bind(&command.nationality)
    .bind(command.date_of_birth)
    .bind(now)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        map_unique_violation(
            e,
            CreatePassengerError::Rejected(ConflictReason::DuplicateEmail(email.clone())),
            CreatePassengerError::Database,
        )
    })?;

    tracing::info!(passenger_id = %passenger.id, "Passenger created");

    Ok(passenger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(email: Option<&str>) -> CreatePassengerCommand {
        CreatePassengerCommand {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: email.map(String::from),
            phone: None,
            passport_number: Some("X123456".to_string()),
            nationality: Some("British".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10),
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_passenger(pool: SqlitePool) {
        let passenger = handle(pool.clone(), command(Some("ada@example.com")))
            .await
            .unwrap();
        assert_eq!(passenger.email, "ada@example.com");
        assert_eq!(passenger.first_name, "Ada");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_rejects_duplicate_email(pool: SqlitePool) {
        handle(pool.clone(), command(Some("ada@example.com")))
            .await
            .unwrap();

        let result = handle(pool.clone(), command(Some("ada@example.com"))).await;
        assert!(matches!(
            result,
            Err(CreatePassengerError::Rejected(ConflictReason::DuplicateEmail(_)))
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_requires_email(pool: SqlitePool) {
        let result = handle(pool.clone(), command(None)).await;
        assert!(matches!(
            result,
            Err(CreatePassengerError::Rejected(ConflictReason::MissingField("email")))
        ));
    }
}
