//! Update passenger command (full-record replace)
//!
//! Email uniqueness excludes the passenger being updated, so re-submitting
//! the current email succeeds.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{Passenger, PASSENGER_COLUMNS};
use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::validator::{self, ConflictReason, PassengerCandidate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePassengerCommand {
    #[serde(skip)]
    pub id: String,
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

impl UpdatePassengerCommand {
    fn candidate(&self) -> PassengerCandidate<'_> {
        PassengerCandidate {
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
            email: self.email.as_deref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpdatePassengerError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Passenger '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for UpdatePassengerError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(passenger_id = %command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdatePassengerCommand,
) -> Result<Passenger, UpdatePassengerError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_passenger_write(&store, &command.candidate(), Some(&command.id)).await?;

    let email = command.email.clone().unwrap_or_default();

    let passenger = sqlx::query_as::<_, Passenger>(&format!(
        r#"
        UPDATE passengers
        SET first_name = $2, last_name = $3, email = $4, phone = $5,
            passport_number = $6, nationality = $7, date_of_birth = $8, updated_at = $9
        WHERE id = $1
        RETURNING {PASSENGER_COLUMNS}
        "#
    ))
    .bind(&command.id)
    .bind(&command.first_name)
    .bind(&command.last_name)
    .bind(&email)
    .bind(&command.phone)
    .bind(&command.passport_number)
    .bind(&command.nationality)
    .bind(command.date_of_birth)
    .bind(Utc::now())
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        map_unique_violation(
            e,
            UpdatePassengerError::Rejected(ConflictReason::DuplicateEmail(email.clone())),
            UpdatePassengerError::Database,
        )
    })?
    .ok_or_else(|| UpdatePassengerError::NotFound(command.id.clone()))?;

    tracing::info!(passenger_id = %passenger.id, "Passenger updated");

    Ok(passenger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::seed_passenger;

    fn command(id: &str, email: &str) -> UpdatePassengerCommand {
        UpdatePassengerCommand {
            id: id.to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Byron".to_string()),
            email: Some(email.to_string()),
            phone: None,
            passport_number: None,
            nationality: None,
            date_of_birth: None,
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_keeps_own_email(pool: SqlitePool) {
        let id = seed_passenger(&pool, "ada@example.com").await;

        let passenger = handle(pool.clone(), command(&id, "ada@example.com")).await.unwrap();
        assert_eq!(passenger.last_name, "Byron");
        assert_eq!(passenger.email, "ada@example.com");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_rejects_email_held_by_other(pool: SqlitePool) {
        seed_passenger(&pool, "ada@example.com").await;
        let other = seed_passenger(&pool, "grace@example.com").await;

        let result = handle(pool.clone(), command(&other, "ada@example.com")).await;
        assert!(matches!(
            result,
            Err(UpdatePassengerError::Rejected(ConflictReason::DuplicateEmail(_)))
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let result = handle(pool.clone(), command("missing", "new@example.com")).await;
        assert!(matches!(result, Err(UpdatePassengerError::NotFound(_))));
    }
}
