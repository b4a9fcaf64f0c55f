//! Create crew member command

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::super::types::{CrewMember, CREW_MEMBER_COLUMNS};
use crate::db::SqlStore;
use crate::validator::{self, ConflictReason, CrewMemberCandidate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCrewMemberCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub airline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i64>,
}

impl CreateCrewMemberCommand {
    fn candidate(&self) -> CrewMemberCandidate<'_> {
        CrewMemberCandidate {
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
            airline_id: self.airline_id.as_deref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateCrewMemberError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for CreateCrewMemberError {
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
    command: CreateCrewMemberCommand,
) -> Result<CrewMember, CreateCrewMemberError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_crew_member_write(&store, &command.candidate()).await?;

    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    let crew_member = sqlx::query_as::<_, CrewMember>(&format!(
        r#"
        INSERT INTO crew_members (id, first_name, last_name, position, airline_id,
                                  license_number, experience_years, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING {CREW_MEMBER_COLUMNS}
        "#
    ))
    .bind(&id)
    .bind(&command.first_name)
    .bind(&command.last_name)
    .bind(&command.position)
    .bind(&command.airline_id)
    .bind(&command.license_number)
    .bind(command.experience_years)
    .bind(now)
    .fetch_one(&pool)
    .await?;

    tracing::info!(crew_member_id = %crew_member.id, "Crew member created");

    Ok(crew_member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::seed_airline;

    fn command(airline_id: Option<String>) -> CreateCrewMemberCommand {
        CreateCrewMemberCommand {
            first_name: Some("Kim".to_string()),
            last_name: Some("Reyes".to_string()),
            position: Some("Captain".to_string()),
            airline_id,
            license_number: Some("ATPL-9921".to_string()),
            experience_years: Some(12),
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_crew_member(pool: SqlitePool) {
        let airline = seed_airline(&pool, "Test Air").await;
        let crew_member = handle(pool.clone(), command(Some(airline.clone()))).await.unwrap();
        assert_eq!(crew_member.airline_id, Some(airline));
        assert_eq!(crew_member.position, Some("Captain".to_string()));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_requires_airline(pool: SqlitePool) {
        let result = handle(pool.clone(), command(None)).await;
        assert!(matches!(
            result,
            Err(CreateCrewMemberError::Rejected(ConflictReason::MissingField("airline_id")))
        ));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_rejects_unknown_airline(pool: SqlitePool) {
        let result = handle(pool.clone(), command(Some("missing".to_string()))).await;
        assert!(matches!(
            result,
            Err(CreateCrewMemberError::Rejected(ConflictReason::UnknownAirline(_)))
        ));
    }
}
