//! Update crew member command (full-record replace)

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{CrewMember, CREW_MEMBER_COLUMNS};
use crate::db::SqlStore;
use crate::validator::{self, ConflictReason, CrewMemberCandidate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCrewMemberCommand {
    #[serde(skip)]
    pub id: String,
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

impl UpdateCrewMemberCommand {
    fn candidate(&self) -> CrewMemberCandidate<'_> {
        CrewMemberCandidate {
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
            airline_id: self.airline_id.as_deref(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateCrewMemberError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Crew member '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for UpdateCrewMemberError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(crew_member_id = %command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateCrewMemberCommand,
) -> Result<CrewMember, UpdateCrewMemberError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_crew_member_write(&store, &command.candidate()).await?;

    let crew_member = sqlx::query_as::<_, CrewMember>(&format!(
        r#"
        UPDATE crew_members
        SET first_name = $2, last_name = $3, position = $4, airline_id = $5,
            license_number = $6, experience_years = $7, updated_at = $8
        WHERE id = $1
        RETURNING {CREW_MEMBER_COLUMNS}
        "#
    ))
    .bind(&command.id)
    .bind(&command.first_name)
    .bind(&command.last_name)
    .bind(&command.position)
    .bind(&command.airline_id)
    .bind(&command.license_number)
    .bind(command.experience_years)
    .bind(Utc::now())
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| UpdateCrewMemberError::NotFound(command.id.clone()))?;

    tracing::info!(crew_member_id = %crew_member.id, "Crew member updated");

    Ok(crew_member)
}
