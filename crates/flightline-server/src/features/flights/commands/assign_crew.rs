//! Assign a crew member to a flight
//!
//! Both sides must exist, the member must belong to the flight's airline,
//! and the pair must not already be assigned. The composite primary key on
//! `flight_crew` is the arbiter if two assignments race.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::validation::normalized;
use crate::validator::{self, ConflictReason, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignCrewCommand {
    /// Taken from the request path
    #[serde(skip)]
    pub flight_id: String,
    pub crew_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignCrewResponse {
    pub flight_id: String,
    pub crew_member_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum AssignCrewError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for AssignCrewError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool, command), fields(flight_id = %command.flight_id))]
pub async fn handle(
    pool: SqlitePool,
    command: AssignCrewCommand,
) -> Result<AssignCrewResponse, AssignCrewError> {
    let store = SqlStore::new(pool.clone());
    validator::validate_crew_assignment(
        &store,
        Some(&command.flight_id),
        command.crew_member_id.as_deref(),
    )
    .await?;

    let crew_member_id = command.crew_member_id.clone().unwrap_or_default();
    let role = normalized(command.role.clone());
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO flight_crew (flight_id, crew_member_id, role, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(&command.flight_id)
    .bind(&crew_member_id)
    .bind(&role)
    .bind(now)
    .execute(&pool)
    .await
    .map_err(|e| {
        map_unique_violation(
            e,
            AssignCrewError::Rejected(ConflictReason::DuplicateAssignment {
                flight_id: command.flight_id.clone(),
                crew_member_id: crew_member_id.clone(),
            }),
            AssignCrewError::Database,
        )
    })?;

    tracing::info!(
        flight_id = %command.flight_id,
        crew_member_id = %crew_member_id,
        "Crew member assigned to flight"
    );

    Ok(AssignCrewResponse {
        flight_id: command.flight_id,
        crew_member_id,
        role,
        assigned_at: now,
    })
}
