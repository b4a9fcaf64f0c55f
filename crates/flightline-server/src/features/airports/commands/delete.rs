//! Delete airport command
//!
//! Blocked while any flight still departs from or arrives at the airport.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_foreign_key_violation;
use crate::validator::{self, ConflictReason, EntityKind, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAirportCommand {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAirportResponse {
    pub id: String,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteAirportError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Airport '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for DeleteAirportError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Rejected(reason) => Self::Rejected(reason),
            ValidationError::Infrastructure(e) => Self::Database(e),
        }
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: DeleteAirportCommand,
) -> Result<DeleteAirportResponse, DeleteAirportError> {
    let store = SqlStore::new(pool.clone());
    validator::check_deletion(&store, EntityKind::Airport, &command.id).await?;

    let result = sqlx::query("DELETE FROM airports WHERE id = $1 RETURNING id")
        .bind(&command.id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(
                e,
                DeleteAirportError::Rejected(ConflictReason::HasDependents {
                    kind: EntityKind::Airport,
                    counts: vec![],
                }),
                DeleteAirportError::Database,
            )
        })?;

    match result {
        Some(_) => {
            tracing::info!(airport_id = %command.id, "Airport deleted");
            Ok(DeleteAirportResponse {
                id: command.id,
                deleted: true,
            })
        },
        None => Err(DeleteAirportError::NotFound(command.id)),
    }
}
