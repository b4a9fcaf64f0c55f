//! Delete aircraft command
//!
//! Blocked while any flight still references the airframe.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_foreign_key_violation;
use crate::validator::{self, ConflictReason, EntityKind, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAircraftCommand {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAircraftResponse {
    pub id: String,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteAircraftError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Aircraft '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for DeleteAircraftError {
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
    command: DeleteAircraftCommand,
) -> Result<DeleteAircraftResponse, DeleteAircraftError> {
    let store = SqlStore::new(pool.clone());
    validator::check_deletion(&store, EntityKind::Aircraft, &command.id).await?;

    let result = sqlx::query("DELETE FROM aircraft WHERE id = $1 RETURNING id")
        .bind(&command.id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(
                e,
                DeleteAircraftError::Rejected(ConflictReason::HasDependents {
                    kind: EntityKind::Aircraft,
                    counts: vec![],
                }),
                DeleteAircraftError::Database,
            )
        })?;

    match result {
        Some(_) => {
            tracing::info!(aircraft_id = %command.id, "Aircraft deleted");
            Ok(DeleteAircraftResponse {
                id: command.id,
                deleted: true,
            })
        },
        None => Err(DeleteAircraftError::NotFound(command.id)),
    }
}
