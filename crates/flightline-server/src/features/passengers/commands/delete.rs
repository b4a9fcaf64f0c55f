//! Delete passenger command
//!
//! Blocked while any booking still references the passenger.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_foreign_key_violation;
use crate::validator::{self, ConflictReason, EntityKind, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePassengerCommand {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePassengerResponse {
    pub id: String,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePassengerError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Passenger '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for DeletePassengerError {
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
    command: DeletePassengerCommand,
) -> Result<DeletePassengerResponse, DeletePassengerError> {
    let store = SqlStore::new(pool.clone());
    validator::check_deletion(&store, EntityKind::Passenger, &command.id).await?;

    let result = sqlx::query("DELETE FROM passengers WHERE id = $1 RETURNING id")
        .bind(&command.id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(
                e,
                DeletePassengerError::Rejected(ConflictReason::HasDependents {
                    kind: EntityKind::Passenger,
                    counts: vec![],
                }),
                DeletePassengerError::Database,
            )
        })?;

    match result {
        Some(_) => {
            tracing::info!(passenger_id = %command.id, "Passenger deleted");
            Ok(DeletePassengerResponse {
                id: command.id,
                deleted: true,
            })
        },
        None => Err(DeletePassengerError::NotFound(command.id)),
    }
}
