//! Delete airline command
//!
//! Deletion is blocked while any aircraft, flight, or crew member still
//! references the airline; the rejection reports the exact counts.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::SqlStore;
use crate::features::shared::error_helpers::map_foreign_key_violation;
use crate::validator::{self, ConflictReason, EntityKind, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAirlineCommand {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAirlineResponse {
    pub id: String,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteAirlineError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Airline '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for DeleteAirlineError {
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
    command: DeleteAirlineCommand,
) -> Result<DeleteAirlineResponse, DeleteAirlineError> {
    let store = SqlStore::new(pool.clone());
    validator::check_deletion(&store, EntityKind::Airline, &command.id).await?;

    let result = sqlx::query("DELETE FROM airlines WHERE id = $1 RETURNING id")
        .bind(&command.id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            // Backstop: a dependent row inserted after the guard ran.
            map_foreign_key_violation(
                e,
                DeleteAirlineError::Rejected(ConflictReason::HasDependents {
                    kind: EntityKind::Airline,
                    counts: vec![],
                }),
                DeleteAirlineError::Database,
            )
        })?;

    match result {
        Some(_) => {
            tracing::info!(airline_id = %command.id, "Airline deleted");
            Ok(DeleteAirlineResponse {
                id: command.id,
                deleted: true,
            })
        },
        None => Err(DeleteAirlineError::NotFound(command.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{seed_aircraft, seed_airline};
    use crate::validator::Relation;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_deletes_unreferenced_airline(pool: SqlitePool) {
        let id = seed_airline(&pool, "Test Air").await;

        let response = handle(pool.clone(), DeleteAirlineCommand { id: id.clone() })
            .await
            .unwrap();
        assert!(response.deleted);
        assert_eq!(response.id, id);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_blocks_on_dependents(pool: SqlitePool) {
        let id = seed_airline(&pool, "Test Air").await;
        seed_aircraft(&pool, Some(&id)).await;

        let result = handle(pool.clone(), DeleteAirlineCommand { id }).await;
        match result {
            Err(DeleteAirlineError::Rejected(ConflictReason::HasDependents { counts, .. })) => {
                assert!(counts.contains(&(Relation::Aircraft, 1)));
            },
            other => panic!("expected HasDependents, got {:?}", other),
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let result = handle(
            pool.clone(),
            DeleteAirlineCommand {
                id: "missing".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(DeleteAirlineError::NotFound(_))));
    }
}
