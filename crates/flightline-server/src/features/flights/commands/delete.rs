//! Delete flight command
//!
//! Bookings block the delete; crew assignments do not. The junction rows
//! are removed first, then the flight, inside one transaction.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::SqlStore;
use crate::validator::{self, ConflictReason, EntityKind, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFlightCommand {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFlightResponse {
    pub id: String,
    pub deleted: bool,
    /// Crew assignments removed ahead of the flight itself
    pub removed_assignments: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteFlightError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Flight '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationError> for DeleteFlightError {
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
    command: DeleteFlightCommand,
) -> Result<DeleteFlightResponse, DeleteFlightError> {
    let store = SqlStore::new(pool.clone());
    validator::check_deletion(&store, EntityKind::Flight, &command.id).await?;

    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM flight_crew WHERE flight_id = $1")
        .bind(&command.id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let result = sqlx::query("DELETE FROM flights WHERE id = $1 RETURNING id")
        .bind(&command.id)
        .fetch_optional(&mut *tx)
        .await?;

    if result.is_none() {
        tx.rollback().await?;
        return Err(DeleteFlightError::NotFound(command.id));
    }

    tx.commit().await?;

    tracing::info!(
        flight_id = %command.id,
        removed_assignments = removed,
        "Flight deleted"
    );

    Ok(DeleteFlightResponse {
        id: command.id,
        deleted: true,
        removed_assignments: removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_aircraft, seed_airline, seed_airport, seed_booking, seed_crew_assignment,
        seed_crew_member, seed_flight, seed_passenger,
    };
    use crate::validator::Relation;

    struct Stage {
        airline: String,
        flight: String,
    }

    async fn stage(pool: &SqlitePool) -> Stage {
        let airline = seed_airline(pool, "Test Air").await;
        let dep = seed_airport(pool, "Dep Field").await;
        let arr = seed_airport(pool, "Arr Field").await;
        let aircraft = seed_aircraft(pool, Some(&airline)).await;
        let flight = seed_flight(pool, &airline, &dep, &arr, &aircraft).await;
        Stage { airline, flight }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_cascades_crew_assignments(pool: SqlitePool) {
        let stage = stage(&pool).await;
        let crew = seed_crew_member(&pool, &stage.airline).await;
        seed_crew_assignment(&pool, &stage.flight, &crew).await;

        let response = handle(
            pool.clone(),
            DeleteFlightCommand {
                id: stage.flight.clone(),
            },
        )
        .await
        .unwrap();

        assert!(response.deleted);
        assert_eq!(response.removed_assignments, 1);

        let remaining = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM flight_crew")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_blocks_on_bookings(pool: SqlitePool) {
        let stage = stage(&pool).await;
        let passenger = seed_passenger(&pool, "ada@example.com").await;
        seed_booking(&pool, &stage.flight, &passenger, Some("12A")).await;

        let result = handle(pool.clone(), DeleteFlightCommand { id: stage.flight }).await;
        match result {
            Err(DeleteFlightError::Rejected(ConflictReason::HasDependents { counts, kind })) => {
                assert_eq!(kind, EntityKind::Flight);
                assert_eq!(counts, vec![(Relation::Bookings, 1)]);
            },
            other => panic!("expected HasDependents, got {:?}", other),
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let result = handle(
            pool.clone(),
            DeleteFlightCommand {
                id: "missing".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(DeleteFlightError::NotFound(_))));
    }
}
