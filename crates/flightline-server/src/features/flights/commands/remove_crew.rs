//! Remove a crew member from a flight

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveCrewCommand {
    pub flight_id: String,
    pub crew_member_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveCrewResponse {
    pub flight_id: String,
    pub crew_member_id: String,
    pub removed: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RemoveCrewError {
    #[error("Crew member '{crew_member_id}' is not assigned to flight '{flight_id}'")]
    NotAssigned {
        flight_id: String,
        crew_member_id: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: RemoveCrewCommand,
) -> Result<RemoveCrewResponse, RemoveCrewError> {
    let result = sqlx::query(
        "DELETE FROM flight_crew WHERE flight_id = $1 AND crew_member_id = $2 RETURNING flight_id",
    )
    .bind(&command.flight_id)
    .bind(&command.crew_member_id)
    .fetch_optional(&pool)
    .await?;

    match result {
        Some(_) => {
            tracing::info!(
                flight_id = %command.flight_id,
                crew_member_id = %command.crew_member_id,
                "Crew member removed from flight"
            );
            Ok(RemoveCrewResponse {
                flight_id: command.flight_id,
                crew_member_id: command.crew_member_id,
                removed: true,
            })
        },
        None => Err(RemoveCrewError::NotAssigned {
            flight_id: command.flight_id,
            crew_member_id: command.crew_member_id,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_aircraft, seed_airline, seed_airport, seed_crew_assignment, seed_crew_member,
        seed_flight,
    };

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_removes_assignment(pool: SqlitePool) {
        let airline = seed_airline(&pool, "Test Air").await;
        let dep = seed_airport(&pool, "Dep Field").await;
        let arr = seed_airport(&pool, "Arr Field").await;
        let aircraft = seed_aircraft(&pool, Some(&airline)).await;
        let flight = seed_flight(&pool, &airline, &dep, &arr, &aircraft).await;
        let crew = seed_crew_member(&pool, &airline).await;
        seed_crew_assignment(&pool, &flight, &crew).await;

        let response = handle(
            pool.clone(),
            RemoveCrewCommand {
                flight_id: flight,
                crew_member_id: crew,
            },
        )
        .await
        .unwrap();
        assert!(response.removed);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_assigned(pool: SqlitePool) {
        let result = handle(
            pool.clone(),
            RemoveCrewCommand {
                flight_id: "f-1".to_string(),
                crew_member_id: "c-1".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(RemoveCrewError::NotAssigned { .. })));
    }
}
