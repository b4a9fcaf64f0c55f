//! Get crew member by id, with their flight assignments embedded

use serde::Serialize;
use sqlx::SqlitePool;

use super::super::types::{CrewMember, CREW_MEMBER_COLUMNS};

/// One row of the member's flight roster
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RosterEntry {
    pub flight_id: String,
    pub flight_number: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CrewMemberDetail {
    #[serde(flatten)]
    pub crew_member: CrewMember,
    pub assignments: Vec<RosterEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum GetCrewMemberError {
    #[error("Crew member '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: String) -> Result<CrewMemberDetail, GetCrewMemberError> {
    let crew_member = sqlx::query_as::<_, CrewMember>(&format!(
        "SELECT {CREW_MEMBER_COLUMNS} FROM crew_members WHERE id = $1"
    ))
    .bind(&id)
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| GetCrewMemberError::NotFound(id.clone()))?;

    let assignments = sqlx::query_as::<_, RosterEntry>(
        r#"
        SELECT fc.flight_id, f.flight_number, f.status, fc.role
        FROM flight_crew fc
        JOIN flights f ON f.id = fc.flight_id
        WHERE fc.crew_member_id = $1
        ORDER BY f.departure_time
        "#,
    )
    .bind(&id)
    .fetch_all(&pool)
    .await?;

    Ok(CrewMemberDetail {
        crew_member,
        assignments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{
        seed_aircraft, seed_airline, seed_airport, seed_crew_assignment, seed_crew_member,
        seed_flight,
    };

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_embeds_roster(pool: SqlitePool) {
        let airline = seed_airline(&pool, "Test Air").await;
        let dep = seed_airport(&pool, "Dep Field").await;
        let arr = seed_airport(&pool, "Arr Field").await;
        let aircraft = seed_aircraft(&pool, Some(&airline)).await;
        let flight = seed_flight(&pool, &airline, &dep, &arr, &aircraft).await;
        let crew = seed_crew_member(&pool, &airline).await;
        seed_crew_assignment(&pool, &flight, &crew).await;

        let detail = handle(pool.clone(), crew.clone()).await.unwrap();
        assert_eq!(detail.crew_member.id, crew);
        assert_eq!(detail.assignments.len(), 1);
        assert_eq!(detail.assignments[0].flight_id, flight);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_not_found(pool: SqlitePool) {
        let result = handle(pool.clone(), "missing".to_string()).await;
        assert!(matches!(result, Err(GetCrewMemberError::NotFound(_))));
    }
}
