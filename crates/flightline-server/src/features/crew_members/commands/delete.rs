//! Delete crew member command
//!
//! Junction rows in `flight_crew` live and die with the crew member: they
//! are removed first, then the member itself. Nothing blocks this delete.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCrewMemberCommand {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCrewMemberResponse {
    pub id: String,
    pub deleted: bool,
    /// Flight assignments removed along with the member
    pub removed_assignments: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteCrewMemberError {
    #[error("Crew member '{0}' not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: DeleteCrewMemberCommand,
) -> Result<DeleteCrewMemberResponse, DeleteCrewMemberError> {
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM flight_crew WHERE crew_member_id = $1")
        .bind(&command.id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let result = sqlx::query("DELETE FROM crew_members WHERE id = $1 RETURNING id")
        .bind(&command.id)
        .fetch_optional(&mut *tx)
        .await?;

    if result.is_none() {
        tx.rollback().await?;
        return Err(DeleteCrewMemberError::NotFound(command.id));
    }

    tx.commit().await?;

    tracing::info!(
        crew_member_id = %command.id,
        removed_assignments = removed,
        "Crew member deleted"
    );

    Ok(DeleteCrewMemberResponse {
        id: command.id,
        deleted: true,
        removed_assignments: removed,
    })
}
