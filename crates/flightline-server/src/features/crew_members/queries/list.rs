//! List crew members with pagination, optionally filtered by airline

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::super::types::{CrewMember, CREW_MEMBER_COLUMNS};
use crate::features::shared::pagination::{Paginated, PaginationParams};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListCrewMembersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListCrewMembersError {
    #[error("{0}")]
    InvalidPagination(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListCrewMembersQuery,
) -> Result<Paginated<CrewMember>, ListCrewMembersError> {
    let params = PaginationParams::new(query.page, query.per_page);
    params.validate().map_err(ListCrewMembersError::InvalidPagination)?;

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM crew_members WHERE ($1 IS NULL OR airline_id = $1)",
    )
    .bind(&query.airline_id)
    .fetch_one(&pool)
    .await?;

    let items = sqlx::query_as::<_, CrewMember>(&format!(
        r#"
        SELECT {CREW_MEMBER_COLUMNS} FROM crew_members
        WHERE ($1 IS NULL OR airline_id = $1)
        ORDER BY last_name, first_name
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(&query.airline_id)
    .bind(params.per_page())
    .bind(params.offset())
    .fetch_all(&pool)
    .await?;

    Ok(Paginated::from_items(items, &params, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{seed_airline, seed_crew_member};

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_filters_by_airline(pool: SqlitePool) {
        let airline_a = seed_airline(&pool, "Air A").await;
        let airline_b = seed_airline(&pool, "Air B").await;
        seed_crew_member(&pool, &airline_a).await;
        seed_crew_member(&pool, &airline_b).await;

        let all = handle(pool.clone(), ListCrewMembersQuery::default()).await.unwrap();
        assert_eq!(all.items.len(), 2);

        let filtered = handle(
            pool.clone(),
            ListCrewMembersQuery {
                airline_id: Some(airline_a.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.items[0].airline_id, Some(airline_a));
    }
}
