//! SQL-backed record store
//!
//! [`SqlStore`] is the production implementation of the validator's
//! [`RecordStore`] lookup seam. Every method is a single parameterized
//! query; none of them write.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::validator::{EntityKind, RecordStore, Relation};

/// Lookup access backed by the shared connection pool
#[derive(Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn id_exists(&self, sql: &str, id: &str) -> Result<bool, sqlx::Error> {
        let row = sqlx::query(sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl RecordStore for SqlStore {
    async fn airline_exists(&self, id: &str) -> Result<bool, sqlx::Error> {
        self.id_exists("SELECT id FROM airlines WHERE id = $1", id).await
    }

    async fn airport_exists(&self, id: &str) -> Result<bool, sqlx::Error> {
        self.id_exists("SELECT id FROM airports WHERE id = $1", id).await
    }

    async fn passenger_exists(&self, id: &str) -> Result<bool, sqlx::Error> {
        self.id_exists("SELECT id FROM passengers WHERE id = $1", id).await
    }

    async fn aircraft_airline(&self, id: &str) -> Result<Option<Option<String>>, sqlx::Error> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT airline_id FROM aircraft WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(airline_id,)| airline_id))
    }

    async fn flight_airline(&self, id: &str) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT airline_id FROM flights WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(airline_id,)| airline_id))
    }

    async fn crew_member_airline(&self, id: &str) -> Result<Option<Option<String>>, sqlx::Error> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT airline_id FROM crew_members WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(airline_id,)| airline_id))
    }

    async fn seat_taken(
        &self,
        flight_id: &str,
        seat_number: &str,
        exclude_booking: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id FROM bookings
            WHERE flight_id = $1 AND seat_number = $2
              AND ($3 IS NULL OR id <> $3)
            LIMIT 1
            "#,
        )
        .bind(flight_id)
        .bind(seat_number)
        .bind(exclude_booking)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    async fn email_taken(
        &self,
        email: &str,
        exclude_passenger: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id FROM passengers
            WHERE email = $1
              AND ($2 IS NULL OR id <> $2)
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(exclude_passenger)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    async fn crew_assigned(
        &self,
        flight_id: &str,
        crew_member_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let row = sqlx::query(
            "SELECT flight_id FROM flight_crew WHERE flight_id = $1 AND crew_member_id = $2",
        )
        .bind(flight_id)
        .bind(crew_member_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    async fn dependent_count(
        &self,
        kind: EntityKind,
        id: &str,
        relation: Relation,
    ) -> Result<i64, sqlx::Error> {
        let sql = match (kind, relation) {
            (EntityKind::Airline, Relation::Aircraft) => {
                "SELECT COUNT(*) FROM aircraft WHERE airline_id = $1"
            },
            (EntityKind::Airline, Relation::Flights) => {
                "SELECT COUNT(*) FROM flights WHERE airline_id = $1"
            },
            (EntityKind::Airline, Relation::CrewMembers) => {
                "SELECT COUNT(*) FROM crew_members WHERE airline_id = $1"
            },
            (EntityKind::Airport, Relation::Departures) => {
                "SELECT COUNT(*) FROM flights WHERE departure_airport_id = $1"
            },
            (EntityKind::Airport, Relation::Arrivals) => {
                "SELECT COUNT(*) FROM flights WHERE arrival_airport_id = $1"
            },
            (EntityKind::Aircraft, Relation::Flights) => {
                "SELECT COUNT(*) FROM flights WHERE aircraft_id = $1"
            },
            (EntityKind::Flight, Relation::Bookings) => {
                "SELECT COUNT(*) FROM bookings WHERE flight_id = $1"
            },
            (EntityKind::Flight, Relation::CrewAssignments) => {
                "SELECT COUNT(*) FROM flight_crew WHERE flight_id = $1"
            },
            (EntityKind::Passenger, Relation::Bookings) => {
                "SELECT COUNT(*) FROM bookings WHERE passenger_id = $1"
            },
            (EntityKind::CrewMember, Relation::CrewAssignments) => {
                "SELECT COUNT(*) FROM flight_crew WHERE crew_member_id = $1"
            },
            // No such relation for this kind.
            _ => return Ok(0),
        };

        sqlx::query_scalar::<_, i64>(sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}
