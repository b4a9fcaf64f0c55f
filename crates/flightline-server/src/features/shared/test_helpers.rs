//! Seed helpers for handler tests
//!
//! Raw inserts that bypass the API layer so individual handler tests can
//! stage exactly the state they need.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Fixed instant helper: `hour(9)` is 09:00 UTC on a reference day.
pub fn hour(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, h, 0, 0).unwrap()
}

pub async fn seed_airline(pool: &SqlitePool, name: &str) -> String {
    let id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO airlines (id, name, created_at, updated_at) VALUES ($1, $2, $3, $3)")
        .bind(&id)
        .bind(name)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn seed_airport(pool: &SqlitePool, name: &str) -> String {
    let id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO airports (id, name, created_at, updated_at) VALUES ($1, $2, $3, $3)")
        .bind(&id)
        .bind(name)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn seed_aircraft(pool: &SqlitePool, airline_id: Option<&str>) -> String {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO aircraft (id, model, airline_id, created_at, updated_at)
        VALUES ($1, 'A320', $2, $3, $3)
        "#,
    )
    .bind(&id)
    .bind(airline_id)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_flight(
    pool: &SqlitePool,
    airline_id: &str,
    departure_airport_id: &str,
    arrival_airport_id: &str,
    aircraft_id: &str,
) -> String {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO flights (id, flight_number, departure_airport_id, arrival_airport_id,
                             departure_time, arrival_time, aircraft_id, airline_id, status,
                             created_at, updated_at)
        VALUES ($1, 'FL100', $2, $3, $4, $5, $6, $7, 'Scheduled', $8, $8)
        "#,
    )
    .bind(&id)
    .bind(departure_airport_id)
    .bind(arrival_airport_id)
    .bind(hour(9))
    .bind(hour(11))
    .bind(aircraft_id)
    .bind(airline_id)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_passenger(pool: &SqlitePool, email: &str) -> String {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO passengers (id, first_name, last_name, email, created_at, updated_at)
        VALUES ($1, 'Ada', 'Lovelace', $2, $3, $3)
        "#,
    )
    .bind(&id)
    .bind(email)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_crew_member(pool: &SqlitePool, airline_id: &str) -> String {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO crew_members (id, first_name, last_name, position, airline_id,
                                  created_at, updated_at)
        VALUES ($1, 'Kim', 'Reyes', 'Captain', $2, $3, $3)
        "#,
    )
    .bind(&id)
    .bind(airline_id)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_booking(
    pool: &SqlitePool,
    flight_id: &str,
    passenger_id: &str,
    seat_number: Option<&str>,
) -> String {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO bookings (id, flight_id, passenger_id, booking_date, seat_number,
                              booking_status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, 'Confirmed', $4, $4)
        "#,
    )
    .bind(&id)
    .bind(flight_id)
    .bind(passenger_id)
    .bind(Utc::now())
    .bind(seat_number)
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn seed_crew_assignment(pool: &SqlitePool, flight_id: &str, crew_member_id: &str) {
    sqlx::query(
        r#"
        INSERT INTO flight_crew (flight_id, crew_member_id, role, created_at)
        VALUES ($1, $2, 'Pilot', $3)
        "#,
    )
    .bind(flight_id)
    .bind(crew_member_id)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
}
