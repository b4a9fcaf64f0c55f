//! Feature modules implementing the Flightline API
//!
//! Each entity is a vertical slice with its own commands, queries, and
//! routes:
//!
//! - **airlines**: carriers that own aircraft, flights, and crew
//! - **airports**: departure/arrival endpoints referenced by flights
//! - **aircraft**: airframes, optionally owned by an airline
//! - **flights**: scheduled legs; also hosts crew assignment operations
//! - **passengers**: travelers, unique by email
//! - **bookings**: seats sold on a flight
//! - **crew_members**: airline staff assignable to flights
//!
//! Every feature follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions
//! - `types.rs` - The persisted record shape shared across operations
//!
//! Commands run the integrity validator before executing their write; see
//! [`crate::validator`].

pub mod aircraft;
pub mod airlines;
pub mod airports;
pub mod bookings;
pub mod crew_members;
pub mod flights;
pub mod passengers;
pub mod shared;

use axum::Router;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// SQLite connection pool for database operations
    pub db: sqlx::SqlitePool,
}

/// Creates the main API router with all feature routes mounted
///
/// Each feature is mounted under its own path prefix:
/// - `/airlines`
/// - `/airports`
/// - `/aircraft`
/// - `/flights` (including `/flights/:id/crew`)
/// - `/passengers`
/// - `/bookings`
/// - `/crew-members`
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/airlines", airlines::airlines_routes().with_state(state.db.clone()))
        .nest("/airports", airports::airports_routes().with_state(state.db.clone()))
        .nest("/aircraft", aircraft::aircraft_routes().with_state(state.db.clone()))
        .nest("/flights", flights::flights_routes().with_state(state.db.clone()))
        .nest("/passengers", passengers::passengers_routes().with_state(state.db.clone()))
        .nest("/bookings", bookings::bookings_routes().with_state(state.db.clone()))
        .nest("/crew-members", crew_members::crew_members_routes().with_state(state.db.clone()))
}
