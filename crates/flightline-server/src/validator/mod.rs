//! Integrity validator
//!
//! Every mutating operation runs through this module before it touches the
//! database. The validator is stateless and performs no writes: given a
//! candidate record and lookup access to current state (the [`RecordStore`]
//! trait), it either admits the write or returns the first violated rule as
//! a tagged [`ConflictReason`]. Infrastructure failures surface separately
//! so callers can distinguish a rejected write from a broken store.
//!
//! Pre-checks against racy invariants (seat, email, crew assignment
//! uniqueness) are best-effort fast rejects; the storage layer's UNIQUE
//! constraints remain the arbiter, and a lost race is mapped back to the
//! same `ConflictReason` by the command handlers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod rules;

pub use rules::{
    deletion_rule, validate_deletion, DeletionRule, DependentCounts, EntityKind, Relation,
    DELETION_RULES,
};

/// Why a proposed write was rejected
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConflictReason {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Departure and arrival airport must differ")]
    SameAirport,

    #[error("Departure time must be before arrival time")]
    InvalidTimeOrder,

    #[error("Airport '{0}' not found")]
    UnknownAirport(String),

    #[error("Aircraft '{0}' not found")]
    UnknownAircraft(String),

    #[error("Airline '{0}' not found")]
    UnknownAirline(String),

    #[error("Flight '{0}' not found")]
    UnknownFlight(String),

    #[error("Passenger '{0}' not found")]
    UnknownPassenger(String),

    #[error("Crew member '{0}' not found")]
    UnknownCrewMember(String),

    #[error("Aircraft '{0}' does not belong to the flight's airline")]
    AircraftAirlineMismatch(String),

    #[error("Crew member '{0}' does not belong to the flight's airline")]
    AirlineMismatch(String),

    #[error("Seat '{seat_number}' on flight '{flight_id}' is already booked")]
    SeatTaken {
        flight_id: String,
        seat_number: String,
    },

    #[error("Crew member '{crew_member_id}' is already assigned to flight '{flight_id}'")]
    DuplicateAssignment {
        flight_id: String,
        crew_member_id: String,
    },

    #[error("A passenger with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Cannot delete {kind}: dependent records exist")]
    HasDependents {
        kind: EntityKind,
        counts: DependentCounts,
    },
}

/// Coarse classification used for HTTP status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonClass {
    /// Missing or malformed input
    Validation,
    /// A business invariant would be violated
    Conflict,
    /// A referenced identifier does not resolve
    NotFound,
}

impl ConflictReason {
    pub fn class(&self) -> ReasonClass {
        match self {
            ConflictReason::MissingField(_) => ReasonClass::Validation,
            ConflictReason::UnknownAirport(_)
            | ConflictReason::UnknownAircraft(_)
            | ConflictReason::UnknownAirline(_)
            | ConflictReason::UnknownFlight(_)
            | ConflictReason::UnknownPassenger(_)
            | ConflictReason::UnknownCrewMember(_) => ReasonClass::NotFound,
            _ => ReasonClass::Conflict,
        }
    }
}

/// Validator failure: either a rejected candidate or a broken store
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Rejected(#[from] ConflictReason),

    #[error("Data access failed: {0}")]
    Infrastructure(#[from] sqlx::Error),
}

/// Lookup access to current persisted state.
///
/// The validator never issues queries itself; it consumes this seam. The
/// production implementation is `db::SqlStore`; tests substitute an
/// in-memory map.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn airline_exists(&self, id: &str) -> Result<bool, sqlx::Error>;

    async fn airport_exists(&self, id: &str) -> Result<bool, sqlx::Error>;

    async fn passenger_exists(&self, id: &str) -> Result<bool, sqlx::Error>;

    /// `None` when the aircraft does not exist; the inner value is its
    /// (nullable) owning airline.
    async fn aircraft_airline(&self, id: &str) -> Result<Option<Option<String>>, sqlx::Error>;

    /// `None` when the flight does not exist.
    async fn flight_airline(&self, id: &str) -> Result<Option<String>, sqlx::Error>;

    /// `None` when the crew member does not exist; the inner value is its
    /// (nullable) employing airline.
    async fn crew_member_airline(&self, id: &str) -> Result<Option<Option<String>>, sqlx::Error>;

    /// Whether another booking already holds `seat_number` on the flight,
    /// ignoring `exclude_booking` (the booking being updated).
    async fn seat_taken(
        &self,
        flight_id: &str,
        seat_number: &str,
        exclude_booking: Option<&str>,
    ) -> Result<bool, sqlx::Error>;

    /// Whether another passenger already holds `email`, ignoring
    /// `exclude_passenger`.
    async fn email_taken(
        &self,
        email: &str,
        exclude_passenger: Option<&str>,
    ) -> Result<bool, sqlx::Error>;

    async fn crew_assigned(
        &self,
        flight_id: &str,
        crew_member_id: &str,
    ) -> Result<bool, sqlx::Error>;

    /// Count rows of `relation` that reference entity `id` of `kind`.
    async fn dependent_count(
        &self,
        kind: EntityKind,
        id: &str,
        relation: Relation,
    ) -> Result<i64, sqlx::Error>;
}

/// Presence check shared by every candidate: empty and whitespace-only
/// values count as missing.
pub fn require<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ConflictReason> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConflictReason::MissingField(field)),
    }
}

/// A proposed flight record, before persistence
#[derive(Debug, Default)]
pub struct FlightCandidate<'a> {
    pub flight_number: Option<&'a str>,
    pub departure_airport_id: Option<&'a str>,
    pub arrival_airport_id: Option<&'a str>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub aircraft_id: Option<&'a str>,
    pub airline_id: Option<&'a str>,
}

/// Validate a flight create or full-update.
///
/// Checks run in a fixed order and short-circuit on the first failure:
/// required fields, distinct airports, strict time ordering, airport /
/// aircraft / airline resolution, and aircraft-airline ownership.
pub async fn validate_flight_write<S: RecordStore>(
    store: &S,
    candidate: &FlightCandidate<'_>,
) -> Result<(), ValidationError> {
    require("flight_number", candidate.flight_number)?;
    let departure_airport = require("departure_airport_id", candidate.departure_airport_id)?;
    let arrival_airport = require("arrival_airport_id", candidate.arrival_airport_id)?;
    let departure_time = candidate
        .departure_time
        .ok_or(ConflictReason::MissingField("departure_time"))?;
    let arrival_time = candidate
        .arrival_time
        .ok_or(ConflictReason::MissingField("arrival_time"))?;
    let aircraft_id = require("aircraft_id", candidate.aircraft_id)?;
    let airline_id = require("airline_id", candidate.airline_id)?;

    if departure_airport == arrival_airport {
        return Err(ConflictReason::SameAirport.into());
    }

    // Equal instants are rejected too: a flight must take time.
    if departure_time >= arrival_time {
        return Err(ConflictReason::InvalidTimeOrder.into());
    }

    for airport_id in [departure_airport, arrival_airport] {
        if !store.airport_exists(airport_id).await? {
            return Err(ConflictReason::UnknownAirport(airport_id.to_string()).into());
        }
    }

    let aircraft_owner = store
        .aircraft_airline(aircraft_id)
        .await?
        .ok_or_else(|| ConflictReason::UnknownAircraft(aircraft_id.to_string()))?;

    if !store.airline_exists(airline_id).await? {
        return Err(ConflictReason::UnknownAirline(airline_id.to_string()).into());
    }

    if aircraft_owner.as_deref() != Some(airline_id) {
        return Err(ConflictReason::AircraftAirlineMismatch(aircraft_id.to_string()).into());
    }

    Ok(())
}

/// A proposed booking record, before persistence
#[derive(Debug, Default)]
pub struct BookingCandidate<'a> {
    pub flight_id: Option<&'a str>,
    pub passenger_id: Option<&'a str>,
    pub seat_number: Option<&'a str>,
}

/// Validate a booking create or full-update.
///
/// `exclude_booking` carries the id of the booking being updated so its own
/// seat does not count as taken.
pub async fn validate_booking_write<S: RecordStore>(
    store: &S,
    candidate: &BookingCandidate<'_>,
    exclude_booking: Option<&str>,
) -> Result<(), ValidationError> {
    let flight_id = require("flight_id", candidate.flight_id)?;
    let passenger_id = require("passenger_id", candidate.passenger_id)?;

    if store.flight_airline(flight_id).await?.is_none() {
        return Err(ConflictReason::UnknownFlight(flight_id.to_string()).into());
    }

    if !store.passenger_exists(passenger_id).await? {
        return Err(ConflictReason::UnknownPassenger(passenger_id.to_string()).into());
    }

    if let Some(seat) = candidate.seat_number {
        if !seat.trim().is_empty() && store.seat_taken(flight_id, seat, exclude_booking).await? {
            return Err(ConflictReason::SeatTaken {
                flight_id: flight_id.to_string(),
                seat_number: seat.to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate assigning a crew member to a flight.
pub async fn validate_crew_assignment<S: RecordStore>(
    store: &S,
    flight_id: Option<&str>,
    crew_member_id: Option<&str>,
) -> Result<(), ValidationError> {
    let flight_id = require("flight_id", flight_id)?;
    let crew_member_id = require("crew_member_id", crew_member_id)?;

    let flight_airline = store
        .flight_airline(flight_id)
        .await?
        .ok_or_else(|| ConflictReason::UnknownFlight(flight_id.to_string()))?;

    let crew_airline = store
        .crew_member_airline(crew_member_id)
        .await?
        .ok_or_else(|| ConflictReason::UnknownCrewMember(crew_member_id.to_string()))?;

    if crew_airline.as_deref() != Some(flight_airline.as_str()) {
        return Err(ConflictReason::AirlineMismatch(crew_member_id.to_string()).into());
    }

    if store.crew_assigned(flight_id, crew_member_id).await? {
        return Err(ConflictReason::DuplicateAssignment {
            flight_id: flight_id.to_string(),
            crew_member_id: crew_member_id.to_string(),
        }
        .into());
    }

    Ok(())
}

/// A proposed passenger record, before persistence
#[derive(Debug, Default)]
pub struct PassengerCandidate<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

/// Validate a passenger create or full-update.
///
/// Email uniqueness excludes `exclude_passenger`, so updating a passenger
/// to their own current email succeeds.
pub async fn validate_passenger_write<S: RecordStore>(
    store: &S,
    candidate: &PassengerCandidate<'_>,
    exclude_passenger: Option<&str>,
) -> Result<(), ValidationError> {
    require("first_name", candidate.first_name)?;
    require("last_name", candidate.last_name)?;
    let email = require("email", candidate.email)?;

    if store.email_taken(email, exclude_passenger).await? {
        return Err(ConflictReason::DuplicateEmail(email.to_string()).into());
    }

    Ok(())
}

/// A proposed crew member record, before persistence
#[derive(Debug, Default)]
pub struct CrewMemberCandidate<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub airline_id: Option<&'a str>,
}

/// Validate a crew member create or full-update: names and an airline are
/// required, and the airline must resolve.
pub async fn validate_crew_member_write<S: RecordStore>(
    store: &S,
    candidate: &CrewMemberCandidate<'_>,
) -> Result<(), ValidationError> {
    require("first_name", candidate.first_name)?;
    require("last_name", candidate.last_name)?;
    let airline_id = require("airline_id", candidate.airline_id)?;

    if !store.airline_exists(airline_id).await? {
        return Err(ConflictReason::UnknownAirline(airline_id.to_string()).into());
    }

    Ok(())
}

/// When an aircraft names an owning airline, that airline must exist.
/// A `None` airline is admissible (unassigned aircraft).
pub async fn validate_aircraft_airline<S: RecordStore>(
    store: &S,
    airline_id: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(id) = airline_id {
        if !id.trim().is_empty() && !store.airline_exists(id).await? {
            return Err(ConflictReason::UnknownAirline(id.to_string()).into());
        }
    }
    Ok(())
}

/// Gather the blocking-relation counts for `id` and reject the deletion if
/// any are non-zero. Cascading relations are left to the delete command.
pub async fn check_deletion<S: RecordStore>(
    store: &S,
    kind: EntityKind,
    id: &str,
) -> Result<(), ValidationError> {
    let rule = deletion_rule(kind);
    let mut counts = Vec::with_capacity(rule.blocking.len());
    for relation in rule.blocking {
        counts.push((*relation, store.dependent_count(kind, id, *relation).await?));
    }
    validate_deletion(kind, &counts)?;
    Ok(())
}
