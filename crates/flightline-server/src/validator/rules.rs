//! Deletion guard rule table
//!
//! One tagged-variant rule per entity kind describes which dependent
//! relations block deletion and which are removed automatically before the
//! entity itself. Replaces per-route ad-hoc guard code with a single table
//! the delete commands and the validator share.

use serde::Serialize;

use super::ConflictReason;

/// The seven persistable entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Airline,
    Airport,
    Aircraft,
    Flight,
    Passenger,
    Booking,
    CrewMember,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Airline => "airline",
            EntityKind::Airport => "airport",
            EntityKind::Aircraft => "aircraft",
            EntityKind::Flight => "flight",
            EntityKind::Passenger => "passenger",
            EntityKind::Booking => "booking",
            EntityKind::CrewMember => "crew member",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dependent relation counted by the deletion guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Aircraft owned by an airline
    Aircraft,
    /// Flights operated by an airline or flown by an aircraft
    Flights,
    /// Crew members employed by an airline
    CrewMembers,
    /// Flights departing from an airport
    Departures,
    /// Flights arriving at an airport
    Arrivals,
    /// Bookings held against a flight or a passenger
    Bookings,
    /// Rows in the flight_crew junction table
    CrewAssignments,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Aircraft => "aircraft",
            Relation::Flights => "flights",
            Relation::CrewMembers => "crew_members",
            Relation::Departures => "departures",
            Relation::Arrivals => "arrivals",
            Relation::Bookings => "bookings",
            Relation::CrewAssignments => "crew_assignments",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deletion policy for one entity kind
#[derive(Debug, Clone, Copy)]
pub struct DeletionRule {
    pub kind: EntityKind,
    /// Relations whose rows block deletion outright
    pub blocking: &'static [Relation],
    /// Relations removed automatically before the entity itself
    pub cascading: &'static [Relation],
}

pub const DELETION_RULES: &[DeletionRule] = &[
    DeletionRule {
        kind: EntityKind::Airline,
        blocking: &[Relation::Aircraft, Relation::Flights, Relation::CrewMembers],
        cascading: &[],
    },
    DeletionRule {
        kind: EntityKind::Airport,
        blocking: &[Relation::Departures, Relation::Arrivals],
        cascading: &[],
    },
    DeletionRule {
        kind: EntityKind::Aircraft,
        blocking: &[Relation::Flights],
        cascading: &[],
    },
    DeletionRule {
        kind: EntityKind::Flight,
        blocking: &[Relation::Bookings],
        cascading: &[Relation::CrewAssignments],
    },
    DeletionRule {
        kind: EntityKind::Passenger,
        blocking: &[Relation::Bookings],
        cascading: &[],
    },
    DeletionRule {
        kind: EntityKind::Booking,
        blocking: &[],
        cascading: &[],
    },
    DeletionRule {
        kind: EntityKind::CrewMember,
        blocking: &[],
        cascading: &[Relation::CrewAssignments],
    },
];

/// Look up the deletion rule for an entity kind
pub fn deletion_rule(kind: EntityKind) -> &'static DeletionRule {
    // The table covers every variant, so the lookup always succeeds.
    DELETION_RULES
        .iter()
        .find(|rule| rule.kind == kind)
        .unwrap_or(&DELETION_RULES[0])
}

/// Per-relation dependent counts gathered before a deletion
pub type DependentCounts = Vec<(Relation, i64)>;

/// Reject a deletion when any blocking relation still has rows.
///
/// `counts` holds the pre-computed count for each blocking relation of
/// `kind`; cascading relations are not consulted here. The rejection
/// carries the exact counts so callers can report them.
pub fn validate_deletion(kind: EntityKind, counts: &DependentCounts) -> Result<(), ConflictReason> {
    if counts.iter().any(|(_, count)| *count > 0) {
        return Err(ConflictReason::HasDependents {
            kind,
            counts: counts.clone(),
        });
    }
    Ok(())
}
