pub mod get;
pub mod list;

pub use get::{CrewMemberDetail, GetCrewMemberError, RosterEntry};
pub use list::{ListCrewMembersError, ListCrewMembersQuery};
