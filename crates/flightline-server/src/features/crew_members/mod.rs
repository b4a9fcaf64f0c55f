pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::crew_members_routes;
pub use types::CrewMember;
