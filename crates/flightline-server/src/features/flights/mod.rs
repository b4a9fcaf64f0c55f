pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::flights_routes;
pub use types::{CrewAssignment, Flight};
