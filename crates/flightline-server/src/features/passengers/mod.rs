pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::passengers_routes;
pub use types::Passenger;
