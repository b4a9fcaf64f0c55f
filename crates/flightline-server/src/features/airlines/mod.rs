pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::airlines_routes;
pub use types::Airline;
