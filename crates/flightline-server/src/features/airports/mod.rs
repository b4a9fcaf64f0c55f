pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::airports_routes;
pub use types::Airport;
