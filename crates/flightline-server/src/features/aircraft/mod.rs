pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::aircraft_routes;
pub use types::Aircraft;
