pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::bookings_routes;
pub use types::Booking;
