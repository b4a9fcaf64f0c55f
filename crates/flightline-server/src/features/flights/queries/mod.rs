pub mod get;
pub mod list;

pub use get::{FlightDetail, GetFlightError};
pub use list::{ListFlightsError, ListFlightsQuery};
