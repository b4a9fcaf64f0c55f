pub mod get;
pub mod list;

pub use get::{AirlineDetail, GetAirlineError};
pub use list::{ListAirlinesError, ListAirlinesQuery};
