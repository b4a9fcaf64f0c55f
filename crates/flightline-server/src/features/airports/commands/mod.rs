pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateAirportCommand, CreateAirportError};
pub use delete::{DeleteAirportCommand, DeleteAirportError, DeleteAirportResponse};
pub use update::{UpdateAirportCommand, UpdateAirportError};
