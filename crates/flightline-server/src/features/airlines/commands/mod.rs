pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateAirlineCommand, CreateAirlineError};
pub use delete::{DeleteAirlineCommand, DeleteAirlineError, DeleteAirlineResponse};
pub use update::{UpdateAirlineCommand, UpdateAirlineError};
