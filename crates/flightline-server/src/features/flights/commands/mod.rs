pub mod assign_crew;
pub mod create;
pub mod delete;
pub mod remove_crew;
pub mod update;

pub use assign_crew::{AssignCrewCommand, AssignCrewError, AssignCrewResponse};
pub use create::{CreateFlightCommand, CreateFlightError};
pub use delete::{DeleteFlightCommand, DeleteFlightError, DeleteFlightResponse};
pub use remove_crew::{RemoveCrewCommand, RemoveCrewError, RemoveCrewResponse};
pub use update::{UpdateFlightCommand, UpdateFlightError};
