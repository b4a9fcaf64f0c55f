pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateAircraftCommand, CreateAircraftError};
pub use delete::{DeleteAircraftCommand, DeleteAircraftError, DeleteAircraftResponse};
pub use update::{UpdateAircraftCommand, UpdateAircraftError};
