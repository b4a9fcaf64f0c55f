pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreatePassengerCommand, CreatePassengerError};
pub use delete::{DeletePassengerCommand, DeletePassengerError, DeletePassengerResponse};
pub use update::{UpdatePassengerCommand, UpdatePassengerError};
