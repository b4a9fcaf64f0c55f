pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateBookingCommand, CreateBookingError};
pub use delete::{DeleteBookingCommand, DeleteBookingError, DeleteBookingResponse};
pub use update::{UpdateBookingCommand, UpdateBookingError};
