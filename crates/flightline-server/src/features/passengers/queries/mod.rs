pub mod get;
pub mod list;

pub use get::{GetPassengerError, PassengerDetail};
pub use list::{ListPassengersError, ListPassengersQuery};
