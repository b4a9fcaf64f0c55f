//! Flightline Server Library
//!
//! HTTP server for airline operational data: airlines, airports, aircraft,
//! flights, passengers, bookings, and crew members.
//!
//! # Overview
//!
//! - **API Endpoints**: RESTful CRUD for the seven operational entities,
//!   plus crew assignment on flights and `/health` / `/stats` reporting
//! - **Integrity Validator**: every mutating operation is checked against
//!   the domain's referential and business invariants before it commits
//! - **Database Management**: SQLite integration with SQLx, embedded
//!   migrations, explicit pool lifecycle
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS and request tracing
//!
//! # Architecture
//!
//! Each entity is a vertical slice under `features/` with its own commands
//! (write operations), queries (read operations), and routes. Writes funnel
//! through [`validator`], which is pure: it authorizes or rejects against
//! current state via a lookup seam but never writes. Unique constraints at
//! the storage layer remain the arbiter for racy invariants; a lost race is
//! surfaced as the same conflict the pre-check would have reported.
//!
//! ## Framework Stack
//!
//! - **Axum**: Modern, ergonomic web framework
//! - **SQLx**: Parameterized SQL with async pooling
//! - **Tower**: Middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use flightline_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod validator;

// Re-export commonly used types
pub use error::{AppError, ServerResult};
