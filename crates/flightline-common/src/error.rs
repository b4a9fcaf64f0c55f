//! Error types shared across Flightline crates

use thiserror::Error;

/// Result type alias for Flightline operations
pub type Result<T> = std::result::Result<T, FlightlineError>;

/// Main error type for Flightline
#[derive(Error, Debug)]
pub enum FlightlineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
