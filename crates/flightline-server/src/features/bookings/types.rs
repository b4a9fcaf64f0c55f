//! Persisted booking record shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default booking status applied when the payload leaves it unset
pub const DEFAULT_BOOKING_STATUS: &str = "Confirmed";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: String,
    pub flight_id: String,
    pub passenger_id: String,
    /// Set at creation time and never overwritten afterwards
    pub booking_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    pub booking_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const BOOKING_COLUMNS: &str = "id, flight_id, passenger_id, booking_date, seat_number, \
                                   booking_status, price, created_at, updated_at";
