//! API response types
//!
//! Standard response envelope: `{ message, data? }` on success,
//! `{ error }` on failure. Dependent-row rejections additionally carry the
//! per-relation counts under `data.counts`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::validator::{ConflictReason, ReasonClass};

/// Standard success response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new success response
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Standard error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Map a validator rejection to its HTTP response.
///
/// Validation and conflict rejections are 400, unresolved references are
/// 404. `HasDependents` reports the exact blocker counts so clients can
/// show what still references the entity.
pub fn conflict_response(reason: &ConflictReason) -> Response {
    let status = match reason.class() {
        ReasonClass::Validation | ReasonClass::Conflict => StatusCode::BAD_REQUEST,
        ReasonClass::NotFound => StatusCode::NOT_FOUND,
    };

    match reason {
        ConflictReason::HasDependents { counts, .. } => {
            let mut breakdown = serde_json::Map::new();
            for (relation, count) in counts {
                breakdown.insert(relation.as_str().to_string(), json!(count));
            }
            (
                status,
                Json(json!({
                    "message": reason.to_string(),
                    "data": { "counts": breakdown }
                })),
            )
                .into_response()
        },
        _ => (status, Json(ErrorResponse::new(reason.to_string()))).into_response(),
    }
}

/// Uniform 500 for unexpected database failures
pub fn database_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("A database error occurred")),
    )
        .into_response()
}

/// 404 for a missing target entity
pub fn not_found_response(message: impl Into<String>) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
}
