//! Airline API routes
//!
//! - `POST /api/v1/airlines` - Create a new airline
//! - `GET /api/v1/airlines` - List airlines with pagination
//! - `GET /api/v1/airlines/:id` - Get an airline with its aircraft, flights, and crew
//! - `PUT /api/v1/airlines/:id` - Replace an airline
//! - `DELETE /api/v1/airlines/:id` - Delete an airline (blocked while dependents exist)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::SqlitePool;

use super::commands::{
    create::{self, CreateAirlineCommand, CreateAirlineError},
    delete::{self as delete_cmd, DeleteAirlineCommand, DeleteAirlineError},
    update::{self, UpdateAirlineCommand, UpdateAirlineError},
};
use super::queries::{
    get::{self as get_query, GetAirlineError},
    list::{self, ListAirlinesError, ListAirlinesQuery},
};
use crate::api::response::{
    conflict_response, database_error_response, not_found_response, ApiResponse, ErrorResponse,
};

/// Creates the airlines router with all routes configured
pub fn airlines_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_airline))
        .route("/", get(list_airlines))
        .route("/:id", get(get_airline))
        .route("/:id", put(update_airline))
        .route("/:id", delete(delete_airline))
}

#[tracing::instrument(skip(pool, command))]
async fn create_airline(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateAirlineCommand>,
) -> Result<Response, AirlineApiError> {
    let airline = create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Airline created successfully", airline)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool, command), fields(airline_id = %id))]
async fn update_airline(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(mut command): Json<UpdateAirlineCommand>,
) -> Result<Response, AirlineApiError> {
    command.id = id;
    let airline = update::handle(pool, command).await?;

    Ok(Json(ApiResponse::new("Airline updated successfully", airline)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_airline(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, AirlineApiError> {
    let response = delete_cmd::handle(pool, DeleteAirlineCommand { id }).await?;

    Ok(Json(ApiResponse::new("Airline deleted successfully", response)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_airline(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, AirlineApiError> {
    let detail = get_query::handle(pool, id).await?;

    Ok(Json(ApiResponse::new("Airline retrieved successfully", detail)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_airlines(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListAirlinesQuery>,
) -> Result<Response, AirlineApiError> {
    let page = list::handle(pool, query).await?;

    Ok(Json(ApiResponse::new("Airlines retrieved successfully", page)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for airline API endpoints
#[derive(Debug)]
enum AirlineApiError {
    Create(CreateAirlineError),
    Update(UpdateAirlineError),
    Delete(DeleteAirlineError),
    Get(GetAirlineError),
    List(ListAirlinesError),
}

impl From<CreateAirlineError> for AirlineApiError {
    fn from(err: CreateAirlineError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateAirlineError> for AirlineApiError {
    fn from(err: UpdateAirlineError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteAirlineError> for AirlineApiError {
    fn from(err: DeleteAirlineError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetAirlineError> for AirlineApiError {
    fn from(err: GetAirlineError) -> Self {
        Self::Get(err)
    }
}

impl From<ListAirlinesError> for AirlineApiError {
    fn from(err: ListAirlinesError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for AirlineApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreateAirlineError::Rejected(reason))
            | Self::Update(UpdateAirlineError::Rejected(reason))
            | Self::Delete(DeleteAirlineError::Rejected(reason)) => conflict_response(&reason),

            Self::Update(UpdateAirlineError::NotFound(ref id))
            | Self::Delete(DeleteAirlineError::NotFound(ref id))
            | Self::Get(GetAirlineError::NotFound(ref id)) => {
                not_found_response(format!("Airline '{}' not found", id))
            },

            Self::List(ListAirlinesError::InvalidPagination(message)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            },

            Self::Create(CreateAirlineError::Database(ref e))
            | Self::Update(UpdateAirlineError::Database(ref e))
            | Self::Delete(DeleteAirlineError::Database(ref e))
            | Self::Get(GetAirlineError::Database(ref e))
            | Self::List(ListAirlinesError::Database(ref e)) => {
                tracing::error!("Database error in airline API: {}", e);
                database_error_response()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_structure() {
        let router = airlines_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
