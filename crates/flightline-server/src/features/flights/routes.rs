//! Flight API routes
//!
//! - `POST /api/v1/flights` - Create a new flight
//! - `GET /api/v1/flights` - List flights with pagination and filters
//! - `GET /api/v1/flights/:id` - Get a flight with bookings and crew embedded
//! - `PUT /api/v1/flights/:id` - Replace a flight
//! - `DELETE /api/v1/flights/:id` - Delete a flight (crew rows cascade, bookings block)
//! - `POST /api/v1/flights/:id/crew` - Assign a crew member
//! - `DELETE /api/v1/flights/:id/crew/:crew_member_id` - Remove a crew member

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::SqlitePool;

use super::commands::{
    assign_crew::{self, AssignCrewCommand, AssignCrewError},
    create::{self, CreateFlightCommand, CreateFlightError},
    delete::{self as delete_cmd, DeleteFlightCommand, DeleteFlightError},
    remove_crew::{self, RemoveCrewCommand, RemoveCrewError},
    update::{self, UpdateFlightCommand, UpdateFlightError},
};
use super::queries::{
    get::{self as get_query, GetFlightError},
    list::{self, ListFlightsError, ListFlightsQuery},
};
use crate::api::response::{
    conflict_response, database_error_response, not_found_response, ApiResponse, ErrorResponse,
};

pub fn flights_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_flight))
        .route("/", get(list_flights))
        .route("/:id", get(get_flight))
        .route("/:id", put(update_flight))
        .route("/:id", delete(delete_flight))
        .route("/:id/crew", post(assign_crew_member))
        .route("/:id/crew/:crew_member_id", delete(remove_crew_member))
}

#[tracing::instrument(skip(pool, command))]
async fn create_flight(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateFlightCommand>,
) -> Result<Response, FlightApiError> {
    let flight = create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Flight created successfully", flight)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool, command), fields(flight_id = %id))]
async fn update_flight(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(mut command): Json<UpdateFlightCommand>,
) -> Result<Response, FlightApiError> {
    command.id = id;
    let flight = update::handle(pool, command).await?;

    Ok(Json(ApiResponse::new("Flight updated successfully", flight)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_flight(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, FlightApiError> {
    let response = delete_cmd::handle(pool, DeleteFlightCommand { id }).await?;

    Ok(Json(ApiResponse::new("Flight deleted successfully", response)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_flight(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, FlightApiError> {
    let detail = get_query::handle(pool, id).await?;

    Ok(Json(ApiResponse::new("Flight retrieved successfully", detail)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_flights(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListFlightsQuery>,
) -> Result<Response, FlightApiError> {
    let page = list::handle(pool, query).await?;

    Ok(Json(ApiResponse::new("Flights retrieved successfully", page)).into_response())
}

#[tracing::instrument(skip(pool, command), fields(flight_id = %id))]
async fn assign_crew_member(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(mut command): Json<AssignCrewCommand>,
) -> Result<Response, FlightApiError> {
    command.flight_id = id;
    let assignment = assign_crew::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Crew member assigned successfully", assignment)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool))]
async fn remove_crew_member(
    State(pool): State<SqlitePool>,
    Path((id, crew_member_id)): Path<(String, String)>,
) -> Result<Response, FlightApiError> {
    let response = remove_crew::handle(
        pool,
        RemoveCrewCommand {
            flight_id: id,
            crew_member_id,
        },
    )
    .await?;

    Ok(Json(ApiResponse::new("Crew member removed successfully", response)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for flight API endpoints
#[derive(Debug)]
enum FlightApiError {
    Create(CreateFlightError),
    Update(UpdateFlightError),
    Delete(DeleteFlightError),
    Get(GetFlightError),
    List(ListFlightsError),
    Assign(AssignCrewError),
    Remove(RemoveCrewError),
}

impl From<CreateFlightError> for FlightApiError {
    fn from(err: CreateFlightError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateFlightError> for FlightApiError {
    fn from(err: UpdateFlightError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteFlightError> for FlightApiError {
    fn from(err: DeleteFlightError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetFlightError> for FlightApiError {
    fn from(err: GetFlightError) -> Self {
        Self::Get(err)
    }
}

impl From<ListFlightsError> for FlightApiError {
    fn from(err: ListFlightsError) -> Self {
        Self::List(err)
    }
}

impl From<AssignCrewError> for FlightApiError {
    fn from(err: AssignCrewError) -> Self {
        Self::Assign(err)
    }
}

impl From<RemoveCrewError> for FlightApiError {
    fn from(err: RemoveCrewError) -> Self {
        Self::Remove(err)
    }
}

impl IntoResponse for FlightApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreateFlightError::Rejected(reason))
            | Self::Update(UpdateFlightError::Rejected(reason))
            | Self::Delete(DeleteFlightError::Rejected(reason))
            | Self::Assign(AssignCrewError::Rejected(reason)) => conflict_response(&reason),

            Self::Update(UpdateFlightError::NotFound(ref id))
            | Self::Delete(DeleteFlightError::NotFound(ref id))
            | Self::Get(GetFlightError::NotFound(ref id)) => {
                not_found_response(format!("Flight '{}' not found", id))
            },

            Self::Remove(RemoveCrewError::NotAssigned { .. }) => {
                let message = self.to_string();
                not_found_response(message)
            },

            Self::List(ListFlightsError::InvalidPagination(message)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            },

            Self::Create(CreateFlightError::Database(ref e))
            | Self::Update(UpdateFlightError::Database(ref e))
            | Self::Delete(DeleteFlightError::Database(ref e))
            | Self::Get(GetFlightError::Database(ref e))
            | Self::List(ListFlightsError::Database(ref e))
            | Self::Assign(AssignCrewError::Database(ref e))
            | Self::Remove(RemoveCrewError::Database(ref e)) => {
                tracing::error!("Database error in flight API: {}", e);
                database_error_response()
            },
        }
    }
}

impl std::fmt::Display for FlightApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create(e) => write!(f, "{}", e),
            Self::Update(e) => write!(f, "{}", e),
            Self::Delete(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::List(e) => write!(f, "{}", e),
            Self::Assign(e) => write!(f, "{}", e),
            Self::Remove(e) => write!(f, "{}", e),
        }
    }
}
