//! Passenger API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::SqlitePool;

use super::commands::{
    create::{self, CreatePassengerCommand, CreatePassengerError},
    delete::{self as delete_cmd, DeletePassengerCommand, DeletePassengerError},
    update::{self, UpdatePassengerCommand, UpdatePassengerError},
};
use super::queries::{
    get::{self as get_query, GetPassengerError},
    list::{self, ListPassengersError, ListPassengersQuery},
};
use crate::api::response::{
    conflict_response, database_error_response, not_found_response, ApiResponse, ErrorResponse,
};

pub fn passengers_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_passenger))
        .route("/", get(list_passengers))
        .route("/:id", get(get_passenger))
        .route("/:id", put(update_passenger))
        .route("/:id", delete(delete_passenger))
}

#[tracing::instrument(skip(pool, command))]
async fn create_passenger(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreatePassengerCommand>,
) -> Result<Response, PassengerApiError> {
    let passenger = create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Passenger created successfully", passenger)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool, command), fields(passenger_id = %id))]
async fn update_passenger(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(mut command): Json<UpdatePassengerCommand>,
) -> Result<Response, PassengerApiError> {
    command.id = id;
    let passenger = update::handle(pool, command).await?;

    Ok(Json(ApiResponse::new("Passenger updated successfully", passenger)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_passenger(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, PassengerApiError> {
    let response = delete_cmd::handle(pool, DeletePassengerCommand { id }).await?;

    Ok(Json(ApiResponse::new("Passenger deleted successfully", response)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_passenger(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, PassengerApiError> {
    let detail = get_query::handle(pool, id).await?;

    Ok(Json(ApiResponse::new("Passenger retrieved successfully", detail)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_passengers(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListPassengersQuery>,
) -> Result<Response, PassengerApiError> {
    let page = list::handle(pool, query).await?;

    Ok(Json(ApiResponse::new("Passengers retrieved successfully", page)).into_response())
}

#[derive(Debug)]
enum PassengerApiError {
    Create(CreatePassengerError),
    Update(UpdatePassengerError),
    Delete(DeletePassengerError),
    Get(GetPassengerError),
    List(ListPassengersError),
}

impl From<CreatePassengerError> for PassengerApiError {
    fn from(err: CreatePassengerError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdatePassengerError> for PassengerApiError {
    fn from(err: UpdatePassengerError) -> Self {
        Self::Update(err)
    }
}

impl From<DeletePassengerError> for PassengerApiError {
    fn from(err: DeletePassengerError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetPassengerError> for PassengerApiError {
    fn from(err: GetPassengerError) -> Self {
        Self::Get(err)
    }
}

impl From<ListPassengersError> for PassengerApiError {
    fn from(err: ListPassengersError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for PassengerApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreatePassengerError::Rejected(reason))
            | Self::Update(UpdatePassengerError::Rejected(reason))
            | Self::Delete(DeletePassengerError::Rejected(reason)) => conflict_response(&reason),

            Self::Update(UpdatePassengerError::NotFound(ref id))
            | Self::Delete(DeletePassengerError::NotFound(ref id))
            | Self::Get(GetPassengerError::NotFound(ref id)) => {
                not_found_response(format!("Passenger '{}' not found", id))
            },

            Self::List(ListPassengersError::InvalidPagination(message)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            },

            Self::Create(CreatePassengerError::Database(ref e))
            | Self::Update(UpdatePassengerError::Database(ref e))
            | Self::Delete(DeletePassengerError::Database(ref e))
            | Self::Get(GetPassengerError::Database(ref e))
            | Self::List(ListPassengersError::Database(ref e)) => {
                tracing::error!("Database error in passenger API: {}", e);
                database_error_response()
            },
        }
    }
}
