//! Airport API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::SqlitePool;

use super::commands::{
    create::{self, CreateAirportCommand, CreateAirportError},
    delete::{self as delete_cmd, DeleteAirportCommand, DeleteAirportError},
    update::{self, UpdateAirportCommand, UpdateAirportError},
};
use super::queries::{
    get::{self as get_query, GetAirportError},
    list::{self, ListAirportsError, ListAirportsQuery},
};
use crate::api::response::{
    conflict_response, database_error_response, not_found_response, ApiResponse, ErrorResponse,
};

pub fn airports_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_airport))
        .route("/", get(list_airports))
        .route("/:id", get(get_airport))
        .route("/:id", put(update_airport))
        .route("/:id", delete(delete_airport))
}

#[tracing::instrument(skip(pool, command))]
async fn create_airport(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateAirportCommand>,
) -> Result<Response, AirportApiError> {
    let airport = create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Airport created successfully", airport)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool, command), fields(airport_id = %id))]
async fn update_airport(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(mut command): Json<UpdateAirportCommand>,
) -> Result<Response, AirportApiError> {
    command.id = id;
    let airport = update::handle(pool, command).await?;

    Ok(Json(ApiResponse::new("Airport updated successfully", airport)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_airport(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, AirportApiError> {
    let response = delete_cmd::handle(pool, DeleteAirportCommand { id }).await?;

    Ok(Json(ApiResponse::new("Airport deleted successfully", response)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_airport(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, AirportApiError> {
    let airport = get_query::handle(pool, id).await?;

    Ok(Json(ApiResponse::new("Airport retrieved successfully", airport)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_airports(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListAirportsQuery>,
) -> Result<Response, AirportApiError> {
    let page = list::handle(pool, query).await?;

    Ok(Json(ApiResponse::new("Airports retrieved successfully", page)).into_response())
}

#[derive(Debug)]
enum AirportApiError {
    Create(CreateAirportError),
    Update(UpdateAirportError),
    Delete(DeleteAirportError),
    Get(GetAirportError),
    List(ListAirportsError),
}

impl From<CreateAirportError> for AirportApiError {
    fn from(err: CreateAirportError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateAirportError> for AirportApiError {
    fn from(err: UpdateAirportError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteAirportError> for AirportApiError {
    fn from(err: DeleteAirportError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetAirportError> for AirportApiError {
    fn from(err: GetAirportError) -> Self {
        Self::Get(err)
    }
}

impl From<ListAirportsError> for AirportApiError {
    fn from(err: ListAirportsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for AirportApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreateAirportError::Rejected(reason))
            | Self::Update(UpdateAirportError::Rejected(reason))
            | Self::Delete(DeleteAirportError::Rejected(reason)) => conflict_response(&reason),

            Self::Update(UpdateAirportError::NotFound(ref id))
            | Self::Delete(DeleteAirportError::NotFound(ref id))
            | Self::Get(GetAirportError::NotFound(ref id)) => {
                not_found_response(format!("Airport '{}' not found", id))
            },

            Self::List(ListAirportsError::InvalidPagination(message)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            },

            Self::Create(CreateAirportError::Database(ref e))
            | Self::Update(UpdateAirportError::Database(ref e))
            | Self::Delete(DeleteAirportError::Database(ref e))
            | Self::Get(GetAirportError::Database(ref e))
            | Self::List(ListAirportsError::Database(ref e)) => {
                tracing::error!("Database error in airport API: {}", e);
                database_error_response()
            },
        }
    }
}
