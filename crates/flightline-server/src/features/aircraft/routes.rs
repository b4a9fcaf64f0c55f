//! Aircraft API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::SqlitePool;

use super::commands::{
    create::{self, CreateAircraftCommand, CreateAircraftError},
    delete::{self as delete_cmd, DeleteAircraftCommand, DeleteAircraftError},
    update::{self, UpdateAircraftCommand, UpdateAircraftError},
};
use super::queries::{
    get::{self as get_query, GetAircraftError},
    list::{self, ListAircraftError, ListAircraftQuery},
};
use crate::api::response::{
    conflict_response, database_error_response, not_found_response, ApiResponse, ErrorResponse,
};

pub fn aircraft_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_aircraft))
        .route("/", get(list_aircraft))
        .route("/:id", get(get_aircraft))
        .route("/:id", put(update_aircraft))
        .route("/:id", delete(delete_aircraft))
}

#[tracing::instrument(skip(pool, command))]
async fn create_aircraft(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateAircraftCommand>,
) -> Result<Response, AircraftApiError> {
    let aircraft = create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Aircraft created successfully", aircraft)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool, command), fields(aircraft_id = %id))]
async fn update_aircraft(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(mut command): Json<UpdateAircraftCommand>,
) -> Result<Response, AircraftApiError> {
    command.id = id;
    let aircraft = update::handle(pool, command).await?;

    Ok(Json(ApiResponse::new("Aircraft updated successfully", aircraft)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_aircraft(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, AircraftApiError> {
    let response = delete_cmd::handle(pool, DeleteAircraftCommand { id }).await?;

    Ok(Json(ApiResponse::new("Aircraft deleted successfully", response)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_aircraft(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, AircraftApiError> {
    let aircraft = get_query::handle(pool, id).await?;

    Ok(Json(ApiResponse::new("Aircraft retrieved successfully", aircraft)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_aircraft(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListAircraftQuery>,
) -> Result<Response, AircraftApiError> {
    let page = list::handle(pool, query).await?;

    Ok(Json(ApiResponse::new("Aircraft retrieved successfully", page)).into_response())
}

#[derive(Debug)]
enum AircraftApiError {
    Create(CreateAircraftError),
    Update(UpdateAircraftError),
    Delete(DeleteAircraftError),
    Get(GetAircraftError),
    List(ListAircraftError),
}

impl From<CreateAircraftError> for AircraftApiError {
    fn from(err: CreateAircraftError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateAircraftError> for AircraftApiError {
    fn from(err: UpdateAircraftError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteAircraftError> for AircraftApiError {
    fn from(err: DeleteAircraftError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetAircraftError> for AircraftApiError {
    fn from(err: GetAircraftError) -> Self {
        Self::Get(err)
    }
}

impl From<ListAircraftError> for AircraftApiError {
    fn from(err: ListAircraftError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for AircraftApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreateAircraftError::Rejected(reason))
            | Self::Update(UpdateAircraftError::Rejected(reason))
            | Self::Delete(DeleteAircraftError::Rejected(reason)) => conflict_response(&reason),

            Self::Update(UpdateAircraftError::NotFound(ref id))
            | Self::Delete(DeleteAircraftError::NotFound(ref id))
            | Self::Get(GetAircraftError::NotFound(ref id)) => {
                not_found_response(format!("Aircraft '{}' not found", id))
            },

            Self::List(ListAircraftError::InvalidPagination(message)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            },

            Self::Create(CreateAircraftError::Database(ref e))
            | Self::Update(UpdateAircraftError::Database(ref e))
            | Self::Delete(DeleteAircraftError::Database(ref e))
            | Self::Get(GetAircraftError::Database(ref e))
            | Self::List(ListAircraftError::Database(ref e)) => {
                tracing::error!("Database error in aircraft API: {}", e);
                database_error_response()
            },
        }
    }
}
