//! Booking API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::SqlitePool;

use super::commands::{
    create::{self, CreateBookingCommand, CreateBookingError},
    delete::{self as delete_cmd, DeleteBookingCommand, DeleteBookingError},
    update::{self, UpdateBookingCommand, UpdateBookingError},
};
use super::queries::{
    get::{self as get_query, GetBookingError},
    list::{self, ListBookingsError, ListBookingsQuery},
};
use crate::api::response::{
    conflict_response, database_error_response, not_found_response, ApiResponse, ErrorResponse,
};

pub fn bookings_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/:id", get(get_booking))
        .route("/:id", put(update_booking))
        .route("/:id", delete(delete_booking))
}

#[tracing::instrument(skip(pool, command))]
async fn create_booking(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateBookingCommand>,
) -> Result<Response, BookingApiError> {
    let booking = create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Booking created successfully", booking)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool, command), fields(booking_id = %id))]
async fn update_booking(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(mut command): Json<UpdateBookingCommand>,
) -> Result<Response, BookingApiError> {
    command.id = id;
    let booking = update::handle(pool, command).await?;

    Ok(Json(ApiResponse::new("Booking updated successfully", booking)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_booking(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, BookingApiError> {
    let response = delete_cmd::handle(pool, DeleteBookingCommand { id }).await?;

    Ok(Json(ApiResponse::new("Booking deleted successfully", response)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_booking(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, BookingApiError> {
    let booking = get_query::handle(pool, id).await?;

    Ok(Json(ApiResponse::new("Booking retrieved successfully", booking)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_bookings(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Response, BookingApiError> {
    let page = list::handle(pool, query).await?;

    Ok(Json(ApiResponse::new("Bookings retrieved successfully", page)).into_response())
}

#[derive(Debug)]
enum BookingApiError {
    Create(CreateBookingError),
    Update(UpdateBookingError),
    Delete(DeleteBookingError),
    Get(GetBookingError),
    List(ListBookingsError),
}

impl From<CreateBookingError> for BookingApiError {
    fn from(err: CreateBookingError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateBookingError> for BookingApiError {
    fn from(err: UpdateBookingError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteBookingError> for BookingApiError {
    fn from(err: DeleteBookingError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetBookingError> for BookingApiError {
    fn from(err: GetBookingError) -> Self {
        Self::Get(err)
    }
}

impl From<ListBookingsError> for BookingApiError {
    fn from(err: ListBookingsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for BookingApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreateBookingError::Rejected(reason))
            | Self::Update(UpdateBookingError::Rejected(reason)) => conflict_response(&reason),

            Self::Update(UpdateBookingError::NotFound(ref id))
            | Self::Delete(DeleteBookingError::NotFound(ref id))
            | Self::Get(GetBookingError::NotFound(ref id)) => {
                not_found_response(format!("Booking '{}' not found", id))
            },

            Self::List(ListBookingsError::InvalidPagination(message)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            },

            Self::Create(CreateBookingError::Database(ref e))
            | Self::Update(UpdateBookingError::Database(ref e))
            | Self::Delete(DeleteBookingError::Database(ref e))
            | Self::Get(GetBookingError::Database(ref e))
            | Self::List(ListBookingsError::Database(ref e)) => {
                tracing::error!("Database error in booking API: {}", e);
                database_error_response()
            },
        }
    }
}
