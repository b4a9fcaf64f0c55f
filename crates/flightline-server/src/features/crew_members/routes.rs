//! Crew member API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::SqlitePool;

use super::commands::{
    create::{self, CreateCrewMemberCommand, CreateCrewMemberError},
    delete::{self as delete_cmd, DeleteCrewMemberCommand, DeleteCrewMemberError},
    update::{self, UpdateCrewMemberCommand, UpdateCrewMemberError},
};
use super::queries::{
    get::{self as get_query, GetCrewMemberError},
    list::{self, ListCrewMembersError, ListCrewMembersQuery},
};
use crate::api::response::{
    conflict_response, database_error_response, not_found_response, ApiResponse, ErrorResponse,
};

pub fn crew_members_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_crew_member))
        .route("/", get(list_crew_members))
        .route("/:id", get(get_crew_member))
        .route("/:id", put(update_crew_member))
        .route("/:id", delete(delete_crew_member))
}

#[tracing::instrument(skip(pool, command))]
async fn create_crew_member(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateCrewMemberCommand>,
) -> Result<Response, CrewMemberApiError> {
    let crew_member = create::handle(pool, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Crew member created successfully", crew_member)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool, command), fields(crew_member_id = %id))]
async fn update_crew_member(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(mut command): Json<UpdateCrewMemberCommand>,
) -> Result<Response, CrewMemberApiError> {
    command.id = id;
    let crew_member = update::handle(pool, command).await?;

    Ok(Json(ApiResponse::new("Crew member updated successfully", crew_member)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_crew_member(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, CrewMemberApiError> {
    let response = delete_cmd::handle(pool, DeleteCrewMemberCommand { id }).await?;

    Ok(Json(ApiResponse::new("Crew member deleted successfully", response)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_crew_member(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Response, CrewMemberApiError> {
    let detail = get_query::handle(pool, id).await?;

    Ok(Json(ApiResponse::new("Crew member retrieved successfully", detail)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_crew_members(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListCrewMembersQuery>,
) -> Result<Response, CrewMemberApiError> {
    let page = list::handle(pool, query).await?;

    Ok(Json(ApiResponse::new("Crew members retrieved successfully", page)).into_response())
}

#[derive(Debug)]
enum CrewMemberApiError {
    Create(CreateCrewMemberError),
    Update(UpdateCrewMemberError),
    Delete(DeleteCrewMemberError),
    Get(GetCrewMemberError),
    List(ListCrewMembersError),
}

impl From<CreateCrewMemberError> for CrewMemberApiError {
    fn from(err: CreateCrewMemberError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateCrewMemberError> for CrewMemberApiError {
    fn from(err: UpdateCrewMemberError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteCrewMemberError> for CrewMemberApiError {
    fn from(err: DeleteCrewMemberError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetCrewMemberError> for CrewMemberApiError {
    fn from(err: GetCrewMemberError) -> Self {
        Self::Get(err)
    }
}

impl From<ListCrewMembersError> for CrewMemberApiError {
    fn from(err: ListCrewMembersError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for CrewMemberApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Create(CreateCrewMemberError::Rejected(reason))
            | Self::Update(UpdateCrewMemberError::Rejected(reason)) => conflict_response(&reason),

            Self::Update(UpdateCrewMemberError::NotFound(ref id))
            | Self::Delete(DeleteCrewMemberError::NotFound(ref id))
            | Self::Get(GetCrewMemberError::NotFound(ref id)) => {
                not_found_response(format!("Crew member '{}' not found", id))
            },

            Self::List(ListCrewMembersError::InvalidPagination(message)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            },

            Self::Create(CreateCrewMemberError::Database(ref e))
            | Self::Update(UpdateCrewMemberError::Database(ref e))
            | Self::Delete(DeleteCrewMemberError::Database(ref e))
            | Self::Get(GetCrewMemberError::Database(ref e))
            | Self::List(ListCrewMembersError::Database(ref e)) => {
                tracing::error!("Database error in crew member API: {}", e);
                database_error_response()
            },
        }
    }
}
