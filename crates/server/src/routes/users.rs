use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::directory::{UpdateOutcome, User};
use tracing::info;

use crate::{errors::ApiError, observability, state::ServerState};

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "Every stored user", body = [User]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<User>>, ApiError> {
    let _timer = observability::track("list");
    let users = state.directory.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Found", body = User),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<User>, ApiError> {
    let _timer = observability::track("get");
    match state.directory.get_user(id).await? {
        Some(user) => Ok(Json(user)),
        None => {
            observability::record_not_found("get");
            Err(ApiError::NotFound)
        }
    }
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = User,
    responses(
        (status = 200, description = "Created; body carries the assigned id", body = User),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_user(State(state): State<ServerState>, Json(input): Json<User>) -> Result<Json<User>, ApiError> {
    let _timer = observability::track("create");
    let created = state.directory.create_user(input).await?;
    info!(id = ?created.id, "created user");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = User,
    responses(
        (status = 200, description = "Updated", body = User),
        (status = 404, description = "No such user; nothing was created")
    )
)]
pub async fn update_user(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(changes): Json<User>,
) -> Result<Json<User>, ApiError> {
    let _timer = observability::track("update");
    match state.directory.update_user(id, changes).await? {
        UpdateOutcome::Updated(user) => Ok(Json(user)),
        UpdateOutcome::NotFound => {
            observability::record_not_found("update");
            Err(ApiError::NotFound)
        }
    }
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 204, description = "Deleted, or nothing to delete"))
)]
pub async fn delete_user(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let _timer = observability::track("delete");
    state.directory.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
