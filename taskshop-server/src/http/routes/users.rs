//! User endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ResourceId};
use crate::http::server::AppState;
use crate::models::{require, NewUser, Task, User};

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.store.list_users().await?))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = NewUser::new(&require("name", req.name)?, &require("email", req.email)?)?;
    let user = state.store.create_user(user).await?;
    tracing::debug!(id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    ResourceId(id): ResourceId,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.store.get_user(id).await?))
}

/// GET /users/{id}/tasks - tasks owned by a user
async fn list_user_tasks(
    State(state): State<Arc<AppState>>,
    ResourceId(id): ResourceId,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.store.list_user_tasks(id).await?))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/tasks", get(list_user_tasks))
}
