//! Task endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ResourceId};
use crate::http::server::AppState;
use crate::models::{require, NewTask, Task, TaskUpdate};

/// Create task request
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub user_id: Option<i64>,
}

/// GET /tasks - list all tasks
async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.store.list_tasks().await?))
}

/// POST /tasks - create a task
async fn create_task(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = NewTask::new(&require("title", req.title)?, req.completed, req.user_id)?;
    let task = state.store.create_task(task).await?;
    tracing::debug!(id = task.id, user_id = ?task.user_id, "task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/{id} - get a single task
async fn get_task(
    State(state): State<Arc<AppState>>,
    ResourceId(id): ResourceId,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.store.get_task(id).await?))
}

/// PUT /tasks/{id} - update the completed flag
async fn update_task(
    State(state): State<Arc<AppState>>,
    ResourceId(id): ResourceId,
    JsonBody(update): JsonBody<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(state.store.update_task(id, update).await?))
}

/// Task routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task).put(update_task))
}
