//! Health check endpoint
//!
//! Always answers 200; database trouble is reported in the body.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `connected` or `error: <message>`
    pub database: String,
    pub database_url: String,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = match state.store.ping().await {
        Ok(()) => "connected".to_owned(),
        Err(err) => {
            tracing::warn!(error = %err, "health check could not reach database");
            format!("error: {err}")
        }
    };

    Json(HealthResponse {
        status: "ok",
        database,
        database_url: state.database_label.clone(),
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
