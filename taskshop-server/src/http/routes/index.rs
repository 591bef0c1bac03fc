//! Service metadata endpoint

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Paths of the top-level resources
#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub users: &'static str,
    pub tasks: &'static str,
    pub products: &'static str,
}

/// Index response
#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// GET /
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Taskshop API is running",
        version: "1.0",
        endpoints: Endpoints {
            health: "/health",
            users: "/users",
            tasks: "/tasks",
            products: "/products",
        },
    })
}

/// Index routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
