//! HTTP request handlers

use axum::{
    Router,
    routing::{get, post},
};

pub mod plan;
pub mod status;

/// Build all API routes
pub fn routes() -> Router {
    use focusfox_api::{ApiEndpoint, requests::*};

    Router::new()
        // Status check
        .route(StatusRequest::PATH, get(status::status))
        // Planning
        .route(PlanRequest::PATH, post(plan::plan))
}
