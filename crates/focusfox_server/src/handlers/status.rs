//! Status endpoint

use axum::Json;
use focusfox_api::responses::StatusResponse;

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::default())
}
