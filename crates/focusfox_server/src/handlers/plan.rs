//! Planning endpoint

use axum::{Json, extract::rejection::JsonRejection};
use focusfox_api::{ApiError, requests::PlanRequest, responses::PlanResponse};

/// Handle `POST /focusfox`
pub async fn plan(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected plan request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    respond(request).map(Json)
}

/// Turn a decoded request into a plan.
///
/// Shared by the HTTP handler and the `plan` CLI command.
pub fn respond(request: PlanRequest) -> Result<PlanResponse, ApiError> {
    match serde_json::to_string(&request) {
        Ok(raw) => tracing::info!(request = %raw, "Received plan request"),
        Err(e) => tracing::warn!("Could not encode plan request for logging: {}", e),
    }

    request.validate()?;

    let (tasks, mood, budget) = request.into_parts();
    let plan = focusfox_core::build_plan(&tasks, &mood, budget);

    tracing::debug!(
        %mood,
        %budget,
        entries = plan.plan.len(),
        "Built plan"
    );

    Ok(plan.into())
}
