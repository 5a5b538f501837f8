//! API response types

use focusfox_core::{PlanEntry, TinyPlan};
use serde::{Deserialize, Serialize};

/// Message returned by the status route
pub const STATUS_MESSAGE: &str = "FocusFox API is running!";

/// Status response (`GET /`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self {
            message: STATUS_MESSAGE.to_string(),
        }
    }
}

/// Planning response (`POST /focusfox`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Mood-specific opener
    pub greeting: String,
    /// Selected tasks in submission order, each with its time slice
    pub plan: Vec<PlanEntry>,
    /// Motivational message keyed by mood
    pub motivation: String,
}

impl From<TinyPlan> for PlanResponse {
    fn from(plan: TinyPlan) -> Self {
        Self {
            greeting: plan.greeting,
            plan: plan.plan,
            motivation: plan.motivation,
        }
    }
}
