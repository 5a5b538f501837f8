//! API request types
//!
//! Optional fields may be omitted or sent as `null`; both mean "use the
//! default". Normalization into core types happens here, once, so the
//! planner only ever sees clean input.

use focusfox_core::{Mood, Task, TimeBudget, TimeSpan};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ApiEndpoint, ApiError, FieldError};

/// Status check (`GET /`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StatusRequest;

impl ApiEndpoint for StatusRequest {
    const PATH: &'static str = "/";
}

/// Estimated effort for a task. Each field defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimeEstimate {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
}

/// Time the user has available. Missing fields default to 0 hours and
/// 30 minutes independently, so `{"hours": 1}` means an hour and a half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimeAvailable {
    #[serde(default)]
    pub hours: u32,
    #[serde(default = "default_available_minutes")]
    pub minutes: u32,
}

fn default_available_minutes() -> u32 {
    TimeSpan::default_budget().minutes
}

impl Default for TimeAvailable {
    fn default() -> Self {
        let budget = TimeSpan::default_budget();
        Self {
            hours: budget.hours,
            minutes: budget.minutes,
        }
    }
}

/// A task as submitted by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<TimeEstimate>,
    /// `high`, `medium` or `low`; anything else counts as medium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Planning request (`POST /focusfox`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlanRequest {
    pub tasks: Vec<TaskItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_available: Option<TimeAvailable>,
}

impl ApiEndpoint for PlanRequest {
    const PATH: &'static str = "/focusfox";
}

impl From<TimeEstimate> for TimeSpan {
    fn from(estimate: TimeEstimate) -> Self {
        TimeSpan::new(estimate.hours, estimate.minutes)
    }
}

impl From<TimeAvailable> for TimeSpan {
    fn from(available: TimeAvailable) -> Self {
        TimeSpan::new(available.hours, available.minutes)
    }
}

impl From<TaskItem> for Task {
    fn from(item: TaskItem) -> Self {
        let task = Task::new(item.name).with_estimate(item.estimated_time.unwrap_or_default().into());
        match item.priority {
            Some(label) => task.with_priority_label(label),
            None => task,
        }
    }
}

impl PlanRequest {
    /// Reject shapes that deserialize fine but can't be planned.
    ///
    /// Currently that is only tasks with an empty name.
    pub fn validate(&self) -> Result<(), ApiError> {
        let fields: Vec<FieldError> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.name.is_empty())
            .map(|(i, _)| FieldError {
                field: format!("tasks[{i}].name"),
                message: "Task name cannot be empty".to_string(),
            })
            .collect();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_with_fields(
                "One or more tasks are invalid",
                fields,
            ))
        }
    }

    pub fn mood(&self) -> Mood {
        Mood::from(self.mood.as_deref())
    }

    pub fn budget(&self) -> TimeBudget {
        self.time_available.unwrap_or_default().into()
    }

    /// Split into normalized planner inputs.
    pub fn into_parts(self) -> (Vec<Task>, Mood, TimeBudget) {
        let mood = self.mood();
        let budget = self.budget();
        let tasks = self.tasks.into_iter().map(Task::from).collect();
        (tasks, mood, budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focusfox_core::Priority;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> PlanRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_request_uses_defaults() {
        let request = parse(r#"{"tasks": [{"name": "write"}]}"#);
        let (tasks, mood, budget) = request.into_parts();

        assert_eq!(mood, Mood::neutral());
        assert_eq!(budget, TimeSpan::new(0, 30));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].estimate, TimeSpan::new(0, 0));
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert_eq!(tasks[0].priority_label, "medium");
    }

    #[test]
    fn test_nulls_mean_defaults() {
        let request = parse(
            r#"{
                "tasks": [{"name": "a", "estimated_time": null, "priority": null}],
                "mood": null,
                "time_available": null
            }"#,
        );
        assert_eq!(request.mood(), Mood::neutral());
        assert_eq!(request.budget(), TimeSpan::new(0, 30));
        let task = Task::from(request.tasks[0].clone());
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.priority_label, "medium");
    }

    #[test]
    fn test_whitespace_names_are_accepted() {
        let request = parse(r#"{"tasks": [{"name": "  "}]}"#);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_partial_time_available_keeps_field_defaults() {
        let request = parse(r#"{"tasks": [], "time_available": {"hours": 1}}"#);
        assert_eq!(request.budget(), TimeSpan::new(1, 30));

        let request = parse(r#"{"tasks": [], "time_available": {"minutes": 10}}"#);
        assert_eq!(request.budget(), TimeSpan::new(0, 10));
    }

    #[test]
    fn test_priority_label_kept_verbatim() {
        let request = parse(r#"{"tasks": [{"name": "a", "priority": "HIGH"}]}"#);
        let (tasks, _, _) = request.into_parts();
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[0].priority_label, "HIGH");
    }

    #[test]
    fn test_mood_is_lowercased() {
        let request = parse(r#"{"tasks": [], "mood": "Stressed"}"#);
        assert_eq!(request.mood().as_str(), "stressed");
    }

    #[test]
    fn test_missing_tasks_is_rejected() {
        assert!(serde_json::from_str::<PlanRequest>(r#"{"mood": "happy"}"#).is_err());
    }

    #[test]
    fn test_missing_task_name_is_rejected() {
        assert!(serde_json::from_str::<PlanRequest>(r#"{"tasks": [{"priority": "low"}]}"#).is_err());
    }

    #[test]
    fn test_negative_minutes_are_rejected() {
        let json = r#"{"tasks": [{"name": "a", "estimated_time": {"minutes": -5}}]}"#;
        assert!(serde_json::from_str::<PlanRequest>(json).is_err());
    }

    #[test]
    fn test_empty_names_fail_validation() {
        let request = parse(r#"{"tasks": [{"name": "ok"}, {"name": ""}]}"#);
        match request.validate() {
            Err(ApiError::ValidationError {
                fields: Some(fields),
                ..
            }) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "tasks[1].name");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
