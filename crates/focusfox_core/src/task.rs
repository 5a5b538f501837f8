//! Normalized tasks as the planner sees them

use crate::{priority::Priority, time::TimeSpan};

/// A task after ingestion: defaults applied, priority parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,

    /// Zero when the user gave no estimate
    pub estimate: TimeSpan,

    /// Parsed priority used for weighting
    pub priority: Priority,

    /// Priority label exactly as the user submitted it, echoed back in plans
    pub priority_label: String,
}

impl Task {
    /// A medium-priority task with no estimate.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            estimate: TimeSpan::default(),
            priority: Priority::Medium,
            priority_label: Priority::Medium.as_str().to_string(),
        }
    }

    pub fn with_estimate(mut self, estimate: TimeSpan) -> Self {
        self.estimate = estimate;
        self
    }

    /// Set the priority from a free-form label, keeping the label verbatim.
    pub fn with_priority_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.priority = Priority::from_label(&label);
        self.priority_label = label;
        self
    }
}
