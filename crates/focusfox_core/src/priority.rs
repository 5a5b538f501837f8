//! Task priorities and their allocation weights

use serde::{Deserialize, Serialize};

/// How much a task matters relative to the others in the same plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Parse a user-supplied label, case-insensitively.
    ///
    /// Anything that isn't `high`, `medium` or `low` is treated as medium.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// Multiplier applied to a task's estimated minutes when scoring it.
    pub const fn weight(self) -> u64 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
