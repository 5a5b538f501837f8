//! Moods and the motivational messages keyed by them

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

const NEUTRAL: &str = "neutral";

/// Moods that shrink the plan to a handful of tasks.
const LOW_ENERGY_MOODS: [&str; 3] = ["tired", "stressed", "lazy"];

/// Task limit for low-energy moods.
pub const LOW_ENERGY_TASK_LIMIT: usize = 3;

/// Task limit for every other mood.
pub const DEFAULT_TASK_LIMIT: usize = 5;

static MOTIVATIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("tired", "Small steps — one tiny win at a time."),
        ("stressed", "Breathe. Focus on one small task first."),
        ("happy", "Great! Use your energy for a strong focus block!"),
        ("lazy", "Do just 10 minutes. You can do that."),
        (NEUTRAL, "Pick one small, one important task."),
    ])
});

/// Motivational message for a mood; unknown moods get the neutral one.
pub fn motivate(mood: &str) -> &'static str {
    let key = mood.to_lowercase();
    MOTIVATIONS
        .get(key.as_str())
        .or_else(|| MOTIVATIONS.get(NEUTRAL))
        .copied()
        .unwrap_or_default()
}

/// Free-text mood, stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mood(String);

impl Mood {
    /// Normalize a user-supplied mood. Empty input becomes `neutral`.
    pub fn new(raw: &str) -> Self {
        if raw.is_empty() {
            Self::neutral()
        } else {
            Self(raw.to_lowercase())
        }
    }

    pub fn neutral() -> Self {
        Self(NEUTRAL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_low_energy(&self) -> bool {
        LOW_ENERGY_MOODS.contains(&self.0.as_str())
    }

    /// How many tasks (from the front of the list) a plan may keep.
    pub fn task_limit(&self) -> usize {
        if self.is_low_energy() {
            LOW_ENERGY_TASK_LIMIT
        } else {
            DEFAULT_TASK_LIMIT
        }
    }

    pub fn motivation(&self) -> &'static str {
        motivate(&self.0)
    }

    pub fn greeting(&self) -> String {
        format!("Here's a tiny plan for when you're {}:", self.0)
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::neutral()
    }
}

impl From<Option<&str>> for Mood {
    fn from(raw: Option<&str>) -> Self {
        raw.map(Mood::new).unwrap_or_default()
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
