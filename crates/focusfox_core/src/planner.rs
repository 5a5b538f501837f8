//! Task selection and proportional time allocation
//!
//! A plan keeps the first few tasks (how many depends on mood), scores each
//! one as `estimated minutes * priority weight`, and hands out the budget in
//! proportion to those scores. Input order is preserved: nothing is sorted
//! by priority or score.
//!
//! Each share is rounded on its own with round-half-to-even, so the
//! allocations can drift a minute or two away from the budget. That drift
//! is part of the observable output and is not corrected.

use serde::{Deserialize, Serialize};

use crate::{
    mood::Mood,
    task::Task,
    time::{TimeBudget, TimeSpan},
};

/// Estimate substituted for tasks that arrive without one, so they still
/// carry weight.
pub const MIN_ESTIMATE_MINUTES: u64 = 5;

/// One task's slice of the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub task: String,
    pub priority: String,
    pub time: TimeSpan,
}

/// A full plan: the allocations plus the mood-specific framing around them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TinyPlan {
    pub greeting: String,
    pub plan: Vec<PlanEntry>,
    pub motivation: String,
}

/// Weighted score for a single task.
fn score(task: &Task) -> u64 {
    let minutes = match task.estimate.total_minutes() {
        0 => MIN_ESTIMATE_MINUTES,
        m => m,
    };
    minutes * task.priority.weight()
}

/// Share of `total_available` owed to a task, rounded half-to-even.
///
/// Computed in `f64` as `(score / total_score) * total_available` so .5
/// boundaries land exactly where the float product puts them.
fn allocate_minutes(score: u64, total_score: u64, total_available: u64) -> u64 {
    if total_score == 0 {
        return 0;
    }
    let share = (score as f64 / total_score as f64) * total_available as f64;
    share.round_ties_even().max(0.0) as u64
}

/// Select the tasks that fit the mood and divide the budget between them.
///
/// Never fails: an empty list yields an empty plan and a zero budget yields
/// zero-length entries.
pub fn plan(tasks: &[Task], mood: &Mood, budget: TimeBudget) -> Vec<PlanEntry> {
    let limit = mood.task_limit();
    let kept = &tasks[..tasks.len().min(limit)];

    if kept.is_empty() {
        tracing::debug!(%mood, "no tasks to plan");
        return Vec::new();
    }

    let total_available = budget.total_minutes();
    let scores: Vec<u64> = kept.iter().map(score).collect();
    let total_score: u64 = scores.iter().sum();

    tracing::debug!(
        %mood,
        submitted = tasks.len(),
        kept = kept.len(),
        total_available,
        total_score,
        "allocating plan"
    );

    kept.iter()
        .zip(scores)
        .map(|(task, score)| PlanEntry {
            task: task.name.clone(),
            priority: task.priority_label.clone(),
            time: TimeSpan::from_minutes(allocate_minutes(score, total_score, total_available)),
        })
        .collect()
}

/// [`plan`] plus the greeting and motivation for the mood.
pub fn build_plan(tasks: &[Task], mood: &Mood, budget: TimeBudget) -> TinyPlan {
    TinyPlan {
        greeting: mood.greeting(),
        plan: plan(tasks, mood, budget),
        motivation: mood.motivation().to_string(),
    }
}
