//! FocusFox core
//!
//! Picks a small, mood-appropriate slice of a task list and splits the
//! available time across it, weighted by priority and estimated effort.
//! Everything here is pure and synchronous; the HTTP surface lives in
//! `focusfox-api` and `focusfox-server`.

pub mod mood;
pub mod planner;
pub mod priority;
pub mod task;
pub mod time;

pub use mood::{Mood, motivate};
pub use planner::{PlanEntry, TinyPlan, build_plan, plan};
pub use priority::Priority;
pub use task::Task;
pub use time::{TimeBudget, TimeSpan};
