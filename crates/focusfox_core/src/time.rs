//! Hour/minute spans used for estimates, budgets and allocations

use serde::{Deserialize, Serialize};

/// A duration expressed the way users type it: whole hours plus minutes.
///
/// `minutes` is not required to be below 60 on input (`{"hours": 0,
/// "minutes": 90}` is a valid estimate); spans produced by
/// [`TimeSpan::from_minutes`] are always normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    pub hours: u32,
    pub minutes: u32,
}

/// Total time the user has available for the plan.
pub type TimeBudget = TimeSpan;

impl TimeSpan {
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Budget used when the request does not carry one: half an hour.
    pub const fn default_budget() -> Self {
        Self::new(0, 30)
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * 60 + u64::from(self.minutes)
    }

    /// Split a minute count into hours and a `0..60` remainder.
    ///
    /// Saturates at `u32::MAX` hours.
    pub fn from_minutes(total: u64) -> Self {
        let hours = u32::try_from(total / 60).unwrap_or(u32::MAX);
        let minutes = (total % 60) as u32;
        Self { hours, minutes }
    }
}

impl std::fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h{:02}m", self.hours, self.minutes)
    }
}
