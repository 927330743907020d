use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Urgency of a task. Lower value = more urgent (1 outranks 3).
///
/// No bounds are enforced; zero, negative and fractional values are accepted
/// as-is. Ordering is `f64::total_cmp`, so every value (NaN included) has a
/// fixed place and sorting never panics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(f64);

impl Priority {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(1.0)
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
