use serde::{Deserialize, Serialize};

/// A task the user intends to avoid. Avoidance is the productive state
/// here: an active task accrues points, a completed one stops.
///
/// All timestamps are RFC3339 strings and are parsed on use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub created_at: String,
    /// Baseline for elapsed-time computation; reset whenever the task
    /// transitions back to active.
    pub last_avoided_at: String,
    /// Raw count of ticks observed while active, in seconds.
    #[serde(default)]
    pub total_avoidance_time: u64,
    pub is_active: bool,
    /// Derived: `floor((now - last_avoided_at) / 60s)` while active.
    /// Recomputed each tick, never incremented.
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub start_time: Option<String>,
    /// Scheduled end while avoiding, completion stamp once done.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Minutes; display metadata only, no accounting effect.
    #[serde(default)]
    pub estimated_duration: Option<u64>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        !self.is_active
    }
}
