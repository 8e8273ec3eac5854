//! Observable screen state for display and status output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Direction;

/// Point-in-time view of the countdown screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub remaining_seconds: u64,
    pub total_seconds: u64,
    /// Remaining time rendered as MM:SS
    pub display: String,
    pub running: bool,
    pub finished: bool,
    pub focused: bool,
    pub frame_index: usize,
    pub direction: Direction,
    pub heading: String,
    pub timestamp: DateTime<Utc>,
}

/// Point-in-time view of the finish screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishSnapshot {
    pub frame_index: usize,
    pub animating: bool,
    pub focused: bool,
    pub closed: bool,
    pub heading: String,
    pub timestamp: DateTime<Utc>,
}
