//! Countdown session state

use tracing::debug;

/// Result of applying one clock tick to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session paused or already at zero; nothing changed
    Ignored,
    /// One second was taken off
    Decremented(u64),
    /// The last second was taken off; emitted once per run
    Finished,
}

/// Remaining-time bookkeeping for one visit to the countdown screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSession {
    total_seconds: u64,
    remaining_seconds: u64,
    running: bool,
    finished: bool,
}

impl TimerSession {
    /// Create a running session; `total_seconds` must be positive
    pub fn new(total_seconds: u64) -> Self {
        let total_seconds = total_seconds.max(1);
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            running: true,
            finished: false,
        }
    }

    /// A paused session that has not started yet
    pub fn idle(total_seconds: u64) -> Self {
        Self {
            running: false,
            ..Self::new(total_seconds)
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the clock and animation should be active
    pub fn is_active(&self) -> bool {
        self.running && self.remaining_seconds > 0
    }

    /// Apply one second of elapsed time
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_active() {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.running = false;
            self.finished = true;
            debug!("Session reached zero after {} seconds", self.total_seconds);
            TickOutcome::Finished
        } else {
            TickOutcome::Decremented(self.remaining_seconds)
        }
    }

    /// Stop decrementing; returns false when there was nothing to pause
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Continue decrementing; a finished session cannot be resumed
    pub fn resume(&mut self) -> bool {
        if self.running || self.finished {
            return false;
        }
        self.running = true;
        true
    }

    /// Restore the full duration and start running again
    pub fn reset(&mut self, total_seconds: u64) {
        *self = Self::new(total_seconds);
    }
}
