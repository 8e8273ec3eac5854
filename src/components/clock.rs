//! One-second countdown clock

use std::time::Duration;

use tracing::debug;

use crate::timers::Ticker;

/// Periodic source of countdown ticks
#[derive(Debug)]
pub struct ClockSource {
    ticker: Ticker,
}

impl ClockSource {
    pub fn new(period: Duration) -> Self {
        Self {
            ticker: Ticker::new(period),
        }
    }

    /// Start ticking unless already running
    pub fn start(&mut self) {
        if !self.ticker.is_armed() {
            debug!("Clock started");
        }
        self.ticker.start();
    }

    /// Start a fresh period from now
    pub fn restart(&mut self) {
        debug!("Clock restarted");
        self.ticker.restart();
    }

    pub fn stop(&mut self) {
        if self.ticker.is_armed() {
            debug!("Clock stopped");
        }
        self.ticker.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_armed()
    }

    pub async fn tick(&mut self) {
        self.ticker.tick().await
    }
}
