//! Bouncing frame animation for the countdown screen

use std::time::Duration;

use crate::{
    state::{AnimationState, Direction},
    timers::Ticker,
};

/// Advances a ping-pong frame index on a fixed interval
#[derive(Debug)]
pub struct AnimationCycler {
    state: AnimationState,
    ticker: Ticker,
}

impl AnimationCycler {
    pub fn new(frame_count: usize, interval: Duration) -> Self {
        Self {
            state: AnimationState::new(frame_count),
            ticker: Ticker::new(interval),
        }
    }

    /// Start or continue from the current frame
    pub fn start(&mut self) {
        self.ticker.start();
    }

    /// Stop advancing while keeping the current frame and direction
    pub fn pause(&mut self) {
        self.ticker.cancel();
    }

    /// Back to frame 0 ascending; a running cycler restarts its interval
    pub fn reset(&mut self) {
        self.state.reset();
        if self.ticker.is_armed() {
            self.ticker.restart();
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_armed()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn frame_count(&self) -> usize {
        self.state.frame_count()
    }

    pub async fn tick(&mut self) {
        self.ticker.tick().await
    }

    /// Apply one fired tick
    pub fn advance(&mut self) -> usize {
        self.state.advance()
    }
}
