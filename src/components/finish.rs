//! Finish screen controller: looping egg animation and alarm

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::{
    config::Timings,
    services::{log_sound_failure, Language, Navigator, Route, SoundController, SoundId},
    state::{FinishAnimationState, FinishSnapshot},
    timers::{Delay, Ticker},
};

/// Frames in the finish animation
pub const FINISH_FRAMES: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishWakeup {
    Frame,
    AlarmSettled,
}

/// Runs the alarm and the wrap-around animation while the finish screen has focus.
///
/// The animation has no end of its own. It stops on blur, teardown or
/// [`close`](Self::close).
pub struct FinishAnimator {
    state: FinishAnimationState,
    ticker: Ticker,
    alarm_settle: Delay,
    focused: bool,
    closed: bool,
    language: Language,
    sound: Arc<dyn SoundController>,
    navigator: Arc<dyn Navigator>,
}

impl FinishAnimator {
    pub fn new(
        timings: &Timings,
        language: Language,
        sound: Arc<dyn SoundController>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            state: FinishAnimationState::new(FINISH_FRAMES),
            ticker: Ticker::new(timings.animation),
            alarm_settle: Delay::new(timings.settle),
            focused: false,
            closed: false,
            language,
            sound,
            navigator,
        }
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn is_animating(&self) -> bool {
        self.ticker.is_armed()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn pending_timers(&self) -> usize {
        usize::from(self.ticker.is_armed()) + usize::from(self.alarm_settle.is_armed())
    }

    /// Start the animation from the first frame; the alarm follows after the settling delay
    pub fn on_focus(&mut self) {
        if self.closed || self.focused {
            return;
        }
        info!("Finish screen focused");
        self.focused = true;
        self.state.reset();
        self.ticker.restart();
        self.alarm_settle.arm();
    }

    pub fn on_blur(&mut self) {
        if !self.focused {
            return;
        }
        info!("Finish screen unfocused");
        self.focused = false;
        self.release();
    }

    /// Stop everything and return to the home screen
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        info!("Finish screen closed");
        log_sound_failure("play click", self.sound.play_once(SoundId::Click));
        self.teardown();
        self.navigator.navigate_to(Route::Home);
    }

    /// Release both timers and stop the alarm. Idempotent.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        debug!("Tearing down finish screen");
        self.focused = false;
        self.closed = true;
        self.release();
    }

    pub async fn next_wakeup(&mut self) -> FinishWakeup {
        tokio::select! {
            biased;
            _ = self.alarm_settle.fired() => FinishWakeup::AlarmSettled,
            _ = self.ticker.tick() => FinishWakeup::Frame,
        }
    }

    pub fn handle(&mut self, wakeup: FinishWakeup) {
        if !self.focused {
            return;
        }
        match wakeup {
            FinishWakeup::Frame => {
                self.state.advance();
            }
            FinishWakeup::AlarmSettled => {
                log_sound_failure("play alarm loop", self.sound.play_loop(SoundId::Alarm));
            }
        }
    }

    /// Process timers for `duration` of (possibly paused) tokio time
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            tokio::select! {
                biased;
                wakeup = self.next_wakeup() => self.handle(wakeup),
                _ = sleep_until(deadline) => break,
            }
        }
    }

    pub fn snapshot(&self) -> FinishSnapshot {
        FinishSnapshot {
            frame_index: self.state.current_index(),
            animating: self.is_animating(),
            focused: self.focused,
            closed: self.closed,
            heading: self.language.finish_heading().to_string(),
            timestamp: Utc::now(),
        }
    }

    fn release(&mut self) {
        self.alarm_settle.cancel();
        self.ticker.cancel();
        log_sound_failure("stop alarm loop", self.sound.stop_loop(SoundId::Alarm));
    }
}

impl Drop for FinishAnimator {
    fn drop(&mut self) {
        self.teardown();
    }
}
