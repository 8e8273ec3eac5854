//! Countdown screen controller
//!
//! Owns the [`TimerSession`] and every timer of the countdown screen. All
//! mutation happens through `&mut self`, one event at a time: either an
//! input call (press, focus, button) or [`CountdownController::handle`] for
//! a timer returned by [`CountdownController::next_wakeup`].

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use super::{AnimationCycler, ClockSource, Command, Gesture, GestureClassifier, GestureTimeout};
use crate::{
    config::{DurationInput, Timings, DEFAULT_MINUTES},
    services::{log_sound_failure, Language, Navigator, Route, SoundController, SoundId},
    state::{CountdownSnapshot, TickOutcome, TimerSession},
    timers::Delay,
    utils::format_mm_ss,
};

/// Frames in the countdown animation
pub const COUNTDOWN_FRAMES: usize = 4;

/// Timer that woke the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownWakeup {
    Clock,
    Frame,
    SoundSettled,
    Gesture(GestureTimeout),
}

pub struct CountdownController {
    session: TimerSession,
    clock: ClockSource,
    animation: AnimationCycler,
    gestures: GestureClassifier,
    sound_settle: Delay,
    focused: bool,
    started: bool,
    torn_down: bool,
    language: Language,
    sound: Arc<dyn SoundController>,
    navigator: Arc<dyn Navigator>,
}

impl CountdownController {
    /// Create the controller for a screen visit; nothing runs and no input is
    /// accepted until [`start`](Self::start)
    pub fn new(
        timings: &Timings,
        language: Language,
        sound: Arc<dyn SoundController>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session: TimerSession::idle(DurationInput::seconds(DEFAULT_MINUTES)),
            clock: ClockSource::new(timings.clock),
            animation: AnimationCycler::new(COUNTDOWN_FRAMES, timings.animation),
            gestures: GestureClassifier::new(timings),
            sound_settle: Delay::new(timings.settle),
            focused: false,
            started: false,
            torn_down: false,
            language,
            sound,
            navigator,
        }
    }

    /// Begin a session of `minutes` (0 falls back to the default duration)
    pub fn start(&mut self, minutes: u64) {
        if self.torn_down {
            return;
        }
        let minutes = DurationInput::resolve(i64::try_from(minutes).ok());
        info!("Starting {} minute countdown", minutes);

        self.gestures.clear();
        self.sound_settle.cancel();
        self.session = TimerSession::new(DurationInput::seconds(minutes));
        self.started = true;
        self.clock.restart();
        self.animation.reset();
        self.animation.start();
        if self.focused {
            self.sound_settle.arm();
        }
    }

    pub fn session(&self) -> &TimerSession {
        &self.session
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.session.remaining_seconds()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Started and not yet torn down
    fn is_live(&self) -> bool {
        self.started && !self.torn_down
    }

    pub fn animation(&self) -> &AnimationCycler {
        &self.animation
    }

    pub fn gestures(&self) -> &GestureClassifier {
        &self.gestures
    }

    /// Number of armed timers across the clock, animation, sound delay and gestures
    pub fn pending_timers(&self) -> usize {
        usize::from(self.clock.is_running())
            + usize::from(self.animation.is_running())
            + usize::from(self.sound_settle.is_armed())
            + self.gestures.pending_timers()
    }

    /// Screen gained focus; the tick loop starts after the settling delay
    pub fn on_focus(&mut self) {
        if self.torn_down || self.focused {
            return;
        }
        info!("Countdown screen focused");
        self.focused = true;
        if self.started && self.session.is_active() {
            self.sound_settle.arm();
        }
    }

    /// Screen lost focus; the tick loop stops at once
    pub fn on_blur(&mut self) {
        if self.torn_down || !self.focused {
            return;
        }
        info!("Countdown screen unfocused");
        self.focused = false;
        self.sound_settle.cancel();
        self.stop_tick_sound();
    }

    pub fn pause(&mut self) {
        if !self.is_live() || !self.session.pause() {
            return;
        }
        info!("Countdown paused at {}", format_mm_ss(self.session.remaining_seconds()));
        self.clock.stop();
        self.animation.pause();
        self.sound_settle.cancel();
        self.stop_tick_sound();
    }

    pub fn resume(&mut self) {
        if !self.is_live() || !self.session.resume() {
            return;
        }
        info!("Countdown resumed at {}", format_mm_ss(self.session.remaining_seconds()));
        self.clock.start();
        self.animation.start();
        if self.focused {
            self.play_tick_sound();
        }
    }

    pub fn toggle(&mut self) {
        if self.session.is_running() {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Restore the session's full duration and run again
    pub fn reset(&mut self) {
        let total = self.session.total_seconds();
        self.reset_to_seconds(total);
    }

    /// Restore to a new duration in minutes and run again
    pub fn reset_to(&mut self, minutes: u64) {
        let minutes = DurationInput::resolve(i64::try_from(minutes).ok());
        self.reset_to_seconds(DurationInput::seconds(minutes));
    }

    fn reset_to_seconds(&mut self, total_seconds: u64) {
        if !self.is_live() {
            return;
        }
        info!("Countdown reset to {}", format_mm_ss(total_seconds));
        self.gestures.clear();
        self.sound_settle.cancel();
        self.session.reset(total_seconds);
        self.clock.restart();
        self.animation.reset();
        self.animation.start();
        if self.focused {
            self.play_tick_sound();
        }
    }

    /// Leave for the preparation screen
    pub fn back(&mut self) {
        if self.torn_down {
            return;
        }
        log_sound_failure("play click", self.sound.play_once(SoundId::Click));
        self.teardown();
        self.navigator.navigate_to(Route::EggPreparation);
    }

    pub fn press_in(&mut self) {
        if !self.is_live() {
            return;
        }
        self.gestures.press_in();
    }

    pub fn press_out(&mut self) {
        if !self.is_live() {
            return;
        }
        if let Some(gesture) = self.gestures.press_out() {
            self.apply(gesture);
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::TogglePause => self.toggle(),
            Command::Reset => self.reset(),
            Command::Back => self.back(),
        }
    }

    fn apply(&mut self, gesture: Gesture) {
        debug!("Applying {:?}", gesture);
        self.execute(gesture.command());
    }

    /// Wait for the next armed timer. Cancel safe; pending forever when nothing is armed.
    pub async fn next_wakeup(&mut self) -> CountdownWakeup {
        tokio::select! {
            biased;
            _ = self.clock.tick() => CountdownWakeup::Clock,
            _ = self.animation.tick() => CountdownWakeup::Frame,
            _ = self.sound_settle.fired() => CountdownWakeup::SoundSettled,
            timeout = self.gestures.next_timeout() => CountdownWakeup::Gesture(timeout),
        }
    }

    /// Apply a fired timer
    pub fn handle(&mut self, wakeup: CountdownWakeup) {
        if self.torn_down {
            return;
        }
        match wakeup {
            CountdownWakeup::Clock => match self.session.tick() {
                TickOutcome::Decremented(remaining) => {
                    debug!("Countdown tick: {}", format_mm_ss(remaining));
                }
                TickOutcome::Finished => self.finish(),
                TickOutcome::Ignored => {}
            },
            CountdownWakeup::Frame => {
                if self.session.is_active() {
                    self.animation.advance();
                }
            }
            CountdownWakeup::SoundSettled => {
                if self.focused && self.session.is_active() {
                    self.play_tick_sound();
                }
            }
            CountdownWakeup::Gesture(timeout) => {
                if let Some(gesture) = self.gestures.on_timeout(timeout) {
                    self.apply(gesture);
                }
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

    /// Release every timer and stop the tick loop. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        debug!("Tearing down countdown screen");
        self.release_timers();
        self.stop_tick_sound();
        self.focused = false;
        self.torn_down = true;
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        CountdownSnapshot {
            remaining_seconds: self.session.remaining_seconds(),
            total_seconds: self.session.total_seconds(),
            display: format_mm_ss(self.session.remaining_seconds()),
            running: self.session.is_running(),
            finished: self.session.is_finished(),
            focused: self.focused,
            frame_index: self.animation.current_index(),
            direction: self.animation.direction(),
            heading: self.language.countdown_heading().to_string(),
            timestamp: Utc::now(),
        }
    }

    fn finish(&mut self) {
        info!("Countdown finished");
        self.release_timers();
        self.stop_tick_sound();
        self.navigator.navigate_to(Route::TimerFinish);
    }

    fn release_timers(&mut self) {
        self.clock.stop();
        self.animation.pause();
        self.sound_settle.cancel();
        self.gestures.clear();
    }

    fn play_tick_sound(&self) {
        log_sound_failure("play tick loop", self.sound.play_loop(SoundId::Tick));
    }

    fn stop_tick_sound(&self) {
        log_sound_failure("stop tick loop", self.sound.stop_loop(SoundId::Tick));
    }
}

impl Drop for CountdownController {
    fn drop(&mut self) {
        self.teardown();
    }
}
