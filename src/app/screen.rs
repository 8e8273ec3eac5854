//! The screen currently driven by the app loop

use serde::Serialize;

use crate::{
    components::{CountdownController, CountdownWakeup, FinishAnimator, FinishWakeup},
    state::{CountdownSnapshot, FinishSnapshot},
};

pub enum Screen {
    Countdown(CountdownController),
    Finish(FinishAnimator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenWakeup {
    Countdown(CountdownWakeup),
    Finish(FinishWakeup),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum ScreenSnapshot {
    Countdown(CountdownSnapshot),
    Finish(FinishSnapshot),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Countdown(_) => "Timer",
            Screen::Finish(_) => "TimerFinish",
        }
    }

    pub async fn next_wakeup(&mut self) -> ScreenWakeup {
        match self {
            Screen::Countdown(c) => ScreenWakeup::Countdown(c.next_wakeup().await),
            Screen::Finish(f) => ScreenWakeup::Finish(f.next_wakeup().await),
        }
    }

    pub fn handle(&mut self, wakeup: ScreenWakeup) {
        match (self, wakeup) {
            (Screen::Countdown(c), ScreenWakeup::Countdown(w)) => c.handle(w),
            (Screen::Finish(f), ScreenWakeup::Finish(w)) => f.handle(w),
            _ => {}
        }
    }

    pub fn pending_timers(&self) -> usize {
        match self {
            Screen::Countdown(c) => c.pending_timers(),
            Screen::Finish(f) => f.pending_timers(),
        }
    }

    pub fn teardown(&mut self) {
        match self {
            Screen::Countdown(c) => c.teardown(),
            Screen::Finish(f) => f.teardown(),
        }
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        match self {
            Screen::Countdown(c) => ScreenSnapshot::Countdown(c.snapshot()),
            Screen::Finish(f) => ScreenSnapshot::Finish(f.snapshot()),
        }
    }
}
