//! Recording test collaborators

use std::sync::Mutex;

use super::{Navigator, Route, SoundController, SoundError, SoundId};

/// One call made against a [`RecordingSound`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCall {
    Play(SoundId),
    Stop(SoundId),
    Once(SoundId),
}

/// Sound controller that records every call and can be told to fail
#[derive(Debug, Default)]
pub struct RecordingSound {
    calls: Mutex<Vec<SoundCall>>,
    failing: Mutex<bool>,
}

impl RecordingSound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `NotReady`
    pub fn set_failing(&self, failing: bool) {
        if let Ok(mut f) = self.failing.lock() {
            *f = failing;
        }
    }

    pub fn calls(&self) -> Vec<SoundCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Whether the loop is playing according to the last play/stop call
    pub fn is_playing(&self, sound: SoundId) -> bool {
        self.calls()
            .iter()
            .rev()
            .find_map(|call| match *call {
                SoundCall::Play(s) if s == sound => Some(true),
                SoundCall::Stop(s) if s == sound => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn count(&self, call: SoundCall) -> usize {
        self.calls().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: SoundCall, sound: SoundId) -> Result<(), SoundError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.failing.lock().map(|f| *f).unwrap_or(false) {
            return Err(SoundError::NotReady(sound));
        }
        Ok(())
    }
}

impl SoundController for RecordingSound {
    fn play_loop(&self, sound: SoundId) -> Result<(), SoundError> {
        self.record(SoundCall::Play(sound), sound)
    }

    fn stop_loop(&self, sound: SoundId) -> Result<(), SoundError> {
        self.record(SoundCall::Stop(sound), sound)
    }

    fn play_once(&self, sound: SoundId) -> Result<(), SoundError> {
        self.record(SoundCall::Once(sound), sound)
    }
}

/// Navigator that records requested routes
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn count(&self, route: Route) -> usize {
        self.routes().iter().filter(|r| **r == route).count()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}
