//! Sound collaborator
//!
//! The core only asks for loops to start or stop and for one-shot effects.
//! Decoding and output belong to whatever implements [`SoundController`].

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Sounds known to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundId {
    /// Short click played on navigation actions
    Click,
    /// Ticking clock loop for the countdown screen
    Tick,
    /// Alarm loop for the finish screen
    Alarm,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SoundError {
    #[error("sound {0:?} is not loaded yet")]
    NotReady(SoundId),
    #[error("playback of {sound:?} failed: {reason}")]
    Playback { sound: SoundId, reason: String },
}

/// Process-wide audio capability injected into the screen controllers.
///
/// `play_loop` on a playing loop and `stop_loop` on a stopped loop are no-ops.
pub trait SoundController: Send + Sync {
    fn play_loop(&self, sound: SoundId) -> Result<(), SoundError>;
    fn stop_loop(&self, sound: SoundId) -> Result<(), SoundError>;
    fn play_once(&self, sound: SoundId) -> Result<(), SoundError>;
}

/// Swallow a sound failure; timer state never depends on audio
pub fn log_sound_failure(action: &str, result: Result<(), SoundError>) {
    if let Err(e) = result {
        warn!("Failed to {}: {}", action, e);
    }
}

/// Sound controller for the terminal build: tracks loop state and logs it
#[derive(Debug, Default)]
pub struct ConsoleSound {
    loaded: AtomicBool,
    playing: Mutex<HashSet<SoundId>>,
}

impl ConsoleSound {
    /// Create a controller whose resources are still loading
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with every resource ready
    pub fn loaded() -> Self {
        let sound = Self::default();
        sound.mark_loaded();
        sound
    }

    pub fn mark_loaded(&self) {
        self.loaded.store(true, Ordering::SeqCst);
        info!("Sound resources loaded");
    }

    pub fn is_playing(&self, sound: SoundId) -> bool {
        self.playing
            .lock()
            .map(|playing| playing.contains(&sound))
            .unwrap_or(false)
    }

    fn ensure_loaded(&self, sound: SoundId) -> Result<(), SoundError> {
        if self.loaded.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(SoundError::NotReady(sound))
        }
    }

    fn with_playing<R>(
        &self,
        sound: SoundId,
        f: impl FnOnce(&mut HashSet<SoundId>) -> R,
    ) -> Result<R, SoundError> {
        let mut playing = self.playing.lock().map_err(|e| SoundError::Playback {
            sound,
            reason: format!("state lock poisoned: {}", e),
        })?;
        Ok(f(&mut playing))
    }
}

impl SoundController for ConsoleSound {
    fn play_loop(&self, sound: SoundId) -> Result<(), SoundError> {
        self.ensure_loaded(sound)?;
        if self.with_playing(sound, |playing| playing.insert(sound))? {
            info!("Playing {:?} loop", sound);
        }
        Ok(())
    }

    fn stop_loop(&self, sound: SoundId) -> Result<(), SoundError> {
        self.ensure_loaded(sound)?;
        if self.with_playing(sound, |playing| playing.remove(&sound))? {
            info!("Stopped {:?} loop", sound);
        }
        Ok(())
    }

    fn play_once(&self, sound: SoundId) -> Result<(), SoundError> {
        self.ensure_loaded(sound)?;
        debug!("Playing {:?}", sound);
        Ok(())
    }
}
