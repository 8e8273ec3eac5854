//! External collaborators module
//!
//! This module contains the interfaces the screen controllers call into
//! (sound, navigation, language) and the concrete implementations used by
//! the binary and by tests.

pub mod language;
pub mod navigation;
pub mod recording;
pub mod sound;

// Re-export main types
pub use language::Language;
pub use navigation::{ChannelNavigator, Navigator, Route};
pub use recording::{RecordingNavigator, RecordingSound, SoundCall};
pub use sound::{log_sound_failure, ConsoleSound, SoundController, SoundError, SoundId};
