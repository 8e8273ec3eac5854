//! Egg Timer - countdown, animation and sound cues for boiling eggs
//!
//! This library provides the timed core of the egg timer: the countdown
//! screen controller with its gesture handling and bouncing animation, and
//! the finish screen with its alarm loop. Sound and navigation are injected
//! collaborators.

pub mod app;
pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod timers;
pub mod utils;

// Re-export commonly used types
pub use app::{App, Exit, Input};
pub use components::{CountdownController, FinishAnimator, GestureClassifier};
pub use config::{Config, Timings};
pub use services::{Language, Navigator, Route, SoundController, SoundId};
pub use utils::signals::shutdown_signal;
