//! Screen components module
//!
//! This module contains the timed components of the countdown and finish
//! screens. Each component owns its timers and is driven by one loop.

pub mod animation;
pub mod clock;
pub mod countdown;
pub mod finish;
pub mod gesture;

// Re-export main types
pub use animation::AnimationCycler;
pub use clock::ClockSource;
pub use countdown::{CountdownController, CountdownWakeup, COUNTDOWN_FRAMES};
pub use finish::{FinishAnimator, FinishWakeup, FINISH_FRAMES};
pub use gesture::{Command, Gesture, GestureClassifier, GesturePhase, GestureTimeout};
