//! State management module
//!
//! This module contains the plain state machines owned by the screen
//! controllers. Nothing in here knows about time or timers.

pub mod animation;
pub mod session;
pub mod snapshot;

// Re-export main types
pub use animation::{AnimationState, Direction, FinishAnimationState};
pub use session::{TickOutcome, TimerSession};
pub use snapshot::{CountdownSnapshot, FinishSnapshot};
