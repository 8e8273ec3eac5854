//! Timer handles module
//!
//! Every timer in the application is a value owned by the component that
//! started it. Dropping or cancelling the handle releases the timer.

pub mod delay;
pub mod ticker;

// Re-export main types
pub use delay::Delay;
pub use ticker::Ticker;
