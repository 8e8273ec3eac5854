//! Tap / double-tap / long-press classification
//!
//! Raw press events go in, at most one [`Gesture`] comes out per completed
//! sequence. Single taps are only reported once the double-tap window has
//! closed, and a long press suppresses every tap of the sequence it ends.

use tracing::debug;

use crate::{config::Timings, timers::Delay};

/// Classified user gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SingleTap,
    DoubleTap,
    LongPress,
}

/// Countdown command bound to a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Reset,
    Back,
}

impl Gesture {
    pub fn command(self) -> Command {
        match self {
            Gesture::SingleTap => Command::TogglePause,
            Gesture::DoubleTap => Command::Reset,
            Gesture::LongPress => Command::Back,
        }
    }
}

/// Which gesture timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTimeout {
    LongPress,
    TapWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// First press held; long-press timer armed
    Pressed,
    /// First press released; tap window armed
    AwaitingSecondTap,
    /// Second press held inside the tap window
    SecondPress,
    /// Long press reported; waiting for release
    LongPressFired,
}

#[derive(Debug)]
pub struct GestureClassifier {
    phase: GesturePhase,
    long_press: Delay,
    tap_window: Delay,
}

impl GestureClassifier {
    pub fn new(timings: &Timings) -> Self {
        Self {
            phase: GesturePhase::Idle,
            long_press: Delay::new(timings.long_press),
            tap_window: Delay::new(timings.double_tap),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Taps seen in the current sequence that are not yet classified
    pub fn pending_tap_count(&self) -> u8 {
        match self.phase {
            GesturePhase::AwaitingSecondTap | GesturePhase::SecondPress => 1,
            _ => 0,
        }
    }

    pub fn long_press_armed(&self) -> bool {
        self.long_press.is_armed()
    }

    pub fn pending_timers(&self) -> usize {
        usize::from(self.long_press.is_armed()) + usize::from(self.tap_window.is_armed())
    }

    pub fn press_in(&mut self) {
        self.phase = match self.phase {
            GesturePhase::Idle | GesturePhase::LongPressFired => {
                self.long_press.arm();
                GesturePhase::Pressed
            }
            GesturePhase::AwaitingSecondTap => {
                self.long_press.arm();
                GesturePhase::SecondPress
            }
            held @ (GesturePhase::Pressed | GesturePhase::SecondPress) => held,
        };
    }

    pub fn press_out(&mut self) -> Option<Gesture> {
        match self.phase {
            GesturePhase::Pressed => {
                self.long_press.cancel();
                self.tap_window.arm();
                self.phase = GesturePhase::AwaitingSecondTap;
                None
            }
            GesturePhase::SecondPress => {
                self.clear();
                self.emit(Gesture::DoubleTap)
            }
            GesturePhase::LongPressFired => {
                self.clear();
                None
            }
            GesturePhase::Idle | GesturePhase::AwaitingSecondTap => None,
        }
    }

    /// Wait for whichever gesture timer fires first
    pub async fn next_timeout(&mut self) -> GestureTimeout {
        tokio::select! {
            biased;
            _ = self.long_press.fired() => GestureTimeout::LongPress,
            _ = self.tap_window.fired() => GestureTimeout::TapWindow,
        }
    }

    /// Apply a fired gesture timer
    pub fn on_timeout(&mut self, timeout: GestureTimeout) -> Option<Gesture> {
        match (timeout, self.phase) {
            (GestureTimeout::LongPress, GesturePhase::Pressed | GesturePhase::SecondPress) => {
                self.long_press.cancel();
                self.tap_window.cancel();
                self.phase = GesturePhase::LongPressFired;
                self.emit(Gesture::LongPress)
            }
            (GestureTimeout::TapWindow, GesturePhase::AwaitingSecondTap) => {
                self.phase = GesturePhase::Idle;
                self.emit(Gesture::SingleTap)
            }
            (GestureTimeout::TapWindow, GesturePhase::SecondPress) => {
                // The held second press starts a new sequence
                self.phase = GesturePhase::Pressed;
                self.emit(Gesture::SingleTap)
            }
            _ => None,
        }
    }

    /// Drop any sequence in progress and release both timers
    pub fn clear(&mut self) {
        self.long_press.cancel();
        self.tap_window.cancel();
        self.phase = GesturePhase::Idle;
    }

    fn emit(&self, gesture: Gesture) -> Option<Gesture> {
        debug!("Gesture classified: {:?}", gesture);
        Some(gesture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{advance, timeout, Instant};

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(&Timings::default())
    }

    /// Collect gestures produced by timers within `window`
    async fn settle(classifier: &mut GestureClassifier, window: Duration) -> Vec<Gesture> {
        let deadline = Instant::now() + window;
        let mut out = Vec::new();
        while let Ok(t) = tokio::time::timeout_at(deadline, classifier.next_timeout()).await {
            out.extend(classifier.on_timeout(t));
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn single_tap_is_reported_after_window() {
        let mut c = classifier();
        c.press_in();
        advance(Duration::from_millis(100)).await;
        assert_eq!(c.press_out(), None);
        assert_eq!(c.pending_tap_count(), 1);

        let start = Instant::now();
        let t = c.next_timeout().await;
        assert_eq!(start.elapsed(), Duration::from_millis(300));
        assert_eq!(c.on_timeout(t), Some(Gesture::SingleTap));
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn double_tap_suppresses_single_tap() {
        let mut c = classifier();
        c.press_in();
        assert_eq!(c.press_out(), None);
        advance(Duration::from_millis(100)).await;
        c.press_in();
        advance(Duration::from_millis(50)).await;
        assert_eq!(c.press_out(), Some(Gesture::DoubleTap));
        assert_eq!(c.pending_timers(), 0);

        assert!(settle(&mut c, Duration::from_secs(2)).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn long_press_fires_while_held() {
        let mut c = classifier();
        c.press_in();
        assert!(c.long_press_armed());
        let start = Instant::now();
        let t = c.next_timeout().await;
        assert_eq!(start.elapsed(), Duration::from_millis(800));
        assert_eq!(c.on_timeout(t), Some(Gesture::LongPress));

        advance(Duration::from_millis(500)).await;
        assert_eq!(c.press_out(), None);
        assert!(settle(&mut c, Duration::from_secs(2)).await.is_empty());
        assert_eq!(c.phase(), GesturePhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn release_before_threshold_is_not_a_long_press() {
        let mut c = classifier();
        c.press_in();
        advance(Duration::from_millis(790)).await;
        c.press_out();
        assert!(!c.long_press_armed());
        assert_eq!(
            settle(&mut c, Duration::from_secs(2)).await,
            vec![Gesture::SingleTap]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn long_second_press_reports_long_press_only() {
        let mut c = classifier();
        c.press_in();
        c.press_out();
        advance(Duration::from_millis(100)).await;
        c.press_in();
        // window closes while held: first tap is reported, then the hold becomes a long press
        let gestures = settle(&mut c, Duration::from_millis(900)).await;
        assert_eq!(gestures, vec![Gesture::SingleTap, Gesture::LongPress]);
        assert_eq!(c.press_out(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_cancels_everything() {
        let mut c = classifier();
        c.press_in();
        c.press_out();
        c.clear();
        c.clear();
        assert_eq!(c.pending_timers(), 0);
        assert!(timeout(Duration::from_secs(2), c.next_timeout()).await.is_err());
    }

    #[test]
    fn stray_release_is_ignored() {
        let mut c = classifier();
        assert_eq!(c.press_out(), None);
        assert_eq!(c.phase(), GesturePhase::Idle);
    }

    #[test]
    fn gestures_map_to_commands() {
        assert_eq!(Gesture::SingleTap.command(), Command::TogglePause);
        assert_eq!(Gesture::DoubleTap.command(), Command::Reset);
        assert_eq!(Gesture::LongPress.command(), Command::Back);
    }
}
