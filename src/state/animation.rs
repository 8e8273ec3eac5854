//! Frame index state for the countdown and finish animations

use serde::{Deserialize, Serialize};

/// Traversal direction of a bouncing animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ping-pong frame index: 0, 1, .., N-1, N-2, .., 0, 1, ..
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    frame_count: usize,
    current_index: usize,
    direction: Direction,
}

impl AnimationState {
    /// Create a bouncing animation over `frame_count` frames (at least two)
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count: frame_count.max(2),
            current_index: 0,
            direction: Direction::Ascending,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move one frame; the direction turns when a boundary frame is reached
    pub fn advance(&mut self) -> usize {
        let last = self.frame_count - 1;
        match self.direction {
            Direction::Ascending => {
                self.current_index += 1;
                if self.current_index >= last {
                    self.current_index = last;
                    self.direction = Direction::Descending;
                }
            }
            Direction::Descending => {
                self.current_index = self.current_index.saturating_sub(1);
                if self.current_index == 0 {
                    self.direction = Direction::Ascending;
                }
            }
        }
        self.current_index
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
        self.direction = Direction::Ascending;
    }
}

/// Forward-only frame index that wraps to 0 after the last frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishAnimationState {
    frame_count: usize,
    current_index: usize,
}

impl FinishAnimationState {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count: frame_count.max(1),
            current_index: 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn advance(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.frame_count;
        self.current_index
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_sequence_for_four_frames() {
        let mut state = AnimationState::new(4);
        let seq: Vec<usize> = (0..8).map(|_| state.advance()).collect();
        assert_eq!(seq, vec![1, 2, 3, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn bounce_stays_in_bounds_and_turns_only_at_edges() {
        for n in 2..10 {
            let mut state = AnimationState::new(n);
            let mut previous = state.direction();
            for _ in 0..(5 * n) {
                let index = state.advance();
                assert!(index < n);
                if state.direction() != previous {
                    assert!(index == 0 || index == n - 1, "n={} turned at {}", n, index);
                }
                previous = state.direction();
            }
        }
    }

    #[test]
    fn bounce_round_trip_returns_to_start() {
        for n in 2..10 {
            let mut state = AnimationState::new(n);
            for _ in 0..2 * (n - 1) {
                state.advance();
            }
            assert_eq!(state.current_index(), 0);
            assert_eq!(state.direction(), Direction::Ascending);
        }
    }

    #[test]
    fn two_frames_alternate() {
        let mut state = AnimationState::new(2);
        let seq: Vec<usize> = (0..4).map(|_| state.advance()).collect();
        assert_eq!(seq, vec![1, 0, 1, 0]);
    }

    #[test]
    fn reset_returns_to_first_frame_ascending() {
        let mut state = AnimationState::new(4);
        for _ in 0..4 {
            state.advance();
        }
        assert_eq!(state.direction(), Direction::Descending);
        state.reset();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.direction(), Direction::Ascending);
    }

    #[test]
    fn finish_animation_wraps_without_bouncing() {
        let mut state = FinishAnimationState::new(9);
        let seq: Vec<usize> = (0..10).map(|_| state.advance()).collect();
        assert_eq!(seq, vec![1, 2, 3, 4, 5, 6, 7, 8, 0, 1]);
    }
}
