// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state
//!
//! Tracks a single horizontal touch (or mouse) drag and turns it into at most
//! one navigation step once it travels farther than the swipe threshold.

use crate::domain::ui::SwipeThreshold;

/// Direction of a carousel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step to the next image.
    Next,
    /// Step to the previous image.
    Previous,
}

/// Manages an in-progress swipe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    /// Whether a drag is currently active
    pub is_dragging: bool,

    /// Horizontal position where the drag started
    pub start_x: Option<f32>,
}

impl GestureState {
    /// Starts a drag at `x`
    pub fn start(&mut self, x: f32) {
        self.is_dragging = true;
        self.start_x = Some(x);
    }

    /// Clears the drag
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_x = None;
    }

    /// Interprets a move to `x`.
    ///
    /// Dragging right (positive delta) means "previous", dragging left means
    /// "next". Once the threshold is crossed the gesture is cleared, so a
    /// single drag never fires twice.
    pub fn track(&mut self, x: f32, threshold: SwipeThreshold) -> Option<Direction> {
        if !self.is_dragging {
            return None;
        }

        let delta = x - self.start_x?;
        if !threshold.is_exceeded_by(delta) {
            return None;
        }

        self.stop();
        Some(if delta > 0.0 {
            Direction::Previous
        } else {
            Direction::Next
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gesture_is_not_dragging() {
        let state = GestureState::default();
        assert!(!state.is_dragging);
        assert!(state.start_x.is_none());
    }

    #[test]
    fn start_records_position() {
        let mut state = GestureState::default();
        state.start(120.0);
        assert!(state.is_dragging);
        assert_eq!(state.start_x, Some(120.0));
    }

    #[test]
    fn stop_clears_state() {
        let mut state = GestureState::default();
        state.start(120.0);
        state.stop();
        assert_eq!(state, GestureState::default());
    }

    #[test]
    fn move_without_start_does_nothing() {
        let mut state = GestureState::default();
        assert_eq!(state.track(500.0, SwipeThreshold::default()), None);
    }

    #[test]
    fn right_swipe_is_previous_and_clears() {
        let mut state = GestureState::default();
        state.start(100.0);
        assert_eq!(
            state.track(160.0, SwipeThreshold::default()),
            Some(Direction::Previous)
        );
        assert!(!state.is_dragging);
        // Still moving after the swipe fired: nothing more happens.
        assert_eq!(state.track(260.0, SwipeThreshold::default()), None);
    }

    #[test]
    fn left_swipe_is_next() {
        let mut state = GestureState::default();
        state.start(100.0);
        assert_eq!(
            state.track(40.0, SwipeThreshold::default()),
            Some(Direction::Next)
        );
    }

    #[test]
    fn short_moves_keep_dragging() {
        let mut state = GestureState::default();
        state.start(100.0);
        assert_eq!(state.track(140.0, SwipeThreshold::default()), None);
        assert_eq!(state.track(60.0, SwipeThreshold::default()), None);
        assert!(state.is_dragging);
    }
}
