// SPDX-License-Identifier: MPL-2.0
//! Carousel cursor state
//!
//! A cyclic index over a [`MediaSequence`]. Every step wraps with modular
//! arithmetic, so the cursor stays in `[0, len)` no matter how many steps
//! are taken in either direction.
//!
//! # Example
//!
//! ```
//! use evergreen_storefront::ui::state::CarouselState;
//!
//! let mut carousel = CarouselState::new(3);
//! carousel.previous();
//! assert_eq!(carousel.cursor(), 2);
//! carousel.next();
//! assert_eq!(carousel.cursor(), 0);
//! ```

use super::gesture::{Direction, GestureState};
use crate::domain::media::MediaSequence;
use crate::domain::ui::SwipeThreshold;

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    cursor: usize,
    len: usize,
    gesture: GestureState,
    swipe_threshold: SwipeThreshold,
}

impl CarouselState {
    /// Creates a carousel over `len` items. A length of zero is treated as one,
    /// matching the placeholder substitution of [`MediaSequence`].
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            len: len.max(1),
            gesture: GestureState::default(),
            swipe_threshold: SwipeThreshold::default(),
        }
    }

    #[must_use]
    pub fn for_sequence(sequence: &MediaSequence) -> Self {
        Self::new(sequence.len())
    }

    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Navigation controls are only shown when there is somewhere to go.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Advances by one, wrapping to the start. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.cursor = (self.cursor + 1) % self.len;
        true
    }

    /// Steps back by one, wrapping to the end. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        // Add before taking the modulus so the intermediate value never underflows.
        self.cursor = (self.cursor + self.len - 1) % self.len;
        true
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    /// Jumps straight to `index`.
    ///
    /// Callers (thumbnail strips, lightbox openers) must pass an index in
    /// `[0, len)`. Debug builds assert this; release builds wrap the index so
    /// the cursor invariant still holds.
    pub fn goto(&mut self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "carousel index {index} out of range for {} items",
            self.len
        );
        let index = index % self.len;
        let moved = index != self.cursor;
        self.cursor = index;
        moved
    }

    /// Begins a swipe at horizontal position `x`.
    pub fn on_touch_start(&mut self, x: f32) {
        self.gesture.start(x);
    }

    /// Feeds a move to the active swipe. Returns whether the cursor moved.
    pub fn on_touch_move(&mut self, x: f32) -> bool {
        match self.gesture.track(x, self.swipe_threshold) {
            Some(direction) => self.step(direction),
            None => false,
        }
    }

    /// Ends the swipe, whatever state it was in.
    pub fn on_touch_end(&mut self) {
        self.gesture.stop();
    }
}
