// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the toolkit-independent state logic behind the
//! carousels and lightbox, kept apart from the views that render it.

pub mod autoplay;
pub mod carousel;
pub mod gesture;
pub mod scroll_lock;

// Re-export commonly used types for convenience
pub use autoplay::AutoPlay;
pub use carousel::CarouselState;
pub use gesture::{Direction, GestureState};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
