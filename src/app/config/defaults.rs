// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The carousel bounds live next to the newtypes that enforce them and are
//! re-exported here so settings code has a single place to look.
//!
//! # Categories
//!
//! - **Carousel**: Auto-play and swipe behavior
//! - **Window**: Initial window geometry

pub use crate::domain::ui::newtypes::{autoplay_bounds, swipe_bounds};

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Product card carousels advance on their own unless disabled.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default time between auto-play advances, in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = autoplay_bounds::DEFAULT_MS;

/// Default swipe threshold, in logical pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::DEFAULT_PX;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;
