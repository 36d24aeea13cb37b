// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Auto-play Bounds
// =============================================================================

/// Carousel auto-play interval bounds (1s to 30s).
pub mod autoplay_bounds {
    /// Minimum interval in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum interval in milliseconds.
    pub const MAX_MS: u64 = 30_000;
    /// Default interval in milliseconds.
    pub const DEFAULT_MS: u64 = 4_000;
}

// =============================================================================
// AutoPlayInterval
// =============================================================================

/// Time between two automatic carousel advances.
///
/// # Example
///
/// ```
/// use evergreen_storefront::domain::ui::AutoPlayInterval;
///
/// assert_eq!(AutoPlayInterval::default().as_millis(), 4_000);
///
/// // Values outside range are clamped
/// assert_eq!(AutoPlayInterval::from_millis(10).as_millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlayInterval(u64);

impl AutoPlayInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(autoplay_bounds::MIN_MS, autoplay_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoPlayInterval {
    fn default() -> Self {
        Self(autoplay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Swipe Bounds
// =============================================================================

/// Swipe threshold bounds in logical pixels.
pub mod swipe_bounds {
    /// Minimum threshold.
    pub const MIN_PX: f32 = 10.0;
    /// Maximum threshold.
    pub const MAX_PX: f32 = 200.0;
    /// Default threshold.
    pub const DEFAULT_PX: f32 = 50.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal distance a drag must exceed before it counts as a swipe.
///
/// The comparison is strict: a drag of exactly the threshold does nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(swipe_bounds::MIN_PX, swipe_bounds::MAX_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when `delta` is far enough, in either direction.
    #[must_use]
    pub fn is_exceeded_by(self, delta: f32) -> bool {
        delta.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_PX)
    }
}
