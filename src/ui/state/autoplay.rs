// SPDX-License-Identifier: MPL-2.0
//! Carousel auto-play timer and its progress indicator.
//!
//! The timer only runs while auto-play is enabled, the carousel has more than
//! one item, and the pointer is not hovering it. Each cycle starts at 0%
//! progress and fires once the interval has fully elapsed. A cycle restarts
//! whenever the cursor changes or hover toggles.
//!
//! Time is passed in explicitly, so the whole state machine can be driven
//! from tests without sleeping.

use crate::domain::ui::AutoPlayInterval;
use std::time::{Duration, Instant};

/// Interval at which the host should deliver ticks while the timer runs.
/// Short enough for the progress bar to animate smoothly.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq)]
pub struct AutoPlay {
    enabled: bool,
    interval: AutoPlayInterval,
    hovering: bool,
    cycle_start: Option<Instant>,
}

impl AutoPlay {
    #[must_use]
    pub fn new(enabled: bool, interval: AutoPlayInterval) -> Self {
        Self {
            enabled,
            interval,
            hovering: false,
            cycle_start: None,
        }
    }

    /// Auto-play switched off.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(false, AutoPlayInterval::default())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn interval(&self) -> AutoPlayInterval {
        self.interval
    }

    /// Whether the timer should be subscribed for a carousel of `len` items.
    #[must_use]
    pub fn is_running(&self, len: usize) -> bool {
        self.enabled && len > 1 && !self.hovering
    }

    /// Starts a fresh cycle at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.cycle_start = Some(now);
    }

    /// Records a hover change. Entering pauses the timer; leaving restarts
    /// it from zero.
    pub fn set_hovering(&mut self, hovering: bool, now: Instant) {
        if self.hovering == hovering {
            return;
        }
        self.hovering = hovering;
        if hovering {
            self.cycle_start = None;
        } else {
            self.restart(now);
        }
    }

    /// Handles a timer tick. Returns `true` when the carousel should advance;
    /// a new cycle is started in that case.
    pub fn tick(&mut self, len: usize, now: Instant) -> bool {
        if !self.is_running(len) {
            return false;
        }

        let start = *self.cycle_start.get_or_insert(now);
        if now.saturating_duration_since(start) >= self.interval.as_duration() {
            self.restart(now);
            true
        } else {
            false
        }
    }

    /// Fraction of the current cycle that has elapsed, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self, len: usize, now: Instant) -> f32 {
        if !self.is_running(len) {
            return 0.0;
        }
        let Some(start) = self.cycle_start else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        (elapsed / self.interval.as_duration().as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self::new(true, AutoPlayInterval::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_after_full_interval() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::default();
        autoplay.restart(t0);

        assert!(!autoplay.tick(3, t0 + ms(3_999)));
        assert!(autoplay.tick(3, t0 + ms(4_000)));
        // New cycle started at the firing tick.
        assert!(!autoplay.tick(3, t0 + ms(4_050)));
        assert!(autoplay.tick(3, t0 + ms(8_000)));
    }

    #[test]
    fn first_tick_starts_a_cycle() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::default();
        assert!(!autoplay.tick(3, t0));
        assert!(autoplay.tick(3, t0 + ms(4_000)));
    }

    #[test]
    fn never_fires_for_a_single_item() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::default();
        autoplay.restart(t0);
        assert!(!autoplay.is_running(1));
        assert!(!autoplay.tick(1, t0 + ms(60_000)));
    }

    #[test]
    fn disabled_never_fires() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::disabled();
        autoplay.restart(t0);
        assert!(!autoplay.tick(3, t0 + ms(60_000)));
    }

    #[test]
    fn hovering_cancels_and_leaving_restarts() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::default();
        autoplay.restart(t0);

        autoplay.set_hovering(true, t0 + ms(3_000));
        assert!(!autoplay.is_running(3));
        assert!(!autoplay.tick(3, t0 + ms(10_000)));
        assert_eq!(autoplay.progress(3, t0 + ms(10_000)), 0.0);

        autoplay.set_hovering(false, t0 + ms(10_000));
        assert_eq!(autoplay.progress(3, t0 + ms(10_000)), 0.0);
        assert!(!autoplay.tick(3, t0 + ms(13_000)));
        assert!(autoplay.tick(3, t0 + ms(14_000)));
    }

    #[test]
    fn progress_is_linear_and_clamped() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::default();
        autoplay.restart(t0);

        assert_eq!(autoplay.progress(3, t0), 0.0);
        assert!((autoplay.progress(3, t0 + ms(1_000)) - 0.25).abs() < 1e-6);
        assert!((autoplay.progress(3, t0 + ms(2_000)) - 0.5).abs() < 1e-6);
        assert_eq!(autoplay.progress(3, t0 + ms(9_000)), 1.0);
    }

    #[test]
    fn restart_resets_progress() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::default();
        autoplay.restart(t0);
        autoplay.restart(t0 + ms(3_000));
        assert_eq!(autoplay.progress(3, t0 + ms(3_000)), 0.0);
        assert!(!autoplay.tick(3, t0 + ms(4_000)));
    }
}
