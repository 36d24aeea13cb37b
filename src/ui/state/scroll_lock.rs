// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock shared by every open lightbox.
//!
//! The lock is one shared flag for the whole window, implemented as a holder
//! count. Each acquisition returns a [`ScrollLockGuard`]; dropping the guard
//! releases exactly that acquisition. Because release happens in `Drop`, a
//! lightbox that is torn down without being closed still gives the page its
//! scrolling back.
//!
//! # Example
//!
//! ```
//! use evergreen_storefront::ui::state::ScrollLock;
//!
//! let lock = ScrollLock::new();
//! let first = lock.acquire();
//! let second = lock.acquire();
//! drop(first);
//! assert!(lock.is_locked());
//! drop(second);
//! assert!(!lock.is_locked());
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Handle to the shared page scroll lock. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends page scrolling until the returned guard is dropped.
    #[must_use = "the page is unlocked as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::AcqRel);
        tracing::debug!(holders = previous + 1, "page scroll locked");
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of outstanding guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }
}

/// One acquisition of the page scroll lock.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::AcqRel);
        tracing::debug!(holders = previous.saturating_sub(1), "page scroll lock released");
    }
}
