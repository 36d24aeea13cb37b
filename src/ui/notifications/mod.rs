// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for admin feedback.
//!
//! Toasts appear in the bottom-right corner and tell the user how an action
//! went (a status update that failed, a catalog that could not be read)
//! without blocking the page.
//!
//! - [`notification`] - `Notification` and its severity
//! - [`manager`] - queueing and auto-dismiss
//! - [`toast`] - rendering
//!
//! ```
//! use evergreen_storefront::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::error("Could not update order #1042"));
//! assert_eq!(manager.visible_count(), 1);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
