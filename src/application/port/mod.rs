// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`store`]: Product and order data owned by the store backend
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced types)
//! - Traits are `Send + Sync` so adapters can be shared with async tasks
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod store;

// Re-export main types for convenience
pub use store::{SharedStore, StoreBackend, StoreError};
