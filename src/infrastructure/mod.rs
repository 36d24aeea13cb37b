// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory_store`]: In-process store seeded from a TOML catalog file or
//!   built-in demo data (implements [`StoreBackend`])
//!
//! [`StoreBackend`]: crate::application::port::StoreBackend

pub mod memory_store;

// Re-export main types for convenience
pub use memory_store::{load_catalog, CatalogFile, InMemoryStore};
