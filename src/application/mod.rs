// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports to the outside world.
//!
//! The storefront only displays records owned by an external backend. This
//! layer defines the [`port::StoreBackend`] interface that backend adapters
//! implement, so the presentation layer never depends on a concrete store.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use evergreen_storefront::application::port::StoreBackend;
//! use evergreen_storefront::infrastructure::InMemoryStore;
//!
//! let store = InMemoryStore::demo();
//! assert!(!store.products().unwrap().is_empty());
//! ```

pub mod port;
