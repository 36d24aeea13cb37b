// SPDX-License-Identifier: MPL-2.0
//! Catalog records supplied by the store backend.
//!
//! These types are only displayed by the storefront; validation of prices,
//! stock or order rules belongs to the backend.

pub mod category;
pub mod order;
pub mod product;

pub use category::{CategoryConfig, CategoryId};
pub use order::{Order, OrderStatus};
pub use product::Product;
