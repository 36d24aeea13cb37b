// SPDX-License-Identifier: MPL-2.0
//! Store backend port definition.
//!
//! The backend owns products and orders. The storefront reads them and, on
//! the admin screen, asks the backend to change an order's status. That
//! status update is the only operation with a real failure channel.

use crate::domain::catalog::{Order, OrderStatus, Product};
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by a store backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No order with this id exists.
    #[error("order {order_id} not found")]
    NotFound { order_id: u64 },

    /// The backend could not be reached or refused the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the catalog and write access to order status.
pub trait StoreBackend: Send + Sync {
    /// Returns all products in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend cannot be reached.
    fn products(&self) -> Result<Vec<Product>, StoreError>;

    /// Returns all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backend cannot be reached.
    fn orders(&self) -> Result<Vec<Order>, StoreError>;

    /// Changes an order's status and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown order id, or
    /// [`StoreError::Unavailable`] if the backend rejects the update.
    fn update_order_status(&self, order_id: u64, status: OrderStatus)
        -> Result<Order, StoreError>;
}

/// Backend handle shared between the UI and background tasks.
pub type SharedStore = Arc<dyn StoreBackend>;
