// SPDX-License-Identifier: MPL-2.0
//! In-process store backend.
//!
//! Holds products and orders in memory. The data comes from a TOML catalog
//! file (`[[products]]` and `[[orders]]` tables) or from a small built-in demo
//! catalog when no file is given.

use crate::application::port::{StoreBackend, StoreError};
use crate::domain::catalog::{Order, OrderStatus, Product};
use crate::error::{Error, Result};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Reads a catalog file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::Catalog`] if
/// it is not a valid catalog.
pub fn load_catalog(path: &Path) -> Result<CatalogFile> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| Error::Catalog(err.to_string()))
}

/// Store backed by in-memory vectors.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    orders: Mutex<Vec<Order>>,
    fail_updates: AtomicBool,
}

impl InMemoryStore {
    #[must_use]
    pub fn new(catalog: CatalogFile) -> Self {
        let mut orders = catalog.orders;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Self {
            products: catalog.products,
            orders: Mutex::new(orders),
            fail_updates: AtomicBool::new(false),
        }
    }

    /// Loads a store from a catalog file.
    ///
    /// # Errors
    ///
    /// See [`load_catalog`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let catalog = load_catalog(path)?;
        tracing::info!(
            products = catalog.products.len(),
            orders = catalog.orders.len(),
            "loaded catalog from {}",
            path.display()
        );
        Ok(Self::new(catalog))
    }

    /// Store pre-filled with a handful of demo products and orders.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_catalog())
    }

    /// Makes every subsequent status update fail with
    /// [`StoreError::Unavailable`]. Used to exercise the admin failure path.
    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::Relaxed);
    }

    fn lock_orders(&self) -> std::result::Result<std::sync::MutexGuard<'_, Vec<Order>>, StoreError> {
        self.orders
            .lock()
            .map_err(|_| StoreError::Unavailable("order table lock poisoned".to_string()))
    }
}

impl StoreBackend for InMemoryStore {
    fn products(&self) -> std::result::Result<Vec<Product>, StoreError> {
        Ok(self.products.clone())
    }

    fn orders(&self) -> std::result::Result<Vec<Order>, StoreError> {
        Ok(self.lock_orders()?.clone())
    }

    fn update_order_status(
        &self,
        order_id: u64,
        status: OrderStatus,
    ) -> std::result::Result<Order, StoreError> {
        if self.fail_updates.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable(
                "status updates are currently rejected".to_string(),
            ));
        }

        let mut orders = self.lock_orders()?;
        let order = orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or(StoreError::NotFound { order_id })?;
        order.status = status;
        Ok(order.clone())
    }
}

fn demo_product(
    id: u64,
    title: &str,
    price: f64,
    category: &str,
    images: &[&str],
    color: Option<&str>,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{title}, hand-picked for the season."),
        price,
        category: category.to_string(),
        images: images.iter().map(|s| (*s).to_string()).collect(),
        color: color.map(str::to_string),
        decorated: Some(category == "trees" && id % 2 == 0),
    }
}

fn demo_order(id: u64, customer: &str, total: f64, status: OrderStatus, day: u32) -> Order {
    Order {
        id,
        order_number: format!("EV-{:04}", 1000 + id),
        status,
        customer_name: customer.to_string(),
        total_amount: total,
        created_at: Utc
            .with_ymd_and_hms(2025, 12, day, 10, 0, 0)
            .single()
            .unwrap_or_default(),
        installation_date: None,
        products: None,
        gift_cards: None,
        tree_height: None,
        tree_type: None,
        rental_period: None,
        decor_level: None,
    }
}

fn demo_catalog() -> CatalogFile {
    let products = vec![
        demo_product(
            1,
            "Nordmann Fir",
            89.0,
            "trees",
            &["images/trees/nordmann-1.jpg", "images/trees/nordmann-2.jpg"],
            Some("green"),
        ),
        demo_product(
            2,
            "Decorated Fraser Fir",
            249.0,
            "trees",
            &[
                "images/trees/fraser-1.jpg",
                "images/trees/fraser-2.jpg",
                "images/trees/fraser-3.jpg",
            ],
            Some("red, gold"),
        ),
        demo_product(
            3,
            "Glass Bauble Set",
            24.5,
            "ornaments",
            &["images/ornaments/baubles.jpg"],
            Some("silver, white, champagne"),
        ),
        demo_product(4, "Velvet Ribbon Roll", 12.0, "ribbons", &[], Some("burgundy")),
        demo_product(
            5,
            "Pine Cone Centerpiece",
            39.0,
            "centerpieces",
            &["images/centerpieces/pine-1.jpg", "images/centerpieces/pine-2.jpg"],
            Some("natural, gold"),
        ),
        demo_product(6, "Gift Card", 50.0, "gift-cards", &[], None),
    ];

    let mut rental = demo_order(1, "Robin Holly", 249.0, OrderStatus::Confirmed, 3);
    rental.tree_type = Some("Fraser fir".to_string());
    rental.tree_height = Some("7ft".to_string());
    rental.rental_period = Some("4 weeks".to_string());
    rental.decor_level = Some("full".to_string());
    rental.installation_date = chrono::NaiveDate::from_ymd_opt(2025, 12, 6);

    let orders = vec![
        rental,
        demo_order(2, "Ivy Noel", 36.5, OrderStatus::Pending, 5),
        demo_order(3, "Gabe Winters", 89.0, OrderStatus::Delivered, 1),
    ];

    CatalogFile { products, orders }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn demo_store_has_products_and_orders() {
        let store = InMemoryStore::demo();
        assert!(!store.products().unwrap().is_empty());
        assert_eq!(store.orders().unwrap().len(), 3);
    }

    #[test]
    fn orders_are_newest_first() {
        let orders = InMemoryStore::demo().orders().unwrap();
        for pair in orders.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn update_order_status_changes_record() {
        let store = InMemoryStore::demo();
        let updated = store.update_order_status(2, OrderStatus::Completed).unwrap();
        assert_eq!(updated.status, OrderStatus::Completed);

        let stored = store
            .orders()
            .unwrap()
            .into_iter()
            .find(|o| o.id == 2)
            .unwrap();
        assert_eq!(stored.status, OrderStatus::Completed);
    }

    #[test]
    fn update_unknown_order_is_not_found() {
        let store = InMemoryStore::demo();
        assert_eq!(
            store.update_order_status(999, OrderStatus::Completed),
            Err(StoreError::NotFound { order_id: 999 })
        );
    }

    #[test]
    fn failure_injection_rejects_updates() {
        let store = InMemoryStore::demo();
        store.set_fail_updates(true);
        assert!(matches!(
            store.update_order_status(1, OrderStatus::Delivered),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn catalog_file_round_trips_through_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("catalog.toml");
        let catalog = demo_catalog();
        fs::write(&path, toml::to_string_pretty(&catalog).unwrap()).unwrap();

        let loaded = load_catalog(&path).expect("catalog should load");
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn invalid_catalog_is_a_catalog_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("catalog.toml");
        fs::write(&path, "[[products]]\nid = \"not a number\"").unwrap();

        assert!(matches!(load_catalog(&path), Err(Error::Catalog(_))));
    }

    #[test]
    fn missing_catalog_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = InMemoryStore::from_path(&temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
