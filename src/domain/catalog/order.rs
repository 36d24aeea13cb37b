// SPDX-License-Identifier: MPL-2.0
//! Order record and status lifecycle labels.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
    Completed,
}

impl OrderStatus {
    /// All statuses in lifecycle order, used by the admin status picker.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Delivered,
        OrderStatus::Completed,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A customer order as delivered by the store backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub order_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub customer_name: String,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_cards: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decor_level: Option<String>,
}

impl Order {
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format!("${:.2}", self.total_amount)
    }

    #[must_use]
    pub fn formatted_created_at(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// One-line summary of the tree rental details, if any were ordered.
    #[must_use]
    pub fn tree_summary(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.tree_type.as_deref(),
            self.tree_height.as_deref(),
            self.rental_period.as_deref(),
            self.decor_level.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order() -> Order {
        Order {
            id: 1,
            order_number: "EV-1001".to_string(),
            status: OrderStatus::Pending,
            customer_name: "Sam Frost".to_string(),
            total_amount: 129.5,
            created_at: Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0).unwrap(),
            installation_date: None,
            products: None,
            gift_cards: None,
            tree_height: None,
            tree_type: None,
            rental_period: None,
            decor_level: None,
        }
    }

    #[test]
    fn status_parses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            status: OrderStatus,
        }
        let parsed: Wrapper = toml::from_str("status = \"delivered\"").unwrap();
        assert_eq!(parsed.status, OrderStatus::Delivered);
    }

    #[test]
    fn all_statuses_are_in_lifecycle_order() {
        assert_eq!(OrderStatus::ALL[0], OrderStatus::Pending);
        assert_eq!(OrderStatus::ALL[3], OrderStatus::Completed);
    }

    #[test]
    fn tree_summary_is_none_without_rental_details() {
        assert!(order().tree_summary().is_none());
    }

    #[test]
    fn tree_summary_joins_present_details() {
        let mut o = order();
        o.tree_type = Some("Nordmann fir".to_string());
        o.tree_height = Some("7ft".to_string());
        assert_eq!(o.tree_summary().as_deref(), Some("Nordmann fir · 7ft"));
    }

    #[test]
    fn formatting_helpers() {
        let o = order();
        assert_eq!(o.formatted_total(), "$129.50");
        assert_eq!(o.formatted_created_at(), "2025-12-01 09:30");
    }
}
