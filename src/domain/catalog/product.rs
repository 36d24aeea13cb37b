// SPDX-License-Identifier: MPL-2.0
//! Product record.

use serde::{Deserialize, Serialize};

/// A product as delivered by the store backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Raw category id. Unknown ids are tolerated and styled with the
    /// default category entry.
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Comma-separated palette values, e.g. `"red, gold"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorated: Option<bool>,
}

impl Product {
    /// Splits the `color` field into trimmed, non-empty values in the order
    /// they were written.
    pub fn color_values(&self) -> impl Iterator<Item = &str> {
        self.color
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn is_decorated(&self) -> bool {
        self.decorated.unwrap_or(false)
    }

    /// Price formatted for display, e.g. `"$49.90"`.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;

    #[test]
    fn color_values_are_trimmed_and_ordered() {
        let p = product(1, &[], Some(" red ,gold,, green "));
        let values: Vec<&str> = p.color_values().collect();
        assert_eq!(values, vec!["red", "gold", "green"]);
    }

    #[test]
    fn missing_color_yields_no_values() {
        let p = product(1, &[], None);
        assert_eq!(p.color_values().count(), 0);
    }

    #[test]
    fn decorated_defaults_to_false() {
        let p = product(1, &[], None);
        assert!(!p.is_decorated());
    }

    #[test]
    fn price_is_formatted_with_two_decimals() {
        let mut p = product(1, &[], None);
        p.price = 49.9;
        assert_eq!(p.formatted_price(), "$49.90");
    }
}
