// SPDX-License-Identifier: MPL-2.0
//! The fixed product color palette.

use super::contrast::SwatchContrast;
use crate::domain::catalog::Product;

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch {
    /// Display name.
    pub name: &'static str,
    /// Value stored in `Product::color`.
    pub value: &'static str,
    pub hex: &'static str,
}

impl ColorSwatch {
    #[must_use]
    pub fn contrast(&self) -> SwatchContrast {
        SwatchContrast::for_hex(self.hex)
    }
}

pub static PRODUCT_COLORS: [ColorSwatch; 12] = [
    ColorSwatch { name: "Red", value: "red", hex: "#DC2626" },
    ColorSwatch { name: "Green", value: "green", hex: "#16A34A" },
    ColorSwatch { name: "Gold", value: "gold", hex: "#FFD700" },
    ColorSwatch { name: "Silver", value: "silver", hex: "#C0C0C0" },
    ColorSwatch { name: "White", value: "white", hex: "#FFFFFF" },
    ColorSwatch { name: "Blue", value: "blue", hex: "#2563EB" },
    ColorSwatch { name: "Pink", value: "pink", hex: "#EC4899" },
    ColorSwatch { name: "Purple", value: "purple", hex: "#7C3AED" },
    ColorSwatch { name: "Burgundy", value: "burgundy", hex: "#800020" },
    ColorSwatch { name: "Champagne", value: "champagne", hex: "#F7E7CE" },
    ColorSwatch { name: "Black", value: "black", hex: "#000000" },
    ColorSwatch { name: "Natural", value: "natural", hex: "#A0522D" },
];

/// Looks up a palette entry by its stored value.
#[must_use]
pub fn find_swatch(value: &str) -> Option<&'static ColorSwatch> {
    PRODUCT_COLORS.iter().find(|swatch| swatch.value == value)
}

/// Resolves a product's color string into palette swatches.
///
/// Swatches come back in the order the values appear in the product's
/// string. Values missing from the palette are dropped.
#[must_use]
pub fn resolve_swatches(product: &Product) -> Vec<&'static ColorSwatch> {
    product.color_values().filter_map(find_swatch).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::product::fixtures::product;

    #[test]
    fn values_are_unique() {
        for (i, a) in PRODUCT_COLORS.iter().enumerate() {
            for b in &PRODUCT_COLORS[i + 1..] {
                assert_ne!(a.value, b.value);
            }
        }
    }

    #[test]
    fn two_known_colors_resolve_in_string_order() {
        let p = product(1, &[], Some("red, blue"));
        let names: Vec<&str> = resolve_swatches(&p).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Red", "Blue"]);

        let p = product(1, &[], Some("blue,red"));
        let names: Vec<&str> = resolve_swatches(&p).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Blue", "Red"]);
    }

    #[test]
    fn unknown_values_are_dropped() {
        let p = product(1, &[], Some("red, tartan, gold"));
        let values: Vec<&str> = resolve_swatches(&p).iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["red", "gold"]);
    }

    #[test]
    fn missing_color_resolves_to_nothing() {
        assert!(resolve_swatches(&product(1, &[], None)).is_empty());
    }

    #[test]
    fn palette_contrast_matches_hex() {
        let white = find_swatch("white").unwrap();
        assert!(white.contrast().has_border);
        let black = find_swatch("black").unwrap();
        assert!(!black.contrast().is_light);
    }
}
