// SPDX-License-Identifier: MPL-2.0
//! Product categories and their presentation table.
//!
//! Category ids arrive from the backend as free-form strings. They are
//! parsed into the closed [`CategoryId`] set; anything unrecognized is shown
//! with [`CategoryConfig::DEFAULT`].

use std::fmt;
use std::str::FromStr;

/// The categories the storefront knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Trees,
    Ornaments,
    Ribbons,
    Centerpieces,
    GiftCards,
}

impl CategoryId {
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Trees,
        CategoryId::Ornaments,
        CategoryId::Ribbons,
        CategoryId::Centerpieces,
        CategoryId::GiftCards,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Trees => "trees",
            CategoryId::Ornaments => "ornaments",
            CategoryId::Ribbons => "ribbons",
            CategoryId::Centerpieces => "centerpieces",
            CategoryId::GiftCards => "gift-cards",
        }
    }

    #[must_use]
    pub fn config(self) -> &'static CategoryConfig {
        match self {
            CategoryId::Trees => &CATEGORY_CONFIGS[0],
            CategoryId::Ornaments => &CATEGORY_CONFIGS[1],
            CategoryId::Ribbons => &CATEGORY_CONFIGS[2],
            CategoryId::Centerpieces => &CATEGORY_CONFIGS[3],
            CategoryId::GiftCards => &CATEGORY_CONFIGS[4],
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a raw category id is not one of [`CategoryId::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trees" | "tree" => Ok(CategoryId::Trees),
            "ornaments" => Ok(CategoryId::Ornaments),
            "ribbons" => Ok(CategoryId::Ribbons),
            "centerpieces" | "centrepieces" => Ok(CategoryId::Centerpieces),
            "gift-cards" | "gift_cards" | "giftcards" => Ok(CategoryId::GiftCards),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Two-stop linear gradient expressed as hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

/// Presentation settings for one category tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    /// `None` only for the default fallback entry.
    pub id: Option<CategoryId>,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: Gradient,
    pub bg_gradient: Gradient,
    pub icon_bg: &'static str,
}

impl CategoryConfig {
    /// Gray styling used for any category id the table does not know.
    pub const DEFAULT: CategoryConfig = CategoryConfig {
        id: None,
        title: "Other",
        description: "More seasonal decor",
        gradient: Gradient {
            from: "#6B7280",
            to: "#4B5563",
        },
        bg_gradient: Gradient {
            from: "#F9FAFB",
            to: "#F3F4F6",
        },
        icon_bg: "#6B7280",
    };

    /// Looks up the configuration for a raw category id, falling back to
    /// [`CategoryConfig::DEFAULT`].
    #[must_use]
    pub fn lookup(raw_id: &str) -> &'static CategoryConfig {
        raw_id
            .parse::<CategoryId>()
            .map_or(&Self::DEFAULT, CategoryId::config)
    }
}

/// Static configuration table, one entry per [`CategoryId`] in `ALL` order.
pub static CATEGORY_CONFIGS: [CategoryConfig; 5] = [
    CategoryConfig {
        id: Some(CategoryId::Trees),
        title: "Christmas Trees",
        description: "Real and artificial trees, delivered and installed",
        gradient: Gradient {
            from: "#16A34A",
            to: "#15803D",
        },
        bg_gradient: Gradient {
            from: "#F0FDF4",
            to: "#DCFCE7",
        },
        icon_bg: "#16A34A",
    },
    CategoryConfig {
        id: Some(CategoryId::Ornaments),
        title: "Ornaments",
        description: "Baubles, toppers and hanging decorations",
        gradient: Gradient {
            from: "#DC2626",
            to: "#B91C1C",
        },
        bg_gradient: Gradient {
            from: "#FEF2F2",
            to: "#FEE2E2",
        },
        icon_bg: "#DC2626",
    },
    CategoryConfig {
        id: Some(CategoryId::Ribbons),
        title: "Ribbons",
        description: "Satin, velvet and wired ribbon by the roll",
        gradient: Gradient {
            from: "#DB2777",
            to: "#BE185D",
        },
        bg_gradient: Gradient {
            from: "#FDF2F8",
            to: "#FCE7F3",
        },
        icon_bg: "#DB2777",
    },
    CategoryConfig {
        id: Some(CategoryId::Centerpieces),
        title: "Centerpieces",
        description: "Table arrangements and candle settings",
        gradient: Gradient {
            from: "#D97706",
            to: "#B45309",
        },
        bg_gradient: Gradient {
            from: "#FFFBEB",
            to: "#FEF3C7",
        },
        icon_bg: "#D97706",
    },
    CategoryConfig {
        id: Some(CategoryId::GiftCards),
        title: "Gift Cards",
        description: "Let them pick their own decor",
        gradient: Gradient {
            from: "#7C3AED",
            to: "#6D28D9",
        },
        bg_gradient: Gradient {
            from: "#F5F3FF",
            to: "#EDE9FE",
        },
        icon_bg: "#7C3AED",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        for id in CategoryId::ALL {
            assert_eq!(id.config().id, Some(id));
        }
    }

    #[test]
    fn known_ids_parse_case_insensitively() {
        assert_eq!("Ornaments".parse::<CategoryId>(), Ok(CategoryId::Ornaments));
        assert_eq!("gift_cards".parse::<CategoryId>(), Ok(CategoryId::GiftCards));
    }

    #[test]
    fn lookup_falls_back_to_default_gray() {
        let config = CategoryConfig::lookup("garlands");
        assert_eq!(config, &CategoryConfig::DEFAULT);
        assert!(config.id.is_none());
        assert_eq!(config.icon_bg, "#6B7280");
    }

    #[test]
    fn lookup_finds_known_category() {
        assert_eq!(CategoryConfig::lookup("trees").title, "Christmas Trees");
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for id in CategoryId::ALL {
            assert_eq!(id.as_str().parse::<CategoryId>(), Ok(id));
        }
    }
}
