// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core storefront types with no UI toolkit dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `serde` derives on the records supplied by the store backend,
//! it depends only on `std`, which keeps every rule here unit-testable.
//!
//! # Modules
//!
//! - [`catalog`]: Records supplied by the backend ([`Product`](catalog::Product),
//!   [`Order`](catalog::Order)) and the category styling table
//!   ([`CategoryConfig`](catalog::CategoryConfig))
//! - [`color`]: Product color palette ([`ColorSwatch`](color::ColorSwatch)) and
//!   readable-text decisions ([`SwatchContrast`](color::SwatchContrast))
//! - [`media`]: Image sequences shown by carousels ([`MediaSequence`](media::MediaSequence))
//! - [`ui`]: UI value objects ([`AutoPlayInterval`](ui::newtypes::AutoPlayInterval),
//!   [`SwipeThreshold`](ui::newtypes::SwipeThreshold))

pub mod catalog;
pub mod color;
pub mod media;
pub mod ui;
