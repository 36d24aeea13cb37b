// SPDX-License-Identifier: MPL-2.0
//! Product color palette and swatch contrast rules.

pub mod contrast;
pub mod palette;

pub use contrast::{SwatchContrast, TEXT_ON_DARK, TEXT_ON_LIGHT};
pub use palette::{find_swatch, resolve_swatches, ColorSwatch, PRODUCT_COLORS};
