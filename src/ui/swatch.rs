// SPDX-License-Identifier: MPL-2.0
//! Color tags rendered for a product's `color` field.

use crate::domain::catalog::Product;
use crate::domain::color::{resolve_swatches, ColorSwatch};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Row, Text};
use iced::Element;

/// One pill per resolved swatch, in the order the product lists them.
/// Unknown color values render nothing.
pub fn color_tags<'a, Message: 'a>(product: &Product) -> Element<'a, Message> {
    resolve_swatches(product)
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, swatch| {
            row.push(swatch_tag(swatch))
        })
        .into()
}

pub fn swatch_tag<'a, Message: 'a>(swatch: &'static ColorSwatch) -> Element<'a, Message> {
    Container::new(Text::new(swatch.name).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::swatch(swatch))
        .into()
}
