// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::catalog::category::Gradient;
use crate::domain::color::ColorSwatch;
use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::hex_color;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};

/// Product card surface.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette::GRAY_300,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Generic panel surface used for admin tables.
pub fn panel(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(weak)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Color tag filled with the swatch color. Text color and the hairline
/// border follow the swatch's contrast decision.
pub fn swatch(swatch: &ColorSwatch) -> impl Fn(&Theme) -> container::Style {
    let contrast = swatch.contrast();
    let fill = hex_color(swatch.hex);
    let text = hex_color(contrast.text_color);

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(text),
        border: Border {
            color: if contrast.has_border {
                palette::GRAY_300
            } else {
                Color::TRANSPARENT
            },
            width: if contrast.has_border {
                border::WIDTH_SM
            } else {
                0.0
            },
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Small pill badge (decorated flag, order status).
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder shown where a product image is missing or broken.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: Some(palette::GRAY_500),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn linear(gradient: Gradient) -> Background {
    Background::Gradient(
        Linear::new(Radians(std::f32::consts::FRAC_PI_4))
            .add_stop(0.0, hex_color(gradient.from))
            .add_stop(1.0, hex_color(gradient.to))
            .into(),
    )
}

/// Category tile background.
pub fn category_tile(bg_gradient: Gradient) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(linear(bg_gradient)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            color: palette::GRAY_300,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Category icon disc / header stripe.
pub fn category_accent(gradient: Gradient) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(linear(gradient)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
