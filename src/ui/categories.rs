// SPDX-License-Identifier: MPL-2.0
//! Category selection screen.
//!
//! One tile per entry of the category table, each styled with the entry's
//! gradients. Selecting a tile filters the catalog to that category.

use crate::domain::catalog::category::CATEGORY_CONFIGS;
use crate::domain::catalog::{CategoryConfig, CategoryId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::hex_color;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, container, scrollable, Column, Container, Row, Text};
use iced::{Background, Border, Element, Font, Length, Theme};

const COLUMNS: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Select(CategoryId),
    ShowAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Narrow the catalog to a category, or show everything on `None`.
    Browse(Option<CategoryId>),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Select(id) => Event::Browse(Some(*id)),
        Message::ShowAll => Event::Browse(None),
    }
}

/// Renders the tiles. `count` reports how many products each category holds.
pub fn view<'a>(count: impl Fn(CategoryId) -> usize) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = CATEGORY_CONFIGS
        .iter()
        .filter_map(|config| config.id.map(|id| tile(config, id, count(id))))
        .collect();

    let mut grid = Column::new().spacing(spacing::MD);
    let mut tiles = tiles.into_iter().peekable();
    while tiles.peek().is_some() {
        let row = tiles
            .by_ref()
            .take(COLUMNS)
            .fold(Row::new().spacing(spacing::MD), |row, tile| row.push(tile));
        grid = grid.push(row);
    }

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new("Shop by category")
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(
            button(Text::new("All products").size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ShowAll)
                .style(styles::button::secondary),
        );

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(header)
            .push(grid),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn tile<'a>(config: &'static CategoryConfig, id: CategoryId, count: usize) -> Element<'a, Message> {
    let icon_bg = hex_color(config.icon_bg);
    let initial = config.title.chars().next().unwrap_or('?').to_string();

    let icon = Container::new(
        Text::new(initial)
            .size(typography::TITLE_MD)
            .color(iced::Color::WHITE),
    )
    .width(Length::Fixed(40.0))
    .height(Length::Fixed(40.0))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(icon_bg)),
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let stripe = Container::new(Text::new(""))
        .width(Length::Fill)
        .height(Length::Fixed(4.0))
        .style(styles::container::category_accent(config.gradient));

    let label = if count == 1 {
        "1 product".to_string()
    } else {
        format!("{count} products")
    };

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(icon)
        .push(
            Text::new(config.title)
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                }),
        )
        .push(Text::new(config.description).size(typography::BODY))
        .push(Text::new(label).size(typography::CAPTION));

    button(
        Container::new(Column::new().push(stripe).push(body))
            .width(Length::Fixed(sizing::CATEGORY_TILE_WIDTH))
            .style(styles::container::category_tile(config.bg_gradient)),
    )
    .padding(0)
    .on_press(Message::Select(id))
    .style(styles::button::bare)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_tile_browses_that_category() {
        assert_eq!(
            update(&Message::Select(CategoryId::Ribbons)),
            Event::Browse(Some(CategoryId::Ribbons))
        );
    }

    #[test]
    fn show_all_clears_the_filter() {
        assert_eq!(update(&Message::ShowAll), Event::Browse(None));
    }

    #[test]
    fn every_table_entry_has_an_id() {
        assert!(CATEGORY_CONFIGS.iter().all(|config| config.id.is_some()));
    }
}
