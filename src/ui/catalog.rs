// SPDX-License-Identifier: MPL-2.0
//! Catalog screen: a grid of product cards, optionally narrowed to one
//! category.

use crate::domain::catalog::{CategoryConfig, CategoryId, Product};
use crate::ui::carousel::{self, CarouselSettings};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::image_source::ImageResolver;
use crate::ui::product_card::{self, ProductCard};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};
use std::time::Instant;

/// Cards per grid row.
const COLUMNS: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Card {
        index: usize,
        message: product_card::Message,
    },
    ShowCategories,
    ClearFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    OpenPreview { product_id: u64, image: usize },
    ShowCategories,
}

impl From<product_card::Event> for Event {
    fn from(event: product_card::Event) -> Self {
        match event {
            product_card::Event::None => Event::None,
            product_card::Event::OpenPreview { product_id, image } => {
                Event::OpenPreview { product_id, image }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<ProductCard>,
    filter: Option<CategoryId>,
}

impl Catalog {
    pub fn new(
        products: Vec<Product>,
        resolver: &ImageResolver,
        settings: CarouselSettings,
        now: Instant,
    ) -> Self {
        let cards = products
            .into_iter()
            .map(|product| ProductCard::new(product, resolver, settings, now))
            .collect();
        Self {
            cards,
            filter: None,
        }
    }

    #[must_use]
    pub fn filter(&self) -> Option<CategoryId> {
        self.filter
    }

    /// Changes the filter. Cards that come into view start a fresh
    /// auto-play cycle.
    pub fn set_filter(&mut self, filter: Option<CategoryId>, now: Instant) {
        self.filter = filter;
        self.restart_autoplay(now);
    }

    /// Restarts every card's auto-play cycle at `now`. Hidden cards receive
    /// no ticks, so their cycles go stale until this is called.
    pub fn restart_autoplay(&mut self, now: Instant) {
        for card in &mut self.cards {
            card.restart_autoplay(now);
        }
    }

    #[must_use]
    pub fn product(&self, product_id: u64) -> Option<&Product> {
        self.cards
            .iter()
            .map(ProductCard::product)
            .find(|product| product.id == product_id)
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&ProductCard> {
        self.cards.get(index)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.cards.iter().map(ProductCard::product)
    }

    /// Number of products in each category, for the category screen.
    #[must_use]
    pub fn count_in(&self, category: CategoryId) -> usize {
        self.products()
            .filter(|product| product.category.parse::<CategoryId>() == Ok(category))
            .count()
    }

    fn is_visible(&self, card: &ProductCard) -> bool {
        match self.filter {
            None => true,
            Some(filter) => card.product().category.parse::<CategoryId>() == Ok(filter),
        }
    }

    /// Indices of the cards shown under the current filter.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| self.is_visible(card))
            .map(|(index, _)| index)
    }

    /// Whether any visible card needs auto-play ticks.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.cards
            .iter()
            .any(|card| self.is_visible(card) && card.is_ticking())
    }

    /// Sends `message` to every visible card and returns the first event
    /// any of them raised.
    pub fn broadcast(&mut self, message: &carousel::Message, now: Instant) -> Event {
        let indices: Vec<usize> = self.visible_indices().collect();
        let mut result = Event::None;
        for index in indices {
            let event = self.cards[index]
                .update(product_card::Message::Carousel(message.clone()), now)
                .into();
            if result == Event::None {
                result = event;
            }
        }
        result
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Card { index, message } => self
                .cards
                .get_mut(index)
                .map_or(Event::None, |card| card.update(message, now).into()),
            Message::ShowCategories => Event::ShowCategories,
            Message::ClearFilter => {
                self.set_filter(None, now);
                Event::None
            }
        }
    }

    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let heading = self
            .filter
            .map_or("All decorations", |id| id.config().title);

        let mut header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(heading)
                    .size(typography::TITLE_LG)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            )
            .push(Space::new().width(Length::Fill));

        if self.filter.is_some() {
            header = header.push(
                button(Text::new("Show all").size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::ClearFilter)
                    .style(styles::button::secondary),
            );
        }
        header = header.push(
            button(Text::new("Categories").size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ShowCategories)
                .style(styles::button_primary),
        );

        let visible: Vec<usize> = self.visible_indices().collect();
        let body: Element<'_, Message> = if visible.is_empty() {
            let hint = self
                .filter
                .map_or(CategoryConfig::DEFAULT.description, |id| {
                    id.config().description
                });
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new("No products here yet.").size(typography::BODY))
                    .push(Text::new(hint).size(typography::CAPTION)),
            )
            .padding(spacing::LG)
            .into()
        } else {
            visible
                .chunks(COLUMNS)
                .fold(Column::new().spacing(spacing::MD), |grid, chunk| {
                    let row = chunk.iter().fold(
                        Row::new().spacing(spacing::MD),
                        |row, &index| {
                            row.push(self.cards[index].view(now).map(move |message| {
                                Message::Card { index, message }
                            }))
                        },
                    );
                    grid.push(row)
                })
                .into()
        };

        scrollable(
            Column::new()
                .spacing(spacing::LG)
                .padding(spacing::LG)
                .push(header)
                .push(body),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::product::fixtures::product;

    fn catalog() -> Catalog {
        let mut ornament = product(2, &["/o1.jpg", "/o2.jpg"], None);
        ornament.category = "ornaments".into();
        let mut mystery = product(3, &["/m.jpg"], None);
        mystery.category = "mystery".into();

        Catalog::new(
            vec![product(1, &["/t1.jpg", "/t2.jpg"], None), ornament, mystery],
            &ImageResolver::default(),
            CarouselSettings::default(),
            Instant::now(),
        )
    }

    #[test]
    fn filter_narrows_visible_cards() {
        let mut c = catalog();
        assert_eq!(c.visible_indices().count(), 3);
        c.set_filter(Some(CategoryId::Ornaments), Instant::now());
        assert_eq!(c.visible_indices().collect::<Vec<_>>(), vec![1]);
        c.update(Message::ClearFilter, Instant::now());
        assert_eq!(c.filter(), None);
    }

    #[test]
    fn counts_per_category_ignore_unknown_ids() {
        let c = catalog();
        assert_eq!(c.count_in(CategoryId::Trees), 1);
        assert_eq!(c.count_in(CategoryId::Ornaments), 1);
        assert_eq!(c.count_in(CategoryId::Ribbons), 0);
    }

    #[test]
    fn card_events_bubble_up() {
        let now = Instant::now();
        let mut c = catalog();
        let event = c.update(
            Message::Card {
                index: 1,
                message: product_card::Message::OpenDetails,
            },
            now,
        );
        assert_eq!(
            event,
            Event::OpenPreview {
                product_id: 2,
                image: 0
            }
        );
    }

    #[test]
    fn out_of_range_card_is_ignored() {
        let mut c = catalog();
        let event = c.update(
            Message::Card {
                index: 42,
                message: product_card::Message::OpenDetails,
            },
            Instant::now(),
        );
        assert_eq!(event, Event::None);
    }

    #[test]
    fn broadcast_tick_only_reaches_visible_cards() {
        let t0 = Instant::now();
        let mut c = catalog();
        c.set_filter(Some(CategoryId::Trees), t0);
        let later = t0 + std::time::Duration::from_secs(5);
        c.broadcast(&carousel::Message::Tick(later), later);
        assert_eq!(c.cards[0].carousel().cursor(), 1);
        assert_eq!(c.cards[1].carousel().cursor(), 0);
    }

    #[test]
    fn revealed_cards_start_a_fresh_cycle() {
        let t0 = Instant::now();
        let mut c = catalog();
        c.set_filter(Some(CategoryId::Ornaments), t0);
        let reveal = t0 + std::time::Duration::from_secs(10);
        c.set_filter(None, reveal);

        let tick = reveal + std::time::Duration::from_millis(50);
        c.broadcast(&carousel::Message::Tick(tick), tick);
        assert_eq!(c.cards[0].carousel().cursor(), 0);

        let due = reveal + std::time::Duration::from_secs(4);
        c.broadcast(&carousel::Message::Tick(due), due);
        assert_eq!(c.cards[0].carousel().cursor(), 1);
    }

    #[test]
    fn single_image_cards_do_not_keep_ticking() {
        let mut c = catalog();
        c.set_filter(Some(CategoryId::Trees), Instant::now());
        assert!(c.is_ticking());
        c.cards.truncate(0);
        assert!(!c.is_ticking());
    }
}
