// SPDX-License-Identifier: MPL-2.0
//! Catalog product card: image carousel, title, price and color tags.

use crate::domain::catalog::{CategoryConfig, Product};
use crate::domain::media::MediaSequence;
use crate::ui::carousel::{self, Carousel, CarouselSettings};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::image_source::ImageResolver;
use crate::ui::styles;
use crate::ui::swatch;
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    OpenDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Show the product preview, starting at `image`.
    OpenPreview { product_id: u64, image: usize },
}

#[derive(Debug, Clone)]
pub struct ProductCard {
    product: Product,
    carousel: Carousel,
}

impl ProductCard {
    pub fn new(
        product: Product,
        resolver: &ImageResolver,
        settings: CarouselSettings,
        now: Instant,
    ) -> Self {
        let carousel = Carousel::new(
            MediaSequence::from_refs(&product.images),
            resolver,
            settings,
            now,
        );
        Self { product, carousel }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.carousel.is_ticking()
    }

    pub fn restart_autoplay(&mut self, now: Instant) {
        self.carousel.restart_autoplay(now);
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Carousel(message) => match self.carousel.update(message, now) {
                Some(carousel::Event::Activated(image)) => Event::OpenPreview {
                    product_id: self.product.id,
                    image,
                },
                None => Event::None,
            },
            Message::OpenDetails => Event::OpenPreview {
                product_id: self.product.id,
                image: self.carousel.cursor(),
            },
        }
    }

    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let category = CategoryConfig::lookup(&self.product.category);

        let title = button(
            Text::new(self.product.title.as_str())
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                }),
        )
        .padding(0)
        .on_press(Message::OpenDetails)
        .style(styles::button::bare);

        let mut meta = Row::new()
            .spacing(spacing::XS)
            .align_y(iced::alignment::Vertical::Center)
            .push(
                Text::new(self.product.formatted_price())
                    .size(typography::BODY)
                    .color(palette::PRIMARY_700),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                Text::new(category.title)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            );

        if self.product.is_decorated() {
            meta = meta.push(
                Container::new(Text::new("Decorated").size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge(palette::ACCENT_500)),
            );
        }

        let details = Column::new()
            .spacing(spacing::XS)
            .padding(spacing::SM)
            .push(title)
            .push(meta)
            .push(swatch::color_tags(&self.product));

        Container::new(
            Column::new()
                .push(
                    self.carousel
                        .view(sizing::CARD_IMAGE_HEIGHT, now)
                        .map(Message::Carousel),
                )
                .push(details),
        )
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::product::fixtures::product;

    fn card(images: &[&str]) -> ProductCard {
        ProductCard::new(
            product(7, images, Some("red, blue")),
            &ImageResolver::default(),
            CarouselSettings::default(),
            Instant::now(),
        )
    }

    #[test]
    fn title_click_opens_preview_at_current_image() {
        let now = Instant::now();
        let mut card = card(&["/a.jpg", "/b.jpg"]);
        card.update(Message::Carousel(carousel::Message::Next), now);
        assert_eq!(
            card.update(Message::OpenDetails, now),
            Event::OpenPreview {
                product_id: 7,
                image: 1
            }
        );
    }

    #[test]
    fn image_click_opens_preview() {
        let now = Instant::now();
        let mut card = card(&["/a.jpg", "/b.jpg"]);
        card.update(Message::Carousel(carousel::Message::Pressed), now);
        assert_eq!(
            card.update(Message::Carousel(carousel::Message::Released), now),
            Event::OpenPreview {
                product_id: 7,
                image: 0
            }
        );
    }

    #[test]
    fn navigation_does_not_emit_events() {
        let now = Instant::now();
        let mut card = card(&["/a.jpg", "/b.jpg"]);
        assert_eq!(
            card.update(Message::Carousel(carousel::Message::Next), now),
            Event::None
        );
    }

    #[test]
    fn product_without_images_does_not_tick() {
        let card = card(&[]);
        assert!(!card.is_ticking());
        assert_eq!(card.carousel().sequence().len(), 1);
    }
}
