// SPDX-License-Identifier: MPL-2.0
//! Product preview screen.
//!
//! Shows a large carousel with a thumbnail strip, the product details and its
//! color swatches. Clicking the large image opens a lightbox at that image.

use crate::domain::catalog::{CategoryConfig, Product};
use crate::domain::media::MediaSequence;
use crate::ui::carousel::{self, Carousel, CarouselSettings};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::image_source::{self, ImageResolver};
use crate::ui::lightbox::{self, Lightbox};
use crate::ui::state::ScrollLock;
use crate::ui::styles;
use crate::ui::swatch;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Carousel(carousel::Message),
    Thumbnail(usize),
    OpenLightbox(usize),
    Lightbox(lightbox::Message),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
}

#[derive(Debug)]
pub struct ProductPreview {
    product: Product,
    carousel: Carousel,
    lightbox: Lightbox,
}

impl ProductPreview {
    /// Builds the preview with the carousel positioned at `initial_image`.
    /// The large carousel never auto-plays.
    pub fn new(
        product: Product,
        initial_image: usize,
        resolver: &ImageResolver,
        settings: CarouselSettings,
        scroll_lock: ScrollLock,
        now: Instant,
    ) -> Self {
        let sequence = MediaSequence::from_refs(&product.images);
        let mut carousel = Carousel::new(
            sequence.clone(),
            resolver,
            settings.without_autoplay(),
            now,
        );
        if initial_image < sequence.len() {
            carousel.update(carousel::Message::Goto(initial_image), now);
        }
        let lightbox = Lightbox::new(sequence, resolver, scroll_lock);

        Self {
            product,
            carousel,
            lightbox,
        }
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
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_open()
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Back => {
                self.lightbox.close();
                return Event::Back;
            }
            Message::Carousel(message) => {
                if let Some(carousel::Event::Activated(index)) = self.carousel.update(message, now)
                {
                    self.lightbox.open(index);
                }
            }
            Message::Thumbnail(index) => {
                if index < self.carousel.sequence().len() {
                    self.carousel.update(carousel::Message::Goto(index), now);
                }
            }
            Message::OpenLightbox(index) => {
                if index < self.carousel.sequence().len() {
                    self.lightbox.open(index);
                }
            }
            Message::Lightbox(message) => self.lightbox.update(message),
        }
        Event::None
    }

    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let back = button(Text::new("← Back to catalog").size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::Back)
            .style(styles::button::secondary);

        let gallery = Column::new()
            .spacing(spacing::SM)
            .width(Length::FillPortion(3))
            .push(
                self.carousel
                    .view(sizing::PREVIEW_IMAGE_HEIGHT, now)
                    .map(Message::Carousel),
            )
            .push(self.thumbnails());

        let content = Row::new()
            .spacing(spacing::LG)
            .push(gallery)
            .push(self.details());

        scrollable(
            Column::new()
                .spacing(spacing::MD)
                .padding(spacing::LG)
                .push(back)
                .push(content),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// The lightbox overlay; empty while closed.
    pub fn lightbox_view(&self) -> Element<'_, Message> {
        self.lightbox.view().map(Message::Lightbox)
    }

    fn thumbnails(&self) -> Element<'_, Message> {
        if !self.carousel.state().can_navigate() {
            return Space::new().into();
        }

        let cursor = self.carousel.cursor();
        self.carousel
            .images()
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::XS), |row, (index, source)| {
                row.push(
                    button(image_source::view(
                        source,
                        Length::Fixed(sizing::THUMBNAIL),
                        Length::Fixed(sizing::THUMBNAIL),
                    ))
                    .padding(spacing::XXS)
                    .on_press(Message::Thumbnail(index))
                    .style(styles::button::thumbnail(index == cursor)),
                )
            })
            .into()
    }

    fn details(&self) -> Element<'_, Message> {
        let category = CategoryConfig::lookup(&self.product.category);

        let category_chip = Container::new(
            Text::new(category.title)
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::category_accent(category.gradient));

        let mut column = Column::new()
            .spacing(spacing::SM)
            .width(Length::FillPortion(2))
            .push(category_chip)
            .push(
                Text::new(self.product.title.as_str())
                    .size(typography::TITLE_MD)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            )
            .push(
                Text::new(self.product.formatted_price())
                    .size(typography::TITLE_SM)
                    .color(palette::PRIMARY_700),
            );

        if !self.product.description.is_empty() {
            column = column.push(Text::new(self.product.description.as_str()).size(typography::BODY));
        }

        if self.product.color.is_some() {
            column = column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(Text::new("Colors").size(typography::CAPTION))
                    .push(swatch::color_tags(&self.product)),
            );
        }

        if self.product.is_decorated() {
            column = column.push(
                Container::new(Text::new("Decorated").size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge(palette::ACCENT_500)),
            );
        }

        column
            .push(
                button(Text::new("View full screen").size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::OpenLightbox(self.carousel.cursor()))
                    .style(styles::button_primary),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::product::fixtures::product;

    fn preview(images: &[&str], initial: usize, lock: &ScrollLock) -> ProductPreview {
        ProductPreview::new(
            product(3, images, None),
            initial,
            &ImageResolver::default(),
            CarouselSettings::default(),
            lock.clone(),
            Instant::now(),
        )
    }

    const FIVE: [&str; 5] = ["/1.jpg", "/2.jpg", "/3.jpg", "/4.jpg", "/5.jpg"];

    #[test]
    fn starts_at_requested_image_without_autoplay() {
        let lock = ScrollLock::new();
        let p = preview(&FIVE, 3, &lock);
        assert_eq!(p.carousel().cursor(), 3);
        assert!(!p.carousel().is_ticking());
    }

    #[test]
    fn out_of_range_start_falls_back_to_first_image() {
        let lock = ScrollLock::new();
        let p = preview(&FIVE, 9, &lock);
        assert_eq!(p.carousel().cursor(), 0);
    }

    #[test]
    fn clicking_the_image_opens_lightbox_there() {
        let now = Instant::now();
        let lock = ScrollLock::new();
        let mut p = preview(&FIVE, 0, &lock);
        p.update(Message::Thumbnail(2), now);
        p.update(Message::Carousel(carousel::Message::Pressed), now);
        p.update(Message::Carousel(carousel::Message::Released), now);

        assert!(p.is_lightbox_open());
        assert_eq!(p.lightbox().cursor(), 2);
        assert!(lock.is_locked());
    }

    #[test]
    fn lightbox_cursor_is_independent_of_carousel() {
        let now = Instant::now();
        let lock = ScrollLock::new();
        let mut p = preview(&FIVE, 0, &lock);
        p.update(Message::OpenLightbox(1), now);
        p.update(Message::Lightbox(lightbox::Message::Next), now);
        assert_eq!(p.lightbox().cursor(), 2);
        assert_eq!(p.carousel().cursor(), 0);
    }

    #[test]
    fn back_closes_lightbox_and_unlocks() {
        let now = Instant::now();
        let lock = ScrollLock::new();
        let mut p = preview(&FIVE, 0, &lock);
        p.update(Message::OpenLightbox(4), now);
        assert_eq!(p.update(Message::Back, now), Event::Back);
        assert!(!lock.is_locked());
    }

    #[test]
    fn dropping_preview_with_open_lightbox_unlocks() {
        let now = Instant::now();
        let lock = ScrollLock::new();
        let mut p = preview(&FIVE, 0, &lock);
        p.update(Message::OpenLightbox(0), now);
        drop(p);
        assert!(!lock.is_locked());
    }
}
