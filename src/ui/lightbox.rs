// SPDX-License-Identifier: MPL-2.0
//! Full-window image lightbox.
//!
//! The lightbox is closed until [`Lightbox::open`] is called with a starting
//! index. Opening always reseeds the cursor from that index and takes a
//! [`ScrollLockGuard`] so the page behind stays still. The guard is dropped
//! on close, and also when the lightbox itself is dropped while open.
//!
//! While open:
//! - Escape closes, ArrowLeft / ArrowRight step through the images
//! - a click on the backdrop closes, a click on the image does not
//! - a thumbnail click jumps straight to that image

use crate::domain::media::MediaSequence;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::image_source::{self, ImageResolver, ImageSource};
use crate::ui::state::{CarouselState, ScrollLock, ScrollLockGuard};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{self, key::Named};
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Keys the lightbox responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Maps a toolkit key to a lightbox key; everything else is ignored.
#[must_use]
pub fn key_from_iced(key: &keyboard::Key) -> Option<LightboxKey> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        keyboard::Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        _ => None,
    }
}

/// Where a pointer click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The image, its controls or the thumbnail strip.
    Content,
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Next,
    Previous,
    Thumbnail(usize),
    Key(LightboxKey),
    Clicked(ClickTarget),
}

#[derive(Debug)]
pub struct Lightbox {
    sequence: MediaSequence,
    images: Vec<ImageSource>,
    cursor: CarouselState,
    scroll_lock: ScrollLock,
    scroll_guard: Option<ScrollLockGuard>,
}

impl Lightbox {
    /// Builds a closed lightbox over `sequence`.
    pub fn new(sequence: MediaSequence, resolver: &ImageResolver, scroll_lock: ScrollLock) -> Self {
        let images = resolver.resolve_all(&sequence);
        let cursor = CarouselState::for_sequence(&sequence);
        Self {
            sequence,
            images,
            cursor,
            scroll_lock,
            scroll_guard: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.scroll_guard.is_some()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.cursor()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always `false`; a lightbox holds at least the placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Opens at `initial_index`, discarding any cursor from a previous
    /// session. Opening an already open lightbox only moves the cursor.
    pub fn open(&mut self, initial_index: usize) {
        self.cursor.goto(initial_index);
        if self.scroll_guard.is_none() {
            self.scroll_guard = Some(self.scroll_lock.acquire());
            tracing::debug!(index = initial_index, len = self.len(), "lightbox opened");
        }
    }

    pub fn close(&mut self) {
        if self.scroll_guard.take().is_some() {
            tracing::debug!("lightbox closed");
        }
    }

    pub fn update(&mut self, message: Message) {
        if !self.is_open() {
            return;
        }

        match message {
            Message::Close
            | Message::Key(LightboxKey::Escape)
            | Message::Clicked(ClickTarget::Backdrop) => self.close(),
            Message::Next | Message::Key(LightboxKey::ArrowRight) => {
                self.cursor.next();
            }
            Message::Previous | Message::Key(LightboxKey::ArrowLeft) => {
                self.cursor.previous();
            }
            Message::Thumbnail(index) => {
                if index < self.len() {
                    self.cursor.goto(index);
                }
            }
            Message::Clicked(ClickTarget::Content) => {}
        }
    }

    /// Renders the overlay. Returns an empty element while closed.
    pub fn view(&self) -> Element<'_, Message> {
        if !self.is_open() {
            return Space::new().into();
        }

        let backdrop = mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::Clicked(ClickTarget::Backdrop));

        let close = button(Text::new("✕").size(typography::TITLE_SM))
            .padding(spacing::XS)
            .on_press(Message::Close)
            .style(styles::button_overlay(palette::WHITE, 0.5, 0.8));

        let mut body = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                Row::new()
                    .push(Space::new().width(Length::Fill))
                    .push(close)
                    .width(Length::Fixed(sizing::PREVIEW_IMAGE_HEIGHT * 1.5)),
            )
            .push(self.stage());

        if self.cursor.can_navigate() {
            body = body
                .push(
                    Container::new(
                        Text::new(format!("{} / {}", self.cursor() + 1, self.len()))
                            .size(typography::CAPTION),
                    )
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::overlay::counter),
                )
                .push(self.thumbnails());
        }

        // Clicks inside the content never reach the backdrop below it.
        let content = mouse_area(opaque(body)).on_press(Message::Clicked(ClickTarget::Content));

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            )
            .into()
    }

    fn stage(&self) -> Element<'_, Message> {
        let image = image_source::view(
            &self.images[self.cursor()],
            Length::Fixed(sizing::PREVIEW_IMAGE_HEIGHT * 1.5),
            Length::Fixed(sizing::PREVIEW_IMAGE_HEIGHT),
        );

        if !self.cursor.can_navigate() {
            return image;
        }

        let arrow = |label: &'static str, message: Message| {
            button(Text::new(label).size(typography::TITLE_MD))
                .padding(spacing::SM)
                .on_press(message)
                .style(styles::button_overlay(palette::WHITE, 0.5, 0.8))
        };

        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(arrow("◀", Message::Previous))
            .push(image)
            .push(arrow("▶", Message::Next))
            .into()
    }

    fn thumbnails(&self) -> Element<'_, Message> {
        let strip = self.images.iter().enumerate().fold(
            Row::new().spacing(spacing::XS),
            |row, (index, source)| {
                row.push(
                    button(image_source::view(
                        source,
                        Length::Fixed(sizing::THUMBNAIL),
                        Length::Fixed(sizing::THUMBNAIL),
                    ))
                    .padding(spacing::XXS)
                    .on_press(Message::Thumbnail(index))
                    .style(styles::button::thumbnail(index == self.cursor())),
                )
            },
        );
        strip.into()
    }
}
