// SPDX-License-Identifier: MPL-2.0
//! Product image carousel component.
//!
//! Wraps a [`CarouselState`] and an [`AutoPlay`] timer around a resolved
//! image sequence. Navigation arrows, the `i / n` counter and the progress
//! bar are only drawn when there is more than one image.
//!
//! Pointer handling: the host forwards global pointer positions through
//! [`Message::PointerMoved`]. The press reported by the carousel's mouse area
//! carries no position, and the host's position for that press arrives after
//! it, so a swipe starts at the first position reported after the press.
//! Moving past the swipe threshold from there steps once. A press released
//! without swiping is reported as [`Event::Activated`] so the host can open a
//! lightbox on the current image.

use crate::domain::media::MediaSequence;
use crate::domain::ui::{AutoPlayInterval, SwipeThreshold};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::image_source::{self, ImageResolver, ImageSource};
use crate::ui::state::{AutoPlay, CarouselState};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{Background, Element, Length, Theme};
use std::time::Instant;

/// Per-carousel behavior taken from the user's settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub autoplay: bool,
    pub interval: AutoPlayInterval,
    pub swipe_threshold: SwipeThreshold,
}

impl CarouselSettings {
    /// Same settings with auto-play switched off.
    #[must_use]
    pub fn without_autoplay(self) -> Self {
        Self {
            autoplay: false,
            ..self
        }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval: AutoPlayInterval::default(),
            swipe_threshold: SwipeThreshold::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    Goto(usize),
    Pressed,
    PointerMoved(f32),
    Released,
    HoverChanged(bool),
    Tick(Instant),
}

/// Events surfaced to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The current image was clicked without swiping.
    Activated(usize),
}

#[derive(Debug, Clone)]
pub struct Carousel {
    sequence: MediaSequence,
    images: Vec<ImageSource>,
    state: CarouselState,
    autoplay: AutoPlay,
    /// Pressed, waiting for the position the swipe starts from.
    press_pending: bool,
    swiped: bool,
}

impl Carousel {
    pub fn new(
        sequence: MediaSequence,
        resolver: &ImageResolver,
        settings: CarouselSettings,
        now: Instant,
    ) -> Self {
        let images = resolver.resolve_all(&sequence);
        let state =
            CarouselState::for_sequence(&sequence).with_swipe_threshold(settings.swipe_threshold);
        let mut autoplay = AutoPlay::new(settings.autoplay, settings.interval);
        autoplay.restart(now);

        Self {
            sequence,
            images,
            state,
            autoplay,
            press_pending: false,
            swiped: false,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &MediaSequence {
        &self.sequence
    }

    #[must_use]
    pub fn images(&self) -> &[ImageSource] {
        &self.images
    }

    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    /// Whether the host should keep delivering [`Message::Tick`].
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.autoplay.is_running(self.state.len())
    }

    /// Starts a fresh auto-play cycle, e.g. when the carousel comes back
    /// into view after missing ticks.
    pub fn restart_autoplay(&mut self, now: Instant) {
        self.autoplay.restart(now);
    }

    /// `"2 / 5"`, one-based.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.state.cursor() + 1, self.state.len())
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Option<Event> {
        let moved = match message {
            Message::Next => self.state.next(),
            Message::Previous => self.state.previous(),
            Message::Goto(index) => self.state.goto(index),
            Message::Pressed => {
                self.swiped = false;
                self.press_pending = true;
                self.state.on_touch_end();
                false
            }
            Message::PointerMoved(x) => {
                if self.press_pending {
                    self.press_pending = false;
                    self.state.on_touch_start(x);
                    false
                } else if self.state.gesture().is_dragging {
                    let moved = self.state.on_touch_move(x);
                    self.swiped |= moved;
                    moved
                } else {
                    false
                }
            }
            Message::Released => {
                let pressed = self.press_pending || self.state.gesture().is_dragging;
                self.press_pending = false;
                self.state.on_touch_end();
                if pressed && !self.swiped {
                    return Some(Event::Activated(self.state.cursor()));
                }
                false
            }
            Message::HoverChanged(hovering) => {
                self.autoplay.set_hovering(hovering, now);
                if !hovering {
                    self.press_pending = false;
                    self.state.on_touch_end();
                }
                false
            }
            Message::Tick(tick) => {
                if self.autoplay.tick(self.state.len(), tick) {
                    self.state.next();
                }
                false
            }
        };

        if moved {
            self.autoplay.restart(now);
        }
        None
    }

    pub fn view(&self, height: f32, now: Instant) -> Element<'_, Message> {
        let current = &self.images[self.state.cursor()];
        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .push(image_source::view(
                current,
                Length::Fill,
                Length::Fixed(height),
            ));

        if self.state.can_navigate() {
            stack = stack
                .push(self.arrows())
                .push(self.counter())
                .push(self.progress_bar(now));
        }

        mouse_area(stack)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .on_enter(Message::HoverChanged(true))
            .on_exit(Message::HoverChanged(false))
            .into()
    }

    fn arrows(&self) -> Element<'_, Message> {
        let arrow = |label: &'static str, message: Message| {
            button(Text::new(label).size(typography::TITLE_SM))
                .padding(spacing::XS)
                .on_press(message)
                .style(styles::button_overlay(palette::WHITE, 0.4, 0.7))
        };

        Container::new(
            Row::new()
                .align_y(Vertical::Center)
                .push(arrow("◀", Message::Previous))
                .push(Space::new().width(Length::Fill))
                .push(arrow("▶", Message::Next)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .into()
    }

    fn counter(&self) -> Element<'_, Message> {
        Container::new(
            Container::new(Text::new(self.position_label()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::counter),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
    }

    fn progress_bar(&self, now: Instant) -> Element<'_, Message> {
        if !self.autoplay.is_enabled() {
            return Space::new().into();
        }

        let filled = progress_portion(self.autoplay.progress(self.state.len(), now));
        let segment = |portion: u16, color: iced::Color| {
            Container::new(Space::new())
                .width(Length::FillPortion(portion))
                .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                })
        };

        let mut bar = Row::new().width(Length::Fill);
        if filled > 0 {
            bar = bar.push(segment(filled, palette::PRIMARY_500));
        }
        if filled < PROGRESS_RESOLUTION {
            bar = bar.push(segment(
                PROGRESS_RESOLUTION - filled,
                iced::Color {
                    a: 0.3,
                    ..palette::WHITE
                },
            ));
        }

        Column::new()
            .push(Space::new().height(Length::Fill))
            .push(bar)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

const PROGRESS_RESOLUTION: u16 = 1000;

/// Converts a `[0, 1]` progress fraction into a fill portion out of
/// [`PROGRESS_RESOLUTION`].
fn progress_portion(progress: f32) -> u16 {
    let clamped = progress.clamp(0.0, 1.0);
    // Bounded by the clamp above.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let portion = (clamped * f32::from(PROGRESS_RESOLUTION)).round() as u16;
    portion
}
