// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native pointer and keyboard events are turned into top-level messages
//! here. Each subscription is only active while something can use it: the
//! tick runs while a carousel is auto-playing or a toast is showing, and
//! keyboard input is only listened to while a lightbox is open.

use super::{Message, Screen};
use crate::ui::lightbox::key_from_iced;
use crate::ui::state::autoplay::TICK_INTERVAL;
use iced::{event, keyboard, mouse, time, touch, Subscription};

/// Forwards pointer movement and release to screens that host carousels.
///
/// Presses are not routed here: the carousel's own mouse area reports them,
/// so a press outside every carousel never starts a swipe.
pub fn create_pointer_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Catalog | Screen::ProductPreview => {
            event::listen_with(|event, _status, _window_id| match event {
                event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                    Some(Message::PointerMoved(position.x))
                }
                event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                | event::Event::Touch(
                    touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
                ) => Some(Message::PointerReleased),
                event::Event::Touch(
                    touch::Event::FingerPressed { position, .. }
                    | touch::Event::FingerMoved { position, .. },
                ) => Some(Message::PointerMoved(position.x)),
                _ => None,
            })
        }
        Screen::Categories | Screen::Admin => Subscription::none(),
    }
}

/// Creates the periodic tick subscription when `active`.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Maps Escape and the arrow keys to lightbox messages while a lightbox is
/// open.
pub fn create_lightbox_key_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            key_from_iced(&key).map(Message::LightboxKey)
        }
        _ => None,
    })
}
