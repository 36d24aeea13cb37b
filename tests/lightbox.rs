// SPDX-License-Identifier: MPL-2.0
//! Lightbox scenarios: opening, keyboard navigation, dismissal and the page
//! scroll lock.

use evergreen_storefront::domain::catalog::Product;
use evergreen_storefront::domain::media::MediaSequence;
use evergreen_storefront::ui::carousel::{self, CarouselSettings};
use evergreen_storefront::ui::image_source::ImageResolver;
use evergreen_storefront::ui::lightbox::{ClickTarget, Lightbox, LightboxKey, Message};
use evergreen_storefront::ui::product_preview::{self, ProductPreview};
use evergreen_storefront::ui::state::ScrollLock;
use std::time::Instant;

fn sequence(n: usize) -> MediaSequence {
    MediaSequence::new((0..n).map(|i| format!("/img/{i}.jpg")).collect())
}

fn lightbox(n: usize, lock: &ScrollLock) -> Lightbox {
    Lightbox::new(sequence(n), &ImageResolver::default(), lock.clone())
}

fn wreath() -> Product {
    Product {
        id: 11,
        title: "Noble fir wreath".to_string(),
        description: "Hand-tied with pine cones.".to_string(),
        price: 64.5,
        category: "centerpieces".to_string(),
        images: (0..5).map(|i| format!("/wreath/{i}.jpg")).collect(),
        color: Some("green, gold".to_string()),
        decorated: Some(true),
    }
}

#[test]
fn keyboard_walk_wraps_and_escape_unlocks() {
    let lock = ScrollLock::new();
    let mut lb = lightbox(5, &lock);

    lb.open(2);
    assert!(lb.is_open());
    assert!(lock.is_locked());

    lb.update(Message::Key(LightboxKey::ArrowRight));
    lb.update(Message::Key(LightboxKey::ArrowRight));
    lb.update(Message::Key(LightboxKey::ArrowRight));
    assert_eq!(lb.cursor(), 0);

    lb.update(Message::Key(LightboxKey::ArrowLeft));
    assert_eq!(lb.cursor(), 4);

    lb.update(Message::Key(LightboxKey::Escape));
    assert!(!lb.is_open());
    assert!(!lock.is_locked());
}

#[test]
fn keys_are_ignored_while_closed() {
    let lock = ScrollLock::new();
    let mut lb = lightbox(3, &lock);
    lb.update(Message::Key(LightboxKey::ArrowRight));
    assert_eq!(lb.cursor(), 0);
    assert!(!lock.is_locked());
}

#[test]
fn only_backdrop_clicks_close() {
    let lock = ScrollLock::new();
    let mut lb = lightbox(3, &lock);
    lb.open(0);

    lb.update(Message::Clicked(ClickTarget::Content));
    assert!(lb.is_open());

    lb.update(Message::Clicked(ClickTarget::Backdrop));
    assert!(!lb.is_open());
    assert!(!lock.is_locked());
}

#[test]
fn reopening_reseeds_the_cursor() {
    let lock = ScrollLock::new();
    let mut lb = lightbox(4, &lock);
    lb.open(1);
    lb.update(Message::Next);
    lb.update(Message::Close);

    lb.open(3);
    assert_eq!(lb.cursor(), 3);
}

#[test]
fn two_lightboxes_share_one_lock() {
    let lock = ScrollLock::new();
    let mut first = lightbox(2, &lock);
    let mut second = lightbox(2, &lock);

    first.open(0);
    second.open(1);
    first.update(Message::Close);
    assert!(lock.is_locked());

    second.update(Message::Close);
    assert!(!lock.is_locked());
}

#[test]
fn preview_click_opens_lightbox_at_clicked_image() {
    let now = Instant::now();
    let lock = ScrollLock::new();
    let mut preview = ProductPreview::new(
        wreath(),
        0,
        &ImageResolver::default(),
        CarouselSettings::default(),
        lock.clone(),
        now,
    );

    preview.update(product_preview::Message::Thumbnail(3), now);
    preview.update(
        product_preview::Message::Carousel(carousel::Message::Pressed),
        now,
    );
    preview.update(
        product_preview::Message::Carousel(carousel::Message::Released),
        now,
    );

    assert!(preview.is_lightbox_open());
    assert_eq!(preview.lightbox().cursor(), 3);
    assert!(lock.is_locked());

    drop(preview);
    assert!(!lock.is_locked());
}

#[test]
fn swipe_in_preview_does_not_open_lightbox() {
    let now = Instant::now();
    let lock = ScrollLock::new();
    let mut preview = ProductPreview::new(
        wreath(),
        0,
        &ImageResolver::default(),
        CarouselSettings::default(),
        lock.clone(),
        now,
    );

    let send = |preview: &mut ProductPreview, message: carousel::Message| {
        preview.update(product_preview::Message::Carousel(message), now);
    };
    send(&mut preview, carousel::Message::Pressed);
    send(&mut preview, carousel::Message::PointerMoved(300.0));
    send(&mut preview, carousel::Message::PointerMoved(200.0));
    send(&mut preview, carousel::Message::Released);

    assert_eq!(preview.carousel().cursor(), 1);
    assert!(!preview.is_lightbox_open());
    assert!(!lock.is_locked());
}
