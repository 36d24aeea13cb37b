// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component events are translated here into screen changes, notifications
//! and store tasks. Pointer and keyboard input from the subscriptions is
//! routed to whichever screen is showing.

use super::{App, Message, Screen};
use crate::application::port::StoreError;
use crate::domain::catalog::Product;
use crate::ui::admin::{self, Event as AdminEvent};
use crate::ui::carousel;
use crate::ui::catalog::{Catalog, Event as CatalogEvent};
use crate::ui::categories::{self, Event as CategoriesEvent};
use crate::ui::lightbox::{self, LightboxKey};
use crate::ui::notifications::{Notification, NotificationMessage};
use crate::ui::product_preview::{self, Event as PreviewEvent, ProductPreview};
use iced::Task;
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        let now = match message {
            Message::Tick(now) => now,
            _ => Instant::now(),
        };
        self.now = now;

        match message {
            Message::Catalog(message) => {
                let event = self.catalog.update(message, now);
                self.handle_catalog_event(event)
            }
            Message::Categories(message) => {
                let CategoriesEvent::Browse(filter) = categories::update(&message);
                self.catalog.set_filter(filter, now);
                self.switch_screen(Screen::Catalog)
            }
            Message::Preview(message) => self.handle_preview_message(message, now),
            Message::Admin(message) => self.handle_admin_message(message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::SwitchScreen(screen) => self.switch_screen(screen),
            Message::CatalogLoaded(result) => {
                self.handle_catalog_loaded(result, now);
                Task::none()
            }
            Message::Tick(now) => {
                if self.screen == Screen::Catalog {
                    // Auto-play never raises events.
                    self.catalog.broadcast(&carousel::Message::Tick(now), now);
                }
                self.notifications
                    .handle_message(&NotificationMessage::Tick(now));
                Task::none()
            }
            Message::PointerMoved(x) => {
                self.route_pointer(carousel::Message::PointerMoved(x), now)
            }
            Message::PointerReleased => self.route_pointer(carousel::Message::Released, now),
            Message::LightboxKey(key) => self.handle_lightbox_key(key, now),
        }
    }

    fn switch_screen(&mut self, screen: Screen) -> Task<Message> {
        if screen == self.screen {
            return Task::none();
        }
        if screen == Screen::ProductPreview && self.preview.is_none() {
            return Task::none();
        }
        if self.screen == Screen::ProductPreview {
            self.preview = None;
        }

        tracing::debug!(from = ?self.screen, to = ?screen, "switching screen");
        self.screen = screen;

        match screen {
            Screen::Admin => self.admin.refresh(&self.store).map(Message::Admin),
            Screen::Catalog => {
                // Cards got no ticks while hidden.
                self.catalog.restart_autoplay(self.now);
                Task::none()
            }
            Screen::Categories | Screen::ProductPreview => Task::none(),
        }
    }

    fn handle_catalog_loaded(&mut self, result: Result<Vec<Product>, StoreError>, now: Instant) {
        match result {
            Ok(products) => {
                tracing::info!(products = products.len(), "catalog loaded");
                let filter = self.catalog.filter();
                self.catalog = Catalog::new(products, &self.resolver, self.carousel_settings, now);
                self.catalog.set_filter(filter, now);
            }
            Err(err) => {
                tracing::error!(%err, "could not load products");
                self.notifications
                    .push(Notification::error(format!("Could not load products: {err}")));
            }
        }
    }

    fn handle_catalog_event(&mut self, event: CatalogEvent) -> Task<Message> {
        match event {
            CatalogEvent::None => Task::none(),
            CatalogEvent::ShowCategories => self.switch_screen(Screen::Categories),
            CatalogEvent::OpenPreview { product_id, image } => {
                self.open_preview(product_id, image);
                Task::none()
            }
        }
    }

    fn open_preview(&mut self, product_id: u64, image: usize) {
        let Some(product) = self.catalog.product(product_id).cloned() else {
            tracing::warn!(product_id, "preview requested for unknown product");
            return;
        };

        tracing::debug!(product_id, image, "opening product preview");
        // Replacing an existing preview drops its lightbox guard first.
        self.preview = Some(ProductPreview::new(
            product,
            image,
            &self.resolver,
            self.carousel_settings,
            self.scroll_lock.clone(),
            self.now,
        ));
        self.screen = Screen::ProductPreview;
    }

    fn handle_preview_message(
        &mut self,
        message: product_preview::Message,
        now: Instant,
    ) -> Task<Message> {
        let Some(preview) = self.preview.as_mut() else {
            return Task::none();
        };
        match preview.update(message, now) {
            PreviewEvent::None => Task::none(),
            PreviewEvent::Back => self.switch_screen(Screen::Catalog),
        }
    }

    fn handle_admin_message(&mut self, message: admin::Message) -> Task<Message> {
        let (event, task) = self.admin.update(message, &self.store);
        let task = task.map(Message::Admin);
        match event {
            AdminEvent::None => task,
            AdminEvent::Notify(notification) => {
                self.notifications.push(notification);
                task
            }
            AdminEvent::Exit => Task::batch([task, self.switch_screen(Screen::Catalog)]),
        }
    }

    fn route_pointer(&mut self, message: carousel::Message, now: Instant) -> Task<Message> {
        match self.screen {
            Screen::Catalog => {
                let event = self.catalog.broadcast(&message, now);
                self.handle_catalog_event(event)
            }
            Screen::ProductPreview => self.handle_preview_message(
                product_preview::Message::Carousel(message),
                now,
            ),
            Screen::Categories | Screen::Admin => Task::none(),
        }
    }

    fn handle_lightbox_key(&mut self, key: LightboxKey, now: Instant) -> Task<Message> {
        self.handle_preview_message(
            product_preview::Message::Lightbox(lightbox::Message::Key(key)),
            now,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{SharedStore, StoreBackend};
    use crate::ui::catalog;
    use crate::infrastructure::InMemoryStore;
    use crate::ui::admin::Admin;
    use crate::ui::carousel::CarouselSettings;
    use crate::ui::image_source::ImageResolver;
    use crate::ui::notifications;
    use crate::ui::product_card;
    use crate::ui::state::ScrollLock;
    use crate::ui::theming::ThemeMode;
    use std::sync::Arc;

    fn app() -> App {
        let store: SharedStore = Arc::new(InMemoryStore::demo());
        let products = store.products().expect("demo products");
        let now = Instant::now();
        let resolver = ImageResolver::default();
        App {
            screen: Screen::Catalog,
            store,
            resolver: resolver.clone(),
            carousel_settings: CarouselSettings::default(),
            catalog: Catalog::new(products, &resolver, CarouselSettings::default(), now),
            preview: None,
            admin: Admin::new(Vec::new(), Vec::new(), resolver),
            scroll_lock: ScrollLock::new(),
            theme_mode: ThemeMode::Light,
            notifications: notifications::Manager::new(),
            now,
        }
    }

    fn first_product_id(app: &App) -> u64 {
        app.catalog.products().next().expect("demo product").id
    }

    fn open_first_preview(app: &mut App) {
        let _ = app.update(Message::Catalog(catalog::Message::Card {
            index: 0,
            message: product_card::Message::OpenDetails,
        }));
    }

    #[test]
    fn opening_a_card_shows_its_preview() {
        let mut app = app();
        let id = first_product_id(&app);
        open_first_preview(&mut app);

        assert_eq!(app.screen, Screen::ProductPreview);
        assert_eq!(app.preview.as_ref().map(|p| p.product().id), Some(id));
    }

    #[test]
    fn leaving_preview_with_open_lightbox_releases_scroll_lock() {
        let mut app = app();
        open_first_preview(&mut app);
        let _ = app.update(Message::Preview(product_preview::Message::OpenLightbox(0)));
        assert!(app.scroll_lock.is_locked());

        let _ = app.update(Message::SwitchScreen(Screen::Categories));
        assert!(app.preview.is_none());
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn escape_key_closes_the_lightbox() {
        let mut app = app();
        open_first_preview(&mut app);
        let _ = app.update(Message::Preview(product_preview::Message::OpenLightbox(0)));

        let _ = app.update(Message::LightboxKey(LightboxKey::Escape));
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.screen, Screen::ProductPreview);
    }

    #[test]
    fn choosing_a_category_filters_the_catalog() {
        use crate::domain::catalog::CategoryId;

        let mut app = app();
        let _ = app.update(Message::SwitchScreen(Screen::Categories));
        let _ = app.update(Message::Categories(categories::Message::Select(
            CategoryId::Ornaments,
        )));

        assert_eq!(app.screen, Screen::Catalog);
        assert_eq!(app.catalog.filter(), Some(CategoryId::Ornaments));
    }

    #[test]
    fn preview_screen_needs_a_preview() {
        let mut app = app();
        let _ = app.update(Message::SwitchScreen(Screen::ProductPreview));
        assert_eq!(app.screen, Screen::Catalog);
    }

    #[test]
    fn catalog_load_failure_is_reported() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Err(StoreError::Unavailable(
            "offline".into(),
        ))));
        assert!(app.notifications.has_notifications());
        assert!(app.catalog.products().count() > 0);
    }

    #[test]
    fn reloaded_catalog_keeps_the_filter() {
        use crate::domain::catalog::CategoryId;

        let mut app = app();
        app.catalog.set_filter(Some(CategoryId::Trees), app.now);
        let products = app.store.products().expect("demo products");
        let _ = app.update(Message::CatalogLoaded(Ok(products)));
        assert_eq!(app.catalog.filter(), Some(CategoryId::Trees));
    }

    #[test]
    fn returning_to_catalog_restarts_autoplay() {
        use std::time::Duration;

        let mut app = app();
        let t0 = app.now;
        let index = app
            .catalog
            .visible_indices()
            .find(|&i| app.catalog.card(i).is_some_and(|card| card.is_ticking()))
            .expect("demo has a multi-image product");

        let _ = app.update(Message::SwitchScreen(Screen::Categories));
        app.now = t0 + Duration::from_secs(10);
        let _ = app.switch_screen(Screen::Catalog);

        let _ = app.update(Message::Tick(t0 + Duration::from_millis(10_050)));
        assert_eq!(app.catalog.card(index).map(|c| c.carousel().cursor()), Some(0));

        let _ = app.update(Message::Tick(t0 + Duration::from_secs(14)));
        assert_eq!(app.catalog.card(index).map(|c| c.carousel().cursor()), Some(1));
    }

    #[test]
    fn admin_exit_returns_to_catalog() {
        let mut app = app();
        app.screen = Screen::Admin;
        let _ = app.update(Message::Admin(admin::Message::Exit));
        assert_eq!(app.screen, Screen::Catalog);
    }
}
