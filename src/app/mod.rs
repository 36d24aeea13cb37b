// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront screens.
//!
//! The `App` struct owns the store handle, the screen components and the
//! shared page scroll lock, and translates messages into screen changes and
//! background store calls.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{SharedStore, StoreBackend};
use crate::infrastructure::InMemoryStore;
use crate::ui::admin::{self, Admin};
use crate::ui::carousel::CarouselSettings;
use crate::ui::catalog::Catalog;
use crate::ui::image_source::ImageResolver;
use crate::ui::notifications::{self, Notification};
use crate::ui::product_preview::ProductPreview;
use crate::ui::state::ScrollLock;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Name shown in the window title and page header.
pub const STORE_NAME: &str = "Evergreen Decor";

/// File looked up in the data directory when no catalog is configured.
const DEFAULT_CATALOG_FILE: &str = "catalog.toml";

/// Root Iced application state.
pub struct App {
    screen: Screen,
    store: SharedStore,
    resolver: ImageResolver,
    carousel_settings: CarouselSettings,
    catalog: Catalog,
    /// Present while the product preview screen is shown. Dropping it
    /// releases any scroll lock its lightbox holds.
    preview: Option<ProductPreview>,
    admin: Admin,
    scroll_lock: ScrollLock,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    /// Time of the latest tick; views render auto-play progress against it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("products", &self.catalog.products().count())
            .field("preview_open", &self.preview.is_some())
            .field("scroll_locked", &self.scroll_lock.is_locked())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, opens the store and starts fetching the catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let now = Instant::now();
        let mut notifications = notifications::Manager::new();

        if let Some(warning) = config_warning {
            notifications.push(Notification::warning(warning));
        }

        let catalog_path = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.catalog.catalog_path.clone())
            .or_else(|| {
                paths::get_app_data_dir()
                    .map(|dir| dir.join(DEFAULT_CATALOG_FILE))
                    .filter(|path| path.is_file())
            });

        let store: SharedStore = match catalog_path.as_deref() {
            Some(path) => match InMemoryStore::from_path(path) {
                Ok(store) => Arc::new(store),
                Err(err) => {
                    tracing::error!(%err, "could not load catalog {}", path.display());
                    notifications.push(Notification::error(format!(
                        "Could not load catalog {}: {err}",
                        path.display()
                    )));
                    Arc::new(InMemoryStore::default())
                }
            },
            None => {
                tracing::info!("no catalog configured, using demo catalog");
                Arc::new(InMemoryStore::demo())
            }
        };

        let images_root = config
            .images_root(catalog_path.as_deref())
            .or_else(paths::get_app_data_dir);
        let resolver = ImageResolver::new(images_root);
        let screen = if flags.admin {
            Screen::Admin
        } else {
            Screen::Catalog
        };

        let mut app = App {
            screen,
            store,
            resolver: resolver.clone(),
            carousel_settings: config.carousel_settings(),
            catalog: Catalog::default(),
            preview: None,
            admin: Admin::new(Vec::new(), Vec::new(), resolver),
            scroll_lock: ScrollLock::new(),
            theme_mode: config.general.theme_mode,
            notifications,
            now,
        };

        let mut tasks = vec![app.load_catalog()];
        if app.screen == Screen::Admin {
            tasks.push(app.admin.refresh(&app.store).map(Message::Admin));
        }

        tracing::info!(screen = ?app.screen, "storefront started");
        (app, Task::batch(tasks))
    }

    fn load_catalog(&self) -> Task<Message> {
        let store = SharedStore::clone(&self.store);
        Task::perform(
            admin::with_store(move || store.products()),
            Message::CatalogLoaded,
        )
    }

    fn title(&self) -> String {
        match (&self.screen, &self.preview) {
            (Screen::ProductPreview, Some(preview)) => {
                format!("{} - {STORE_NAME}", preview.product().title)
            }
            (Screen::Admin, _) => format!("Admin - {STORE_NAME}"),
            _ => STORE_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticking = (self.screen == Screen::Catalog && self.catalog.is_ticking())
            || self.notifications.has_notifications();
        let lightbox_open = self
            .preview
            .as_ref()
            .is_some_and(ProductPreview::is_lightbox_open);

        Subscription::batch([
            subscription::create_pointer_subscription(self.screen),
            subscription::create_tick_subscription(ticking),
            subscription::create_lightbox_key_subscription(lightbox_open),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            catalog: &self.catalog,
            preview: self.preview.as_ref(),
            admin: &self.admin,
            notifications: &self.notifications,
            scroll_locked: self.scroll_lock.is_locked(),
            now: self.now,
        })
    }
}
