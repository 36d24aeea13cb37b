// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::StoreError;
use crate::domain::catalog::Product;
use crate::ui::admin;
use crate::ui::catalog;
use crate::ui::categories;
use crate::ui::lightbox::LightboxKey;
use crate::ui::notifications;
use crate::ui::product_preview;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Catalog(catalog::Message),
    Categories(categories::Message),
    Preview(product_preview::Message),
    Admin(admin::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// Products fetched from the store at startup.
    CatalogLoaded(Result<Vec<Product>, StoreError>),
    /// Periodic tick for carousel auto-play and toast expiry.
    Tick(Instant),
    /// Pointer position anywhere in the window, used for swipes.
    PointerMoved(f32),
    /// Mouse button or finger released anywhere in the window.
    PointerReleased,
    /// Key press routed to the open lightbox.
    LightboxKey(LightboxKey),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Catalog file to load instead of the configured one.
    pub catalog: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Optional data directory override.
    pub data_dir: Option<String>,
    /// Start on the admin screen.
    pub admin: bool,
}
