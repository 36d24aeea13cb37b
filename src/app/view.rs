// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen sits under a navigation bar. Overlays are stacked on
//! top: the product preview's lightbox, then toasts.

use super::{Message, Screen, STORE_NAME};
use crate::ui::admin::Admin;
use crate::ui::catalog::Catalog;
use crate::ui::categories;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::product_preview::ProductPreview;
use crate::ui::styles;
use crate::ui::widgets::scroll_locked;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Font, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub preview: Option<&'a ProductPreview>,
    pub admin: &'a Admin,
    pub notifications: &'a notifications::Manager,
    pub scroll_locked: bool,
    pub now: Instant,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.preview) {
        (Screen::Catalog, _) | (Screen::ProductPreview, None) => {
            ctx.catalog.view(ctx.now).map(Message::Catalog)
        }
        (Screen::Categories, _) => {
            categories::view(|id| ctx.catalog.count_in(id)).map(Message::Categories)
        }
        (Screen::ProductPreview, Some(preview)) => preview.view(ctx.now).map(Message::Preview),
        (Screen::Admin, _) => ctx.admin.view().map(Message::Admin),
    };

    let page = Column::new()
        .push(navbar(ctx.screen))
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scroll_locked(page, ctx.scroll_locked));

    if let Some(preview) = ctx.preview.filter(|p| p.is_lightbox_open()) {
        layers = layers.push(preview.lightbox_view().map(Message::Preview));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn navbar<'a>(screen: Screen) -> Element<'a, Message> {
    let link = |label: &'static str, target: Screen| {
        let active = screen == target
            || (target == Screen::Catalog && screen == Screen::ProductPreview);
        let style = if active {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        button(Text::new(label).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::SwitchScreen(target))
            .style(style)
    };

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                Text::new(STORE_NAME)
                    .size(typography::TITLE_MD)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            )
            .push(Space::new().width(Length::Fill))
            .push(link("Shop", Screen::Catalog))
            .push(link("Categories", Screen::Categories))
            .push(link("Admin", Screen::Admin)),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::LG])
    .style(styles::container::panel)
    .into()
}
