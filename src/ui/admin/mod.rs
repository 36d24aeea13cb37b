// SPDX-License-Identifier: MPL-2.0
//! Admin screen: orders and products tabs.

pub mod orders;
pub mod products;

use crate::application::port::{SharedStore, StoreError};
use crate::domain::catalog::{Order, Product};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::image_source::ImageResolver;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, scrollable, Column, Row, Space, Text};
use iced::{Element, Font, Length, Task};

pub use orders::OrdersPanel;
pub use products::ProductsPanel;

/// Runs a blocking store call off the UI thread.
pub(crate) async fn with_store<T, F>(call: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Orders,
    Products,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    Orders(orders::Message),
    Products(products::Message),
    Exit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
    Exit,
}

#[derive(Debug)]
pub struct Admin {
    tab: Tab,
    orders: OrdersPanel,
    products: ProductsPanel,
}

impl Admin {
    #[must_use]
    pub fn new(orders: Vec<Order>, products: Vec<Product>, resolver: ImageResolver) -> Self {
        Self {
            tab: Tab::default(),
            orders: OrdersPanel::new(orders),
            products: ProductsPanel::new(products, resolver),
        }
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn orders(&self) -> &OrdersPanel {
        &self.orders
    }

    #[must_use]
    pub fn products(&self) -> &ProductsPanel {
        &self.products
    }

    /// Reloads both tabs from the store.
    pub fn refresh(&mut self, store: &SharedStore) -> Task<Message> {
        Task::batch([
            self.orders.refresh(store).map(Message::Orders),
            self.products.refresh(store).map(Message::Products),
        ])
    }

    pub fn update(&mut self, message: Message, store: &SharedStore) -> (Event, Task<Message>) {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                (Event::None, Task::none())
            }
            Message::Orders(message) => {
                let (event, task) = self.orders.update(message, store);
                let event = match event {
                    orders::Event::None => Event::None,
                    orders::Event::Updated { order_number } => Event::Notify(
                        Notification::success(format!("Order {order_number} updated")),
                    ),
                    orders::Event::Failed(text) => Event::Notify(Notification::error(text)),
                };
                (event, task.map(Message::Orders))
            }
            Message::Products(message) => {
                let (event, task) = self.products.update(message, store);
                let event = match event {
                    products::Event::None => Event::None,
                    products::Event::Failed(text) => Event::Notify(Notification::error(text)),
                };
                (event, task.map(Message::Products))
            }
            Message::Exit => (Event::Exit, Task::none()),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tab_button = |label: &'static str, tab: Tab| {
            let style = if self.tab == tab {
                styles::button::primary
            } else {
                styles::button::secondary
            };
            button(Text::new(label).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::TabSelected(tab))
                .style(style)
        };

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new("Store admin")
                    .size(typography::TITLE_LG)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            )
            .push(Space::new().width(Length::Fill))
            .push(tab_button("Orders", Tab::Orders))
            .push(tab_button("Products", Tab::Products))
            .push(
                button(Text::new("Storefront").size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::Exit)
                    .style(styles::button::secondary),
            );

        let body = match self.tab {
            Tab::Orders => self.orders.view().map(Message::Orders),
            Tab::Products => self.products.view().map(Message::Products),
        };

        scrollable(
            Column::new()
                .spacing(spacing::LG)
                .padding(spacing::LG)
                .push(header)
                .push(body),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::StoreBackend;
    use crate::domain::catalog::OrderStatus;
    use crate::infrastructure::InMemoryStore;
    use crate::ui::notifications::Severity;
    use std::sync::Arc;

    fn admin() -> (Admin, SharedStore) {
        let store = InMemoryStore::demo();
        let admin = Admin::new(
            store.orders().expect("orders"),
            store.products().expect("products"),
            ImageResolver::default(),
        );
        (admin, Arc::new(store))
    }

    #[test]
    fn failed_update_becomes_error_toast() {
        let (mut admin, store) = admin();
        let order_id = admin.orders().orders()[0].id;
        let (event, _) = admin.update(
            Message::Orders(orders::Message::StatusUpdated {
                order_id,
                result: Err(StoreError::NotFound { order_id }),
            }),
            &store,
        );
        match event {
            Event::Notify(n) => assert_eq!(n.severity(), Severity::Error),
            other => panic!("expected a notification, got {other:?}"),
        }
        assert!(!admin.orders().is_updating(order_id));
    }

    #[test]
    fn successful_update_becomes_success_toast() {
        let (mut admin, store) = admin();
        let mut order = admin.orders().orders()[0].clone();
        order.status = OrderStatus::Completed;
        let (event, _) = admin.update(
            Message::Orders(orders::Message::StatusUpdated {
                order_id: order.id,
                result: Ok(order),
            }),
            &store,
        );
        assert!(matches!(event, Event::Notify(n) if n.severity() == Severity::Success));
    }

    #[test]
    fn tabs_switch() {
        let (mut admin, store) = admin();
        assert_eq!(admin.tab(), Tab::Orders);
        admin.update(Message::TabSelected(Tab::Products), &store);
        assert_eq!(admin.tab(), Tab::Products);
    }

    #[tokio::test]
    async fn store_calls_run_off_thread() {
        let store = InMemoryStore::demo();
        store.set_fail_updates(true);
        let store: SharedStore = Arc::new(store);

        let failing = SharedStore::clone(&store);
        let result = with_store(move || failing.update_order_status(1, OrderStatus::Completed)).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));

        let orders = with_store(move || store.orders()).await.expect("orders");
        assert_eq!(orders.len(), 3);
    }
}
