// SPDX-License-Identifier: MPL-2.0
//! Admin order list with per-order status picker.
//!
//! Changing a status sends the update to the store in the background. While
//! it is in flight the order shows an "Updating…" indicator and its picker is
//! disabled. The indicator is cleared as soon as the result arrives, before
//! the result is inspected, so a failed update can never leave it stuck.

use super::with_store;
use crate::application::port::{SharedStore, StoreBackend, StoreError};
use crate::domain::catalog::{Order, OrderStatus};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, pick_list, Column, Container, Row, Space, Text};
use iced::{Color, Element, Font, Length, Task};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Vec<Order>, StoreError>),
    StatusSelected {
        order_id: u64,
        status: OrderStatus,
    },
    StatusUpdated {
        order_id: u64,
        result: Result<Order, StoreError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Updated { order_number: String },
    Failed(String),
}

#[derive(Debug, Default)]
pub struct OrdersPanel {
    orders: Vec<Order>,
    updating: HashSet<u64>,
    loading: bool,
}

impl OrdersPanel {
    #[must_use]
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn is_updating(&self, order_id: u64) -> bool {
        self.updating.contains(&order_id)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Asks the store for the current order list.
    pub fn refresh(&mut self, store: &SharedStore) -> Task<Message> {
        self.loading = true;
        let store = SharedStore::clone(store);
        Task::perform(with_store(move || store.orders()), Message::Loaded)
    }

    pub fn update(&mut self, message: Message, store: &SharedStore) -> (Event, Task<Message>) {
        match message {
            Message::Refresh => (Event::None, self.refresh(store)),
            Message::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(orders) => {
                        self.orders = orders;
                        (Event::None, Task::none())
                    }
                    Err(error) => (
                        Event::Failed(format!("Could not load orders: {error}")),
                        Task::none(),
                    ),
                }
            }
            Message::StatusSelected { order_id, status } => {
                let unchanged = self
                    .orders
                    .iter()
                    .any(|order| order.id == order_id && order.status == status);
                if unchanged || !self.updating.insert(order_id) {
                    return (Event::None, Task::none());
                }

                tracing::info!(order_id, status = %status, "updating order status");
                let store = SharedStore::clone(store);
                let task = Task::perform(
                    with_store(move || store.update_order_status(order_id, status)),
                    move |result| Message::StatusUpdated { order_id, result },
                );
                (Event::None, task)
            }
            Message::StatusUpdated { order_id, result } => {
                self.updating.remove(&order_id);
                match result {
                    Ok(updated) => {
                        let order_number = updated.order_number.clone();
                        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
                            *order = updated;
                        }
                        (Event::Updated { order_number }, Task::none())
                    }
                    Err(error) => {
                        tracing::warn!(order_id, %error, "order status update failed");
                        let label = self
                            .orders
                            .iter()
                            .find(|o| o.id == order_id)
                            .map_or_else(|| format!("#{order_id}"), |o| o.order_number.clone());
                        (
                            Event::Failed(format!("Could not update order {label}: {error}")),
                            Task::none(),
                        )
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut header = Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(format!("{} orders", self.orders.len())).size(typography::BODY))
            .push(Space::new().width(Length::Fill));
        header = if self.loading {
            header.push(Text::new("Loading…").size(typography::CAPTION))
        } else {
            header.push(
                button(Text::new("Refresh").size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::Refresh)
                    .style(styles::button::secondary),
            )
        };

        let rows = self
            .orders
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, order| {
                column.push(self.order_row(order))
            });

        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(rows)
            .into()
    }

    fn order_row<'a>(&'a self, order: &'a Order) -> Element<'a, Message> {
        let order_id = order.id;
        let updating = self.is_updating(order_id);

        let mut summary = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(
                Text::new(format!("{} · {}", order.order_number, order.customer_name))
                    .size(typography::BODY)
                    .font(Font {
                        weight: Weight::Semibold,
                        ..Font::default()
                    }),
            )
            .push(
                Text::new(format!(
                    "{} · placed {}",
                    order.formatted_total(),
                    order.formatted_created_at()
                ))
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
            );

        if let Some(date) = order.installation_date {
            summary = summary.push(
                Text::new(format!("Installation {}", date.format("%Y-%m-%d")))
                    .size(typography::CAPTION),
            );
        }
        if let Some(tree) = order.tree_summary() {
            summary = summary.push(Text::new(tree).size(typography::CAPTION));
        }
        let extras: Vec<&str> = order
            .products
            .iter()
            .chain(order.gift_cards.iter())
            .flatten()
            .map(String::as_str)
            .collect();
        if !extras.is_empty() {
            summary = summary.push(Text::new(extras.join(", ")).size(typography::CAPTION));
        }

        let badge = Container::new(Text::new(order.status.label()).size(typography::CAPTION))
            .padding([2.0, spacing::XS])
            .style(styles::container::badge(status_color(order.status)));

        let control: Element<'a, Message> = if updating {
            Text::new("Updating…")
                .size(typography::CAPTION)
                .color(palette::INFO_500)
                .into()
        } else {
            pick_list(OrderStatus::ALL, Some(order.status), move |status| {
                Message::StatusSelected { order_id, status }
            })
            .text_size(typography::BODY)
            .padding(spacing::XXS)
            .into()
        };

        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(summary)
                .push(badge)
                .push(control),
        )
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
    }
}

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => palette::WARNING_500,
        OrderStatus::Confirmed => palette::INFO_500,
        OrderStatus::Delivered => palette::PRIMARY_600,
        OrderStatus::Completed => palette::GRAY_500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryStore;
    use std::sync::Arc;

    fn panel() -> (OrdersPanel, SharedStore) {
        let store = InMemoryStore::demo();
        let orders = store.orders().expect("demo orders");
        (OrdersPanel::new(orders), Arc::new(store))
    }

    #[test]
    fn selecting_a_new_status_marks_order_updating() {
        let (mut panel, store) = panel();
        let order = panel.orders()[0].clone();
        let target = OrderStatus::ALL
            .into_iter()
            .find(|s| *s != order.status)
            .expect("another status");

        panel.update(
            Message::StatusSelected {
                order_id: order.id,
                status: target,
            },
            &store,
        );
        assert!(panel.is_updating(order.id));
    }

    #[test]
    fn selecting_the_current_status_is_a_no_op() {
        let (mut panel, store) = panel();
        let order = panel.orders()[0].clone();
        panel.update(
            Message::StatusSelected {
                order_id: order.id,
                status: order.status,
            },
            &store,
        );
        assert!(!panel.is_updating(order.id));
    }

    #[test]
    fn failure_clears_updating_and_reports() {
        let (mut panel, store) = panel();
        let order = panel.orders()[0].clone();
        panel.updating.insert(order.id);

        let (event, _) = panel.update(
            Message::StatusUpdated {
                order_id: order.id,
                result: Err(StoreError::Unavailable("backend offline".into())),
            },
            &store,
        );

        assert!(!panel.is_updating(order.id));
        match event {
            Event::Failed(text) => {
                assert!(text.contains(&order.order_number));
                assert!(text.contains("backend offline"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(panel.orders()[0].status, order.status);
    }

    #[test]
    fn success_replaces_the_order() {
        let (mut panel, store) = panel();
        let mut updated = panel.orders()[0].clone();
        updated.status = OrderStatus::Completed;
        panel.updating.insert(updated.id);

        let (event, _) = panel.update(
            Message::StatusUpdated {
                order_id: updated.id,
                result: Ok(updated.clone()),
            },
            &store,
        );

        assert!(!panel.is_updating(updated.id));
        assert_eq!(panel.orders()[0].status, OrderStatus::Completed);
        assert_eq!(
            event,
            Event::Updated {
                order_number: updated.order_number
            }
        );
    }

    #[test]
    fn load_failure_is_reported_and_stops_loading() {
        let (mut panel, store) = panel();
        panel.loading = true;
        let (event, _) = panel.update(
            Message::Loaded(Err(StoreError::Unavailable("timeout".into()))),
            &store,
        );
        assert!(!panel.is_loading());
        assert!(matches!(event, Event::Failed(_)));
    }
}
