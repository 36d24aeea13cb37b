// SPDX-License-Identifier: MPL-2.0
//! Admin product list: first image, title, category, price, colors.

use super::with_store;
use crate::application::port::{SharedStore, StoreBackend, StoreError};
use crate::domain::catalog::{CategoryConfig, Product};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::image_source::{self, ImageResolver, ImageSource};
use crate::ui::styles;
use crate::ui::swatch;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length, Task};

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Vec<Product>, StoreError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ProductsPanel {
    rows: Vec<(Product, ImageSource)>,
    resolver: ImageResolver,
    loading: bool,
}

impl ProductsPanel {
    #[must_use]
    pub fn new(products: Vec<Product>, resolver: ImageResolver) -> Self {
        let mut panel = Self {
            rows: Vec::new(),
            resolver,
            loading: false,
        };
        panel.set_products(products);
        panel
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.rows.iter().map(|(product, _)| product)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn set_products(&mut self, products: Vec<Product>) {
        self.rows = products
            .into_iter()
            .map(|product| {
                let thumbnail = product
                    .images
                    .first()
                    .map_or(ImageSource::Placeholder, |uri| self.resolver.resolve(uri));
                (product, thumbnail)
            })
            .collect();
    }

    pub fn refresh(&mut self, store: &SharedStore) -> Task<Message> {
        self.loading = true;
        let store = SharedStore::clone(store);
        Task::perform(with_store(move || store.products()), Message::Loaded)
    }

    pub fn update(&mut self, message: Message, store: &SharedStore) -> (Event, Task<Message>) {
        match message {
            Message::Refresh => (Event::None, self.refresh(store)),
            Message::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(products) => {
                        self.set_products(products);
                        (Event::None, Task::none())
                    }
                    Err(error) => (
                        Event::Failed(format!("Could not load products: {error}")),
                        Task::none(),
                    ),
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut header = Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(format!("{} products", self.rows.len())).size(typography::BODY))
            .push(Space::new().width(Length::Fill));
        if !self.loading {
            header = header.push(
                button(Text::new("Refresh").size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::Refresh)
                    .style(styles::button::secondary),
            );
        }

        let rows = self
            .rows
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, (product, thumbnail)| {
                column.push(product_row(product, thumbnail))
            });

        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(rows)
            .into()
    }
}

fn product_row<'a>(product: &'a Product, thumbnail: &ImageSource) -> Element<'a, Message> {
    let category = CategoryConfig::lookup(&product.category);

    let mut info = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Text::new(product.title.as_str())
                .size(typography::BODY)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                }),
        )
        .push(
            Text::new(format!("{} · {} images", category.title, product.images.len()))
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );
    if product.color.is_some() {
        info = info.push(swatch::color_tags(product));
    }

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(image_source::view(
            thumbnail,
            Length::Fixed(sizing::ADMIN_THUMBNAIL),
            Length::Fixed(sizing::ADMIN_THUMBNAIL),
        ))
        .push(info);

    if product.is_decorated() {
        row = row.push(
            Container::new(Text::new("Decorated").size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::badge(palette::ACCENT_500)),
        );
    }

    Container::new(row.push(Text::new(product.formatted_price()).size(typography::BODY)))
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::product::fixtures::product;
    use crate::infrastructure::InMemoryStore;
    use std::sync::Arc;

    #[test]
    fn product_without_images_gets_placeholder_thumbnail() {
        let panel = ProductsPanel::new(vec![product(1, &[], None)], ImageResolver::default());
        assert!(panel.rows[0].1.is_placeholder());
    }

    #[test]
    fn loaded_products_replace_rows() {
        let store: SharedStore = Arc::new(InMemoryStore::demo());
        let mut panel = ProductsPanel::default();
        let products = store.products().expect("demo products");
        let expected = products.len();

        panel.loading = true;
        let (event, _) = panel.update(Message::Loaded(Ok(products)), &store);

        assert_eq!(event, Event::None);
        assert!(!panel.is_loading());
        assert_eq!(panel.products().count(), expected);
    }

    #[test]
    fn load_failure_keeps_previous_rows() {
        let store: SharedStore = Arc::new(InMemoryStore::demo());
        let mut panel = ProductsPanel::new(vec![product(1, &[], None)], ImageResolver::default());
        let (event, _) = panel.update(
            Message::Loaded(Err(StoreError::Unavailable("down".into()))),
            &store,
        );
        assert!(matches!(event, Event::Failed(_)));
        assert_eq!(panel.products().count(), 1);
    }
}
