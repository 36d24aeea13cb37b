// SPDX-License-Identifier: MPL-2.0
//! `evergreen_storefront` is the shopper and admin front-end of a seasonal
//! decor store, built with the Iced GUI framework.
//!
//! The crate is layered: [`domain`] holds pure catalog, color and media
//! types; [`application`] defines the store backend port; [`infrastructure`]
//! implements it; [`ui`] renders carousels, the lightbox and the product
//! screens; [`app`] wires everything into an Iced application.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
