// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`catalog`] - Product card grid, optionally filtered by category
//! - [`categories`] - Category tiles styled from the category table
//! - [`product_preview`] - Large carousel, details and the lightbox
//! - [`admin`] - Order status management and product overview
//!
//! # Components
//!
//! - [`carousel`] - Image carousel with arrows, swipe and auto-play
//! - [`lightbox`] - Full-window image viewer with keyboard navigation
//! - [`product_card`] - Catalog card for one product
//! - [`swatch`] - Color tags with readable label text
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Toolkit-independent state (carousel index, gestures, auto-play, scroll lock)
//! - [`image_source`] - Image reference resolution with placeholder fallback
//! - [`widgets`] - Custom Iced widgets (scroll-locked page)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod admin;
pub mod carousel;
pub mod catalog;
pub mod categories;
pub mod design_tokens;
pub mod image_source;
pub mod lightbox;
pub mod notifications;
pub mod product_card;
pub mod product_preview;
pub mod state;
pub mod styles;
pub mod swatch;
pub mod theming;
pub mod widgets;
