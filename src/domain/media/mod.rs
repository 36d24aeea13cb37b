// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the image sequences shown by carousels and the
//! lightbox, independent of how the images are eventually decoded.

pub mod sequence;

// Re-export commonly used types
pub use sequence::{substitute_broken, MediaSequence, PLACEHOLDER_IMAGE};
