// SPDX-License-Identifier: MPL-2.0
//! Non-empty, immutable image sequences.

use std::ops::Index;

/// Reference substituted for missing or broken product images.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Ordered image references presented by a carousel or lightbox.
///
/// The sequence is never empty: building one from an empty list yields a
/// single [`PLACEHOLDER_IMAGE`] entry. It is built once per component and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSequence {
    images: Vec<String>,
}

impl MediaSequence {
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        if images.is_empty() {
            Self {
                images: vec![PLACEHOLDER_IMAGE.to_string()],
            }
        } else {
            Self { images }
        }
    }

    /// Builds a sequence from borrowed references.
    #[must_use]
    pub fn from_refs(images: &[String]) -> Self {
        Self::new(images.to_vec())
    }

    /// Number of images; always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`, provided for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether navigation controls make sense for this sequence.
    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn first(&self) -> &str {
        &self.images[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }

    /// True when the sequence is only the substituted placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.images.len() == 1 && self.images[0] == PLACEHOLDER_IMAGE
    }
}

impl Index<usize> for MediaSequence {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.images[index]
    }
}

/// Returns the reference to display for `uri`, replacing it with the
/// placeholder when the image could not be loaded.
#[must_use]
pub fn substitute_broken(uri: &str, loaded: bool) -> &str {
    if loaded {
        uri
    } else {
        PLACEHOLDER_IMAGE
    }
}
