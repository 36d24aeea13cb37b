// SPDX-License-Identifier: MPL-2.0
//! Resolution of product image references into renderable sources.
//!
//! Catalog entries reference images as site paths (`/images/fir.jpg`). These
//! are looked up under the configured images directory once, when a
//! component is built. A reference that cannot be found, escapes the images
//! directory, or does not decode as an image renders the placeholder tile
//! instead, so a broken image never leaves a hole.

use crate::domain::media::{substitute_broken, MediaSequence, PLACEHOLDER_IMAGE};
use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Component, Path, PathBuf};

/// What to draw for one image reference.
#[derive(Debug, Clone)]
pub enum ImageSource {
    File(Handle),
    Placeholder,
}

impl ImageSource {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSource::Placeholder)
    }
}

/// Maps image references to files under an images directory.
#[derive(Debug, Clone, Default)]
pub struct ImageResolver {
    root: Option<PathBuf>,
}

impl ImageResolver {
    /// Resolver rooted at `root`. Without a root every reference renders
    /// as the placeholder.
    #[must_use]
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn resolve(&self, uri: &str) -> ImageSource {
        let path = self
            .root
            .as_ref()
            .and_then(|root| confined_path(root, uri));
        let loaded = path.as_deref().is_some_and(is_decodable);

        if substitute_broken(uri, loaded) == PLACEHOLDER_IMAGE {
            if uri != PLACEHOLDER_IMAGE {
                tracing::debug!(uri, "image missing or unreadable, using placeholder");
            }
            return ImageSource::Placeholder;
        }

        match path {
            Some(path) => ImageSource::File(Handle::from_path(path)),
            None => ImageSource::Placeholder,
        }
    }

    /// Resolves every entry of `sequence`, preserving order.
    pub fn resolve_all(&self, sequence: &MediaSequence) -> Vec<ImageSource> {
        sequence.iter().map(|uri| self.resolve(uri)).collect()
    }
}

/// Joins `uri` onto `root`, refusing references that could leave it.
fn confined_path(root: &Path, uri: &str) -> Option<PathBuf> {
    let relative = Path::new(uri.trim_start_matches('/'));
    relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
        .then(|| root.join(relative))
}

/// Whether `path` is a file whose header decodes as a supported image.
fn is_decodable(path: &Path) -> bool {
    let dimensions = image_rs::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image_rs::ImageError::from)
        .and_then(|reader| reader.into_dimensions());

    match dimensions {
        Ok((width, height)) => width > 0 && height > 0,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "cannot decode image");
            false
        }
    }
}

/// Renders `source` filling the given box.
pub fn view<'a, Message: 'a>(
    source: &ImageSource,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    match source {
        ImageSource::File(handle) => Image::new(handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        ImageSource::Placeholder => Container::new(
            Text::new("No image")
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        )
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_png(path: &Path) {
        image_rs::RgbImage::from_pixel(4, 3, image_rs::Rgb([20, 90, 40]))
            .save(path)
            .expect("write png");
    }

    #[test]
    fn existing_image_resolves_to_handle() {
        let dir = tempdir().expect("temp dir");
        std::fs::create_dir_all(dir.path().join("images")).expect("mkdir");
        write_png(&dir.path().join("images/fir.png"));

        let resolver = ImageResolver::new(Some(dir.path().to_path_buf()));
        assert!(matches!(
            resolver.resolve("/images/fir.png"),
            ImageSource::File(_)
        ));
    }

    #[test]
    fn undecodable_file_resolves_to_placeholder() {
        let dir = tempdir().expect("temp dir");
        std::fs::create_dir_all(dir.path().join("images")).expect("mkdir");
        std::fs::write(dir.path().join("images/fir.jpg"), b"jpeg").expect("write");
        std::fs::write(dir.path().join("images/empty.png"), b"").expect("write");

        let resolver = ImageResolver::new(Some(dir.path().to_path_buf()));
        assert!(resolver.resolve("/images/fir.jpg").is_placeholder());
        assert!(resolver.resolve("/images/empty.png").is_placeholder());
    }

    #[test]
    fn parent_dir_references_are_refused() {
        let dir = tempdir().expect("temp dir");
        let root = dir.path().join("shop");
        std::fs::create_dir_all(&root).expect("mkdir");
        write_png(&dir.path().join("outside.png"));

        let resolver = ImageResolver::new(Some(root));
        assert!(resolver.resolve("../outside.png").is_placeholder());
        assert!(resolver.resolve("/images/../../outside.png").is_placeholder());
    }

    #[test]
    fn missing_file_resolves_to_placeholder() {
        let dir = tempdir().expect("temp dir");
        let resolver = ImageResolver::new(Some(dir.path().to_path_buf()));
        assert!(resolver.resolve("/images/gone.jpg").is_placeholder());
    }

    #[test]
    fn no_root_means_placeholder() {
        let resolver = ImageResolver::default();
        assert!(resolver.resolve("/images/fir.jpg").is_placeholder());
        assert!(resolver.resolve(PLACEHOLDER_IMAGE).is_placeholder());
    }

    #[test]
    fn resolve_all_keeps_length_and_order() {
        let dir = tempdir().expect("temp dir");
        write_png(&dir.path().join("a.png"));
        let resolver = ImageResolver::new(Some(dir.path().to_path_buf()));

        let sequence = MediaSequence::new(vec!["/missing.png".into(), "/a.png".into()]);
        let sources = resolver.resolve_all(&sequence);

        assert_eq!(sources.len(), 2);
        assert!(sources[0].is_placeholder());
        assert!(!sources[1].is_placeholder());
    }
}
