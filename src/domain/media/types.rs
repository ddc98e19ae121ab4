// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

/// What a media item renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image, shown in the zoom/pan stage.
    Image,
    /// Interactive 3D model, shown in the orbit stage.
    Model3d,
}

/// One entry in a viewer sequence.
///
/// Built fresh from a catalog record every time a viewer opens; the viewer
/// never mutates it.
///
/// # Example
///
/// ```
/// use cabinet::domain::media::{MediaItem, MediaKind};
///
/// let item = MediaItem::image("https://example.org/flea.jpg")
///     .with_caption(Some("Micrographia, plate 34".into()));
///
/// assert_eq!(item.kind, MediaKind::Image);
/// assert!(!item.is_3d());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Image URL, or model URL for 3D items.
    pub url: String,
    pub caption: Option<String>,
    pub credit: Option<String>,
    pub kind: MediaKind,
    /// Explicit model location. Its presence alone marks the item as 3D.
    pub model_url: Option<String>,
    /// Still preview for a 3D model.
    pub poster: Option<String>,
}

impl MediaItem {
    /// Creates an image item with no caption or credit.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: None,
            credit: None,
            kind: MediaKind::Image,
            model_url: None,
            poster: None,
        }
    }

    /// Creates a 3D model item.
    #[must_use]
    pub fn model(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            model_url: Some(url.clone()),
            url,
            caption: None,
            credit: None,
            kind: MediaKind::Model3d,
            poster: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption.filter(|c| !c.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_credit(mut self, credit: Option<String>) -> Self {
        self.credit = credit.filter(|c| !c.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_poster(mut self, poster: Option<String>) -> Self {
        self.poster = poster;
        self
    }

    /// Returns true if this item bypasses the 2D zoom/pan stage.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.kind == MediaKind::Model3d || self.model_url.is_some()
    }

    /// Location handed to the 3D stage.
    #[must_use]
    pub fn model_location(&self) -> &str {
        self.model_url.as_deref().unwrap_or(&self.url)
    }

    /// Raster image shown for this item: the image itself, or the poster of
    /// a 3D model if it has one.
    #[must_use]
    pub fn still_url(&self) -> Option<&str> {
        if self.is_3d() {
            self.poster.as_deref()
        } else {
            Some(&self.url)
        }
    }
}
