// SPDX-License-Identifier: MPL-2.0
//! Image decoding from raw bytes (PNG, JPEG, GIF, WebP, SVG).

use crate::error::MediaError;
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;

/// Placeholder shown in place of any image that fails to load.
const PLACEHOLDER_SVG: &[u8] = include_bytes!("../../assets/placeholder.svg");

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Width over height, or 1 for a degenerate image.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

fn looks_like_svg(name: &str, bytes: &[u8]) -> bool {
    if name
        .rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        return true;
    }
    let head = &bytes[..bytes.len().min(256)];
    String::from_utf8_lossy(head).contains("<svg")
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData, MediaError> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| MediaError::Decode(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(MediaError::Decode("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| MediaError::Decode("failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
}

/// Decodes `bytes` into displayable pixels.
///
/// `name` is the URL or path the bytes came from; only its extension is used,
/// to pick the SVG rasterizer.
pub fn decode(name: &str, bytes: &[u8]) -> Result<ImageData, MediaError> {
    if looks_like_svg(name, bytes) {
        return rasterize_svg(bytes);
    }

    let img = image_rs::load_from_memory(bytes).map_err(|e| MediaError::Decode(e.to_string()))?;
    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// The bundled "image not available" picture.
#[must_use]
pub fn placeholder() -> ImageData {
    match rasterize_svg(PLACEHOLDER_SVG) {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(error = %err, "bundled placeholder failed to rasterize");
            ImageData::from_rgba(1, 1, vec![128, 128, 128, 255])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, ImageFormat::Png)
            .expect("failed to encode png");
        out.into_inner()
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let data = decode("sample.png", &png_bytes(4, 2)).expect("png should decode");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn decode_svg_rasterizes() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3"><rect width="6" height="3" fill="blue"/></svg>"#;
        let data = decode("https://example.org/shape", svg).expect("svg should decode");
        assert_eq!((data.width, data.height), (6, 3));
    }

    #[test]
    fn decode_garbage_is_decode_error() {
        match decode("broken.png", b"not a png") {
            Err(MediaError::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn broken_svg_is_decode_error() {
        assert!(matches!(
            decode("broken.svg", b"<svg>oops"),
            Err(MediaError::Decode(_))
        ));
    }

    #[test]
    fn placeholder_is_landscape() {
        let data = placeholder();
        assert!(data.width > data.height);
        assert!(data.aspect_ratio() > 1.0);
    }
}
