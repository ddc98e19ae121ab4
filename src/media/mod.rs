// SPDX-License-Identifier: MPL-2.0
//! Media loading for the viewer: fetching, decoding and caching images and
//! 3D models.
//!
//! Only the model of the item on stage is downloaded; thumbnails and covers
//! use the model's poster.

pub mod cache;
pub mod fetch;
pub mod image;
pub mod model;

// Re-export commonly used types
pub use cache::{MediaCache, MediaSlot};
pub use fetch::{Fetcher, MediaLocation};
pub use image::{decode, placeholder, ImageData};
pub use model::ModelData;
