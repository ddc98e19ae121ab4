// SPDX-License-Identifier: MPL-2.0
//! `cabinet` is a desktop browser for a museum archive catalog, built with
//! the Iced GUI framework.
//!
//! It loads a catalog of sources and curated exhibitions from bundled JSON
//! (or a data directory), and shows their images and 3D models in a
//! zoomable, pannable viewer. Localization uses Fluent; preferences live in
//! a small TOML file.
//!
//! # Modules
//!
//! - [`catalog`] - Loading, validation and queries over the catalog data
//! - [`domain`] - Media items and bounded viewer values shared by the UI
//! - [`media`] - Image fetching, decoding and the in-memory cache
//! - [`ui`] - Screens, the media viewer and styling
//! - [`app`] - The Iced application: state, update loop, subscriptions

#![doc(html_root_url = "https://docs.rs/cabinet/0.1.0")]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
