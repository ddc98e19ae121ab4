// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`pages`] - Catalog screens (welcome, explore, discover, source detail,
//!   exhibitions, exhibition parts and objects, about)
//! - [`viewer`] - Media viewer with zoom, pan, navigation and fullscreen,
//!   inline or in a modal
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Plain zoom and drag state used by the viewer
//! - [`scroll_lock`] - Background scroll suspension while a modal is open
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Top navigation bar
//! - [`widgets`] - GPU rendering of 3D models

pub mod design_tokens;
pub mod navbar;
pub mod pages;
pub mod scroll_lock;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
