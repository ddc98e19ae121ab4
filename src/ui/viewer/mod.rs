// SPDX-License-Identifier: MPL-2.0
//! Media viewer: zoom, pan, navigation and fullscreen over a sequence of
//! images and 3D models.
//!
//! The same component runs inline on detail pages and inside a [`modal`].

pub mod component;
pub mod controls;
pub mod keyboard;
pub mod modal;
pub mod pane;
pub mod stage;
pub mod subcomponents;

pub use component::{Effect, Message, State};
pub use modal::Modal;
