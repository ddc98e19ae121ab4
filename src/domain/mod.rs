// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability
//! and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Viewer sequence entries ([`MediaItem`](media::MediaItem),
//!   [`MediaKind`](media::MediaKind))
//! - [`ui`]: UI value objects ([`ZoomFactor`](ui::newtypes::ZoomFactor),
//!   [`CameraDistance`](ui::newtypes::CameraDistance))

pub mod media;
pub mod ui;
