// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state types used by the viewer sub-components, kept free of
//! message handling so they can be tested in isolation.

pub mod drag;
pub mod zoom;

pub use drag::DragState;
pub use zoom::ZoomState;
