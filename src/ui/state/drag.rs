// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.
//! Dragging keeps the point under the pointer fixed: on start the anchor is
//! `pointer - offset`, and every move yields `pointer - anchor`.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    anchor: Option<Point>,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Starts a drag operation from the current pan offset.
    pub fn start(&mut self, pointer: Point, offset: Vector) {
        self.anchor = Some(pointer - offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    /// Pan offset that keeps the anchor under the pointer.
    #[must_use]
    pub fn offset_for(&self, pointer: Point) -> Option<Vector> {
        self.anchor.map(|anchor| pointer - anchor)
    }
}
