// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state of the 2D image stage.
//!
//! The zoom factor is bounded by [`ZoomFactor`]. The pan offset is only
//! meaningful while zoomed in; whenever the factor drops back to 1 or below
//! the offset collapses to the origin so the image re-centers.

use crate::domain::ui::ZoomFactor;
use iced::Vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    factor: ZoomFactor,
    pan: Vector,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            factor: ZoomFactor::default(),
            pan: Vector::ZERO,
        }
    }
}

impl ZoomState {
    #[must_use]
    pub fn factor(&self) -> ZoomFactor {
        self.factor
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    pub fn zoom_in(&mut self) {
        self.apply(self.factor.zoom_in());
    }

    pub fn zoom_out(&mut self) {
        self.apply(self.factor.zoom_out());
    }

    /// Applies one mouse-wheel notch.
    pub fn wheel(&mut self, scroll_up: bool) {
        self.apply(self.factor.wheel(scroll_up));
    }

    /// Back to exactly 1× and a centered image.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves the image. Ignored unless zoomed in.
    pub fn set_pan(&mut self, pan: Vector) -> bool {
        if !self.factor.allows_pan() {
            return false;
        }
        self.pan = pan;
        true
    }

    fn apply(&mut self, factor: ZoomFactor) {
        self.factor = factor;
        if !factor.allows_pan() {
            self.pan = Vector::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn default_is_unzoomed_and_centered() {
        let state = ZoomState::default();
        assert_abs_diff_eq!(state.factor().value(), 1.0);
        assert_eq!(state.pan(), Vector::ZERO);
    }

    #[test]
    fn pan_is_rejected_at_unit_zoom() {
        let mut state = ZoomState::default();
        assert!(!state.set_pan(Vector::new(10.0, 5.0)));
        assert_eq!(state.pan(), Vector::ZERO);
    }

    #[test]
    fn zooming_back_out_recenters() {
        let mut state = ZoomState::default();
        state.zoom_in();
        assert!(state.set_pan(Vector::new(30.0, -12.0)));
        state.zoom_out();
        assert_abs_diff_eq!(state.factor().value(), 1.0, epsilon = F32_EPSILON);
        assert_eq!(state.pan(), Vector::ZERO);
    }

    #[test]
    fn reset_restores_exact_defaults() {
        let mut state = ZoomState::default();
        state.zoom_in();
        state.wheel(true);
        state.set_pan(Vector::new(4.0, 4.0));
        state.reset();
        assert_eq!(state, ZoomState::default());
    }
}
