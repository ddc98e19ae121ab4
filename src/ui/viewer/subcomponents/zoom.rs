// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component encapsulating ZoomState and its handlers.

use crate::ui::state::ZoomState;
use iced::Vector;

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying zoom state.
    pub inner: ZoomState,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Zoom in by one step.
    ZoomIn,
    /// Zoom out by one step.
    ZoomOut,
    /// Reset zoom and pan to default.
    Reset,
    /// One mouse-wheel notch.
    Wheel { scroll_up: bool },
    /// Move the image (from a drag).
    Pan(Vector),
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Zoom level changed.
    ZoomChanged,
}

impl State {
    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = self.inner;
        match msg {
            Message::ZoomIn => self.inner.zoom_in(),
            Message::ZoomOut => self.inner.zoom_out(),
            Message::Reset => self.inner.reset(),
            Message::Wheel { scroll_up } => self.inner.wheel(scroll_up),
            Message::Pan(offset) => {
                self.inner.set_pan(offset);
                return Effect::None;
            }
        }
        if before.factor() == self.inner.factor() {
            Effect::None
        } else {
            Effect::ZoomChanged
        }
    }

    /// Get the current zoom factor.
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.inner.factor().value()
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        self.inner.factor().as_percent()
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.inner.pan()
    }

    #[must_use]
    pub fn allows_pan(&self) -> bool {
        self.inner.factor().allows_pan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn zoom_in_increases_factor() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::ZoomIn), Effect::ZoomChanged);
        assert_abs_diff_eq!(state.factor(), 1.5);
    }

    #[test]
    fn three_zoom_ins_reach_3375() {
        let mut state = State::default();
        for _ in 0..3 {
            state.handle(Message::ZoomIn);
        }
        assert_abs_diff_eq!(state.factor(), 3.375, epsilon = F32_EPSILON);
    }

    #[test]
    fn zoom_in_at_max_reports_no_change() {
        let mut state = State::default();
        for _ in 0..20 {
            state.handle(Message::ZoomIn);
        }
        assert_abs_diff_eq!(state.factor(), 10.0);
        assert_eq!(state.handle(Message::ZoomIn), Effect::None);
        assert_abs_diff_eq!(state.factor(), 10.0);
    }

    #[test]
    fn wheel_down_zooms_out() {
        let mut state = State::default();
        state.handle(Message::Wheel { scroll_up: false });
        assert_abs_diff_eq!(state.factor(), 0.9, epsilon = 1e-6);
    }

    #[test]
    fn pan_requires_zoom() {
        let mut state = State::default();
        state.handle(Message::Pan(Vector::new(3.0, 4.0)));
        assert_eq!(state.pan(), Vector::ZERO);
        state.handle(Message::ZoomIn);
        state.handle(Message::Pan(Vector::new(3.0, 4.0)));
        assert_eq!(state.pan(), Vector::new(3.0, 4.0));
    }
}
