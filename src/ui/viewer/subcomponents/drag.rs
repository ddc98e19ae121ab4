// SPDX-License-Identifier: MPL-2.0
//! Drag/pan sub-component for mouse and single-finger touch.

use crate::ui::state::DragState;
use iced::{Point, Vector};

/// Drag sub-component state.
/// Encapsulates `DragState` and tracks the fingers currently on the stage.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying drag state.
    pub inner: DragState,
    fingers: Vec<u64>,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Mouse button pressed. `pannable` is false at zoom ≤ 1.
    Start {
        position: Point,
        offset: Vector,
        pannable: bool,
    },
    /// Pointer moved while a drag may be active.
    Move(Point),
    /// Button released or pointer left the stage.
    End,
    FingerDown {
        finger: u64,
        position: Point,
        offset: Vector,
        pannable: bool,
    },
    FingerMoved {
        finger: u64,
        position: Point,
    },
    FingerUp {
        finger: u64,
    },
}

/// Effects produced by drag operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// New pan offset to apply.
    Pan(Vector),
}

impl State {
    /// Handle a drag message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start {
                position,
                offset,
                pannable,
            } => {
                if pannable {
                    self.inner.start(position, offset);
                }
                Effect::None
            }
            Message::Move(position) => self.pan_to(position),
            Message::End => {
                self.inner.stop();
                Effect::None
            }
            Message::FingerDown {
                finger,
                position,
                offset,
                pannable,
            } => {
                if !self.fingers.contains(&finger) {
                    self.fingers.push(finger);
                }
                if self.fingers.len() == 1 && pannable {
                    self.inner.start(position, offset);
                } else {
                    // A second finger means a gesture we do not pan for.
                    self.inner.stop();
                }
                Effect::None
            }
            Message::FingerMoved { finger, position } => {
                if self.fingers.as_slice() == [finger] {
                    self.pan_to(position)
                } else {
                    Effect::None
                }
            }
            Message::FingerUp { finger } => {
                self.fingers.retain(|f| *f != finger);
                self.inner.stop();
                Effect::None
            }
        }
    }

    /// Forget any active drag and all tracked fingers.
    pub fn reset(&mut self) {
        self.inner.stop();
        self.fingers.clear();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    fn pan_to(&self, position: Point) -> Effect {
        match self.inner.offset_for(position) {
            Some(offset) => Effect::Pan(offset),
            None => Effect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(state: &mut State, x: f32, y: f32, pannable: bool) {
        state.handle(Message::Start {
            position: Point::new(x, y),
            offset: Vector::ZERO,
            pannable,
        });
    }

    #[test]
    fn mouse_drag_emits_pan() {
        let mut state = State::default();
        start(&mut state, 100.0, 100.0, true);
        assert_eq!(
            state.handle(Message::Move(Point::new(140.0, 130.0))),
            Effect::Pan(Vector::new(40.0, 30.0))
        );
    }

    #[test]
    fn unpannable_start_is_ignored() {
        let mut state = State::default();
        start(&mut state, 100.0, 100.0, false);
        assert!(!state.is_dragging());
        assert_eq!(
            state.handle(Message::Move(Point::new(140.0, 130.0))),
            Effect::None
        );
    }

    #[test]
    fn end_stops_panning() {
        let mut state = State::default();
        start(&mut state, 0.0, 0.0, true);
        state.handle(Message::End);
        assert_eq!(state.handle(Message::Move(Point::new(5.0, 5.0))), Effect::None);
    }

    #[test]
    fn single_finger_pans() {
        let mut state = State::default();
        state.handle(Message::FingerDown {
            finger: 7,
            position: Point::new(10.0, 10.0),
            offset: Vector::ZERO,
            pannable: true,
        });
        assert_eq!(
            state.handle(Message::FingerMoved {
                finger: 7,
                position: Point::new(15.0, 20.0),
            }),
            Effect::Pan(Vector::new(5.0, 10.0))
        );
        state.handle(Message::FingerUp { finger: 7 });
        assert!(!state.is_dragging());
    }

    #[test]
    fn second_finger_cancels_pan() {
        let mut state = State::default();
        for finger in [1, 2] {
            state.handle(Message::FingerDown {
                finger,
                position: Point::new(10.0, 10.0),
                offset: Vector::ZERO,
                pannable: true,
            });
        }
        assert!(!state.is_dragging());
        assert_eq!(
            state.handle(Message::FingerMoved {
                finger: 1,
                position: Point::new(50.0, 50.0),
            }),
            Effect::None
        );
    }
}
