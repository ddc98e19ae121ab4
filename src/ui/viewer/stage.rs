// SPDX-License-Identifier: MPL-2.0
//! 2D image stage: draws the current image zoomed and panned, and adapts
//! raw mouse, wheel and touch events into viewer messages.

use crate::media::ImageData;
use crate::ui::viewer::component::Message;
use iced::widget::canvas::{self, Frame};
use iced::widget::Action;
use iced::{mouse, touch, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Canvas program for a still image.
#[derive(Debug, Clone)]
pub struct ImageStage<'a> {
    pub image: &'a ImageData,
    pub zoom: f32,
    pub pan: Vector,
    pub dragging: bool,
}

impl canvas::Program<Message> for ImageStage<'_> {
    type State = Fingers;

    fn update(
        &self,
        fingers: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        pointer_action(event, bounds, cursor, self.dragging, fingers)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let image_size = Size::new(self.image.width as f32, self.image.height as f32);
        let target = image_rect(image_size, bounds.size(), self.zoom, self.pan);
        frame.draw_image(target, canvas::Image::new(self.image.handle.clone()));
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if self.zoom > 1.0 && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Where the image lands inside a viewport: fitted (contain), scaled around
/// the viewport centre, then offset by the pan vector.
#[must_use]
pub fn image_rect(image: Size, viewport: Size, zoom: f32, pan: Vector) -> Rectangle {
    let fit = if image.width <= 0.0 || image.height <= 0.0 {
        0.0
    } else {
        (viewport.width / image.width).min(viewport.height / image.height)
    };
    let width = image.width * fit * zoom;
    let height = image.height * fit * zoom;
    Rectangle {
        x: (viewport.width - width) / 2.0 + pan.x,
        y: (viewport.height - height) / 2.0 + pan.y,
        width,
        height,
    }
}

/// Touch points that went down on a stage.
///
/// Fingers touching elsewhere are never captured, so they keep scrolling
/// the page around the viewer.
#[derive(Debug, Default)]
pub struct Fingers(Vec<u64>);

impl Fingers {
    fn press(&mut self, finger: u64) {
        if !self.tracks(finger) {
            self.0.push(finger);
        }
    }

    fn tracks(&self, finger: u64) -> bool {
        self.0.contains(&finger)
    }

    /// Stops tracking `finger`. Returns `false` if it was never tracked.
    fn release(&mut self, finger: u64) -> bool {
        let before = self.0.len();
        self.0.retain(|&tracked| tracked != finger);
        self.0.len() != before
    }
}

/// Translates a platform event over a stage into a viewer message.
///
/// Move, release and leave events are only reported while a drag is in
/// progress. Presses, wheel notches and new touches count only inside
/// `bounds`, and a touch is followed until it lifts.
pub(crate) fn pointer_action(
    event: &iced::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    dragging: bool,
    fingers: &mut Fingers,
) -> Option<Action<Message>> {
    let message = match event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Message::PointerPressed(cursor.position_in(bounds)?)
        }
        iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if dragging => {
            match cursor.position_in(bounds) {
                Some(position) => Message::PointerMoved(position),
                None => Message::PointerLeft,
            }
        }
        iced::Event::Mouse(mouse::Event::CursorLeft) if dragging => Message::PointerLeft,
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if dragging => {
            Message::PointerReleased
        }
        iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            cursor.position_in(bounds)?;
            let y = match delta {
                mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
            };
            if y == 0.0 {
                return None;
            }
            Message::Wheel { scroll_up: y > 0.0 }
        }
        iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
            if !bounds.contains(*position) {
                return None;
            }
            fingers.press(id.0);
            Message::FingerPressed {
                finger: id.0,
                position: relative(*position, bounds),
            }
        }
        iced::Event::Touch(touch::Event::FingerMoved { id, position }) if fingers.tracks(id.0) => {
            Message::FingerMoved {
                finger: id.0,
                position: relative(*position, bounds),
            }
        }
        iced::Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) if fingers.release(id.0) => Message::FingerLifted { finger: id.0 },
        _ => return None,
    };
    Some(Action::publish(message).and_capture())
}

fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn wide_image_fits_width_and_centers_vertically() {
        let rect = image_rect(
            Size::new(400.0, 200.0),
            Size::new(800.0, 800.0),
            1.0,
            Vector::ZERO,
        );
        assert_abs_diff_eq!(rect.width, 800.0);
        assert_abs_diff_eq!(rect.height, 400.0);
        assert_abs_diff_eq!(rect.y, 200.0);
    }

    #[test]
    fn zoom_scales_around_center() {
        let rect = image_rect(
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
            2.0,
            Vector::ZERO,
        );
        assert_abs_diff_eq!(rect.x, -50.0);
        assert_abs_diff_eq!(rect.width, 200.0);
    }

    #[test]
    fn pan_offsets_image() {
        let rect = image_rect(
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
            2.0,
            Vector::new(40.0, 30.0),
        );
        assert_abs_diff_eq!(rect.x, -10.0);
        assert_abs_diff_eq!(rect.y, -20.0);
    }

    fn touch(event: touch::Event) -> iced::Event {
        iced::Event::Touch(event)
    }

    fn act(event: touch::Event, fingers: &mut Fingers) -> bool {
        let bounds = Rectangle::new(Point::new(50.0, 50.0), Size::new(100.0, 100.0));
        pointer_action(&touch(event), bounds, mouse::Cursor::Unavailable, false, fingers).is_some()
    }

    #[test]
    fn touches_started_elsewhere_are_not_captured() {
        let mut fingers = Fingers::default();
        let finger = touch::Finger(3);
        let outside = Point::new(10.0, 10.0);

        assert!(!act(touch::Event::FingerPressed { id: finger, position: outside }, &mut fingers));
        assert!(!act(
            touch::Event::FingerMoved { id: finger, position: Point::new(80.0, 80.0) },
            &mut fingers
        ));
        assert!(!act(touch::Event::FingerLifted { id: finger, position: outside }, &mut fingers));
    }

    #[test]
    fn touch_on_the_stage_is_followed_until_lifted() {
        let mut fingers = Fingers::default();
        let finger = touch::Finger(9);
        let inside = Point::new(60.0, 70.0);
        let beyond = Point::new(400.0, 70.0);

        assert!(act(touch::Event::FingerPressed { id: finger, position: inside }, &mut fingers));
        assert!(act(touch::Event::FingerMoved { id: finger, position: beyond }, &mut fingers));
        assert!(act(touch::Event::FingerLost { id: finger, position: beyond }, &mut fingers));
        assert!(!act(touch::Event::FingerMoved { id: finger, position: inside }, &mut fingers));
    }

    #[test]
    fn degenerate_image_collapses() {
        let rect = image_rect(Size::ZERO, Size::new(10.0, 10.0), 1.0, Vector::ZERO);
        assert_abs_diff_eq!(rect.width, 0.0);
    }
}
