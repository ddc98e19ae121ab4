// SPDX-License-Identifier: MPL-2.0
//! Orbit camera for 3D items.
//!
//! 3D items bypass the 2D zoom/pan stage entirely: dragging rotates the
//! camera around the model and the wheel moves it closer or further away.
//! The GPU stage renders the model through [`State::view_projection`]. An
//! orientation gizmo drawn on a canvas above it takes the pointer input and
//! stands in for the model (over its poster) until the model has loaded.

use crate::domain::ui::newtypes::camera_bounds;
use crate::domain::ui::CameraDistance;
use crate::ui::viewer::component;
use crate::ui::viewer::stage;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Radians of rotation per pixel of pointer travel.
const ROTATE_SPEED: f32 = 0.01;
/// Camera distance multiplier per wheel notch towards the model.
const WHEEL_CLOSER: f32 = 0.9;
/// Camera distance multiplier per wheel notch away from the model.
const WHEEL_FURTHER: f32 = 1.1;
/// Initial elevation so the top face of the gizmo is visible.
const DEFAULT_PITCH: f32 = 0.35;
const DEFAULT_YAW: f32 = 0.6;
/// Focal length as a multiple of the shorter viewport side.
const FOCAL_SCALE: f32 = 1.2;
/// Clip distances of the GPU stage.
const NEAR: f32 = 0.05;
const FAR: f32 = 100.0;
/// Side of the gizmo inset once the model is drawn.
const INSET: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Grab {
    pointer: Point,
    yaw: f32,
    pitch: f32,
}

/// Orbit camera state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    yaw: f32,
    pitch: f32,
    distance: CameraDistance,
    grab: Option<Grab>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: CameraDistance::default(),
            grab: None,
        }
    }
}

/// Messages for the orbit camera.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Grab(Point),
    Drag(Point),
    Release,
    Wheel { scroll_up: bool },
    Reset,
}

/// Effects produced by camera changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    CameraMoved,
}

impl State {
    /// Handle a camera message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Grab(pointer) => {
                self.grab = Some(Grab {
                    pointer,
                    yaw: self.yaw,
                    pitch: self.pitch,
                });
                Effect::None
            }
            Message::Drag(pointer) => {
                let Some(grab) = self.grab else {
                    return Effect::None;
                };
                let delta = pointer - grab.pointer;
                self.yaw = (grab.yaw + delta.x * ROTATE_SPEED).rem_euclid(TAU);
                self.pitch = (grab.pitch + delta.y * ROTATE_SPEED)
                    .clamp(-camera_bounds::MAX_PITCH, camera_bounds::MAX_PITCH);
                Effect::CameraMoved
            }
            Message::Release => {
                self.grab = None;
                Effect::None
            }
            Message::Wheel { scroll_up } => {
                let factor = if scroll_up { WHEEL_CLOSER } else { WHEEL_FURTHER };
                let distance = self.distance.scaled(factor);
                if distance == self.distance {
                    return Effect::None;
                }
                self.distance = distance;
                Effect::CameraMoved
            }
            Message::Reset => {
                *self = Self::default();
                Effect::CameraMoved
            }
        }
    }

    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance.value()
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.grab.is_some()
    }

    /// Projects a model-space point onto a viewport of the given size.
    ///
    /// Returns `None` for points behind the camera.
    #[must_use]
    pub fn project(&self, point: [f32; 3], viewport: iced::Size) -> Option<Point> {
        let [x, y, z] = point;
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        // Yaw around the vertical axis, then pitch around the horizontal one.
        let x1 = x * cos_yaw + z * sin_yaw;
        let z1 = -x * sin_yaw + z * cos_yaw;
        let y2 = y * cos_pitch - z1 * sin_pitch;
        let z2 = y * sin_pitch + z1 * cos_pitch;

        let depth = z2 + self.distance.value();
        if depth <= f32::EPSILON {
            return None;
        }
        let focal = focal_length(viewport);
        Some(Point::new(
            viewport.width / 2.0 + x1 * focal / depth,
            viewport.height / 2.0 - y2 * focal / depth,
        ))
    }

    /// Column-major clip-space transform for a viewport of the given size.
    ///
    /// A model-space point lands on the same pixel as [`State::project`]
    /// puts it, with depth mapped to `0..=1` between the clip planes.
    #[must_use]
    pub fn view_projection(&self, viewport: iced::Size) -> [[f32; 4]; 4] {
        let [right, up, forward] = self.basis();
        let focal = focal_length(viewport);
        let scale_x = if viewport.width > 0.0 {
            2.0 * focal / viewport.width
        } else {
            0.0
        };
        let scale_y = if viewport.height > 0.0 {
            2.0 * focal / viewport.height
        } else {
            0.0
        };
        let distance = self.distance.value();
        let depth_scale = FAR / (FAR - NEAR);
        let depth_offset = -FAR * NEAR / (FAR - NEAR);

        let rows = [
            [right[0] * scale_x, right[1] * scale_x, right[2] * scale_x, 0.0],
            [up[0] * scale_y, up[1] * scale_y, up[2] * scale_y, 0.0],
            [
                forward[0] * depth_scale,
                forward[1] * depth_scale,
                forward[2] * depth_scale,
                distance * depth_scale + depth_offset,
            ],
            [forward[0], forward[1], forward[2], distance],
        ];
        std::array::from_fn(|col| std::array::from_fn(|row| rows[row][col]))
    }

    /// Model-space direction of a light above and behind the camera.
    #[must_use]
    pub fn headlight(&self) -> [f32; 3] {
        let [_, up, forward] = self.basis();
        let light: [f32; 3] = std::array::from_fn(|i| 0.5 * up[i] - forward[i]);
        let length = light.iter().map(|c| c * c).sum::<f32>().sqrt();
        light.map(|c| c / length)
    }

    /// Camera right, up and forward axes in model space.
    fn basis(&self) -> [[f32; 3]; 3] {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        [
            [cos_yaw, 0.0, sin_yaw],
            [sin_yaw * sin_pitch, cos_pitch, -cos_yaw * sin_pitch],
            [-sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch],
        ]
    }
}

fn focal_length(viewport: iced::Size) -> f32 {
    viewport.width.min(viewport.height) * FOCAL_SCALE
}

const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

const AXES: [([f32; 3], Color); 3] = [
    ([0.9, 0.0, 0.0], Color::from_rgb(0.86, 0.30, 0.26)),
    ([0.0, 0.9, 0.0], Color::from_rgb(0.36, 0.70, 0.38)),
    ([0.0, 0.0, 0.9], Color::from_rgb(0.32, 0.52, 0.88)),
];

/// Canvas program drawing the orientation gizmo and turning pointer
/// input into viewer messages.
///
/// Without a model the gizmo fills the stage as a wireframe cube. Once the
/// model is drawn underneath, only its axes remain, in a corner inset.
#[derive(Debug, Clone, Copy)]
pub struct OrbitGizmo {
    pub camera: State,
    pub model_drawn: bool,
}

impl OrbitGizmo {
    /// Area the gizmo is drawn into, relative to the stage.
    fn area(&self, stage: iced::Size) -> Rectangle {
        if self.model_drawn {
            let side = INSET.min(stage.width).min(stage.height);
            Rectangle::new(
                Point::new(0.0, stage.height - side),
                iced::Size::new(side, side),
            )
        } else {
            Rectangle::with_size(stage)
        }
    }
}

impl canvas::Program<component::Message> for OrbitGizmo {
    type State = stage::Fingers;

    fn update(
        &self,
        fingers: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<component::Message>> {
        stage::pointer_action(event, bounds, cursor, self.camera.is_rotating(), fingers)
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
        let area = self.area(bounds.size());
        let project = |p: [f32; 3]| {
            self.camera
                .project(p, area.size())
                .map(|point| Point::new(point.x + area.x, point.y + area.y))
        };

        let origin = project([0.0, 0.0, 0.0]);
        for (axis, color) in AXES {
            if let (Some(from), Some(to)) = (origin, project(axis)) {
                frame.stroke(
                    &Path::line(from, to),
                    Stroke::default().with_width(2.0).with_color(color),
                );
            }
        }

        if !self.model_drawn {
            let edge_color = Color {
                a: 0.85,
                ..Color::WHITE
            };
            for (a, b) in CUBE_EDGES {
                if let (Some(from), Some(to)) =
                    (project(CUBE_VERTICES[a]), project(CUBE_VERTICES[b]))
                {
                    frame.stroke(
                        &Path::line(from, to),
                        Stroke::default().with_width(1.5).with_color(edge_color),
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.camera.is_rotating() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::Size;

    #[test]
    fn drag_without_grab_is_ignored() {
        let mut camera = State::default();
        assert_eq!(camera.handle(Message::Drag(Point::new(50.0, 0.0))), Effect::None);
        assert_eq!(camera, State::default());
    }

    #[test]
    fn horizontal_drag_rotates_yaw() {
        let mut camera = State::default();
        camera.handle(Message::Grab(Point::new(0.0, 0.0)));
        camera.handle(Message::Drag(Point::new(100.0, 0.0)));
        assert_abs_diff_eq!(camera.yaw(), DEFAULT_YAW + 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(camera.pitch(), DEFAULT_PITCH);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = State::default();
        camera.handle(Message::Grab(Point::new(0.0, 0.0)));
        camera.handle(Message::Drag(Point::new(0.0, 10_000.0)));
        assert_abs_diff_eq!(camera.pitch(), camera_bounds::MAX_PITCH);
    }

    #[test]
    fn wheel_up_moves_closer() {
        let mut camera = State::default();
        assert_eq!(
            camera.handle(Message::Wheel { scroll_up: true }),
            Effect::CameraMoved
        );
        assert!(camera.distance() < camera_bounds::DEFAULT_DISTANCE);
    }

    #[test]
    fn wheel_stops_at_bounds() {
        let mut camera = State::default();
        for _ in 0..100 {
            camera.handle(Message::Wheel { scroll_up: false });
        }
        assert_abs_diff_eq!(camera.distance(), camera_bounds::MAX_DISTANCE);
        assert_eq!(
            camera.handle(Message::Wheel { scroll_up: false }),
            Effect::None
        );
    }

    #[test]
    fn reset_restores_default_camera() {
        let mut camera = State::default();
        camera.handle(Message::Grab(Point::ORIGIN));
        camera.handle(Message::Drag(Point::new(30.0, 30.0)));
        camera.handle(Message::Reset);
        assert_eq!(camera, State::default());
    }

    fn clip_to_screen(m: &[[f32; 4]; 4], p: [f32; 3], viewport: Size) -> (Point, f32) {
        let clip: [f32; 4] =
            std::array::from_fn(|row| m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row]);
        let (x, y, z) = (clip[0] / clip[3], clip[1] / clip[3], clip[2] / clip[3]);
        (
            Point::new(
                (x + 1.0) * viewport.width / 2.0,
                (1.0 - y) * viewport.height / 2.0,
            ),
            z,
        )
    }

    #[test]
    fn gpu_transform_matches_gizmo_projection() {
        let mut camera = State::default();
        camera.handle(Message::Grab(Point::ORIGIN));
        camera.handle(Message::Drag(Point::new(-80.0, 45.0)));
        camera.handle(Message::Wheel { scroll_up: true });

        let viewport = Size::new(640.0, 360.0);
        let m = camera.view_projection(viewport);
        for p in [[0.5, 0.5, 0.5], [-0.5, 0.2, 0.4], [0.0, -0.5, -0.5]] {
            let expected = camera.project(p, viewport).expect("in front of the camera");
            let (actual, depth) = clip_to_screen(&m, p, viewport);
            assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-2);
            assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-2);
            assert!((0.0..=1.0).contains(&depth));
        }
    }

    #[test]
    fn nearer_points_get_smaller_depth() {
        let camera = State::default();
        let viewport = Size::new(300.0, 300.0);
        let m = camera.view_projection(viewport);
        let [_, _, forward] = camera.basis();
        let near = forward.map(|c| -0.5 * c);
        let far = forward.map(|c| 0.5 * c);
        assert!(clip_to_screen(&m, near, viewport).1 < clip_to_screen(&m, far, viewport).1);
    }

    #[test]
    fn headlight_faces_the_camera() {
        let camera = State::default();
        let [_, _, forward] = camera.basis();
        let light = camera.headlight();
        let towards_camera: f32 = (0..3).map(|i| -forward[i] * light[i]).sum();
        assert!(towards_camera > 0.5);
        assert_abs_diff_eq!(
            light.iter().map(|c| c * c).sum::<f32>(),
            1.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn gizmo_shrinks_to_inset_over_a_model() {
        let stage = Size::new(400.0, 300.0);
        let full = OrbitGizmo {
            camera: State::default(),
            model_drawn: false,
        };
        assert_eq!(full.area(stage), Rectangle::with_size(stage));

        let inset = OrbitGizmo {
            model_drawn: true,
            ..full
        }
        .area(stage);
        assert_abs_diff_eq!(inset.width, INSET);
        assert_abs_diff_eq!(inset.y + inset.height, stage.height);
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let camera = State::default();
        let center = camera
            .project([0.0, 0.0, 0.0], Size::new(400.0, 300.0))
            .expect("origin is in front of the camera");
        assert_abs_diff_eq!(center.x, 200.0, epsilon = 1e-3);
        assert_abs_diff_eq!(center.y, 150.0, epsilon = 1e-3);
    }
}
