// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The viewer is a plain state machine: [`State::handle`] takes a
//! [`Message`] and returns an [`Effect`] for the host. Widgets, the
//! keyboard subscription and the canvas stages only translate platform
//! events into messages.

use crate::domain::media::MediaItem;
use crate::ui::viewer::subcomponents::{drag, fullscreen, model_stage, navigation, zoom};
use iced::{Point, Vector};

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    Select(usize),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// One wheel notch over the stage.
    Wheel { scroll_up: bool },
    /// Left button pressed on the stage, in stage coordinates.
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    /// Pointer left the stage while dragging.
    PointerLeft,
    FingerPressed { finger: u64, position: Point },
    FingerMoved { finger: u64, position: Point },
    FingerLifted { finger: u64 },
    ToggleFullscreen,
    /// The host observed the window mode after a request or a resize.
    FullscreenChanged(bool),
    Escape,
    Close,
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The hosting modal should close.
    Close,
    /// Ask the platform to enter (`true`) or leave fullscreen.
    RequestFullscreen(bool),
    /// The active item changed; new media may need loading.
    IndexChanged(usize),
}

/// State of one viewer instance.
#[derive(Debug, Clone)]
pub struct State {
    items: Vec<MediaItem>,
    closable: bool,
    navigation: navigation::State,
    zoom: zoom::State,
    drag: drag::State,
    fullscreen: fullscreen::State,
    camera: model_stage::State,
}

impl State {
    /// Viewer embedded in a page. Escape never closes it.
    #[must_use]
    pub fn inline(items: Vec<MediaItem>) -> Self {
        Self::new(items, 0, false)
    }

    /// Viewer hosted in a modal, opened at `start` (clamped).
    #[must_use]
    pub fn modal(items: Vec<MediaItem>, start: usize) -> Self {
        Self::new(items, start, true)
    }

    fn new(items: Vec<MediaItem>, start: usize, closable: bool) -> Self {
        Self {
            navigation: navigation::State::new(items.len(), start),
            items,
            closable,
            zoom: zoom::State::default(),
            drag: drag::State::default(),
            fullscreen: fullscreen::State::default(),
            camera: model_stage::State::default(),
        }
    }

    /// Handle a viewer message.
    pub fn handle(&mut self, message: Message) -> Effect {
        if let Message::FullscreenChanged(is_fullscreen) = message {
            self.fullscreen
                .handle(fullscreen::Message::Observed(is_fullscreen));
            return Effect::None;
        }
        if self.items.is_empty() {
            return Effect::None;
        }

        match message {
            Message::Next => self.navigate(navigation::Message::Next),
            Message::Previous => self.navigate(navigation::Message::Previous),
            Message::Select(index) => self.navigate(navigation::Message::Select(index)),
            Message::ZoomIn => self.zoom_2d(zoom::Message::ZoomIn),
            Message::ZoomOut => self.zoom_2d(zoom::Message::ZoomOut),
            Message::ResetZoom => self.zoom_2d(zoom::Message::Reset),
            Message::Wheel { scroll_up } => {
                if self.current_is_3d() {
                    self.camera.handle(model_stage::Message::Wheel { scroll_up });
                } else {
                    self.zoom.handle(zoom::Message::Wheel { scroll_up });
                }
                Effect::None
            }
            Message::PointerPressed(position) => {
                if self.current_is_3d() {
                    self.camera.handle(model_stage::Message::Grab(position));
                } else {
                    self.drag.handle(drag::Message::Start {
                        position,
                        offset: self.zoom.pan(),
                        pannable: self.zoom.allows_pan(),
                    });
                }
                Effect::None
            }
            Message::PointerMoved(position) => {
                if self.current_is_3d() {
                    self.camera.handle(model_stage::Message::Drag(position));
                } else {
                    let effect = self.drag.handle(drag::Message::Move(position));
                    self.apply_drag(effect);
                }
                Effect::None
            }
            Message::PointerReleased | Message::PointerLeft => {
                self.camera.handle(model_stage::Message::Release);
                self.drag.handle(drag::Message::End);
                Effect::None
            }
            Message::FingerPressed { finger, position } => {
                if self.current_is_3d() {
                    self.camera.handle(model_stage::Message::Grab(position));
                } else {
                    self.drag.handle(drag::Message::FingerDown {
                        finger,
                        position,
                        offset: self.zoom.pan(),
                        pannable: self.zoom.allows_pan(),
                    });
                }
                Effect::None
            }
            Message::FingerMoved { finger, position } => {
                if self.current_is_3d() {
                    self.camera.handle(model_stage::Message::Drag(position));
                } else {
                    let effect = self.drag.handle(drag::Message::FingerMoved { finger, position });
                    self.apply_drag(effect);
                }
                Effect::None
            }
            Message::FingerLifted { finger } => {
                self.camera.handle(model_stage::Message::Release);
                self.drag.handle(drag::Message::FingerUp { finger });
                Effect::None
            }
            Message::ToggleFullscreen => {
                Self::fullscreen_effect(self.fullscreen.handle(fullscreen::Message::Toggle))
            }
            Message::Escape => {
                if self.fullscreen.is_fullscreen() {
                    Self::fullscreen_effect(self.fullscreen.handle(fullscreen::Message::Exit))
                } else {
                    self.close()
                }
            }
            Message::Close => self.close(),
            Message::FullscreenChanged(_) => Effect::None,
        }
    }

    fn navigate(&mut self, message: navigation::Message) -> Effect {
        match self.navigation.handle(message) {
            navigation::Effect::IndexChanged(index) => {
                self.zoom.handle(zoom::Message::Reset);
                self.drag.reset();
                self.camera.handle(model_stage::Message::Reset);
                tracing::debug!(index, total = self.items.len(), "viewer moved");
                Effect::IndexChanged(index)
            }
            navigation::Effect::None => Effect::None,
        }
    }

    fn zoom_2d(&mut self, message: zoom::Message) -> Effect {
        if !self.current_is_3d() {
            self.zoom.handle(message);
        }
        Effect::None
    }

    fn apply_drag(&mut self, effect: drag::Effect) {
        if let drag::Effect::Pan(offset) = effect {
            self.zoom.handle(zoom::Message::Pan(offset));
        }
    }

    fn fullscreen_effect(effect: fullscreen::Effect) -> Effect {
        match effect {
            fullscreen::Effect::Request(enter) => Effect::RequestFullscreen(enter),
            fullscreen::Effect::None => Effect::None,
        }
    }

    fn close(&mut self) -> Effect {
        if self.closable {
            self.drag.reset();
            Effect::Close
        } else {
            Effect::None
        }
    }

    // ---------------------------------------------------------------------
    // Read accessors for views and hosts
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.index()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.items.get(self.navigation.index())
    }

    #[must_use]
    pub fn current_is_3d(&self) -> bool {
        self.current_item().is_some_and(MediaItem::is_3d)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.navigation.has_next()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.navigation.has_previous()
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom.factor()
    }

    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        self.zoom.percent()
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.zoom.pan()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging() || self.camera.is_rotating()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn camera(&self) -> &model_stage::State {
        &self.camera
    }

    /// Model the stage needs, when the current item is 3D. Other models are
    /// only fetched once the viewer moves to them.
    #[must_use]
    pub fn wanted_model(&self) -> Option<&str> {
        self.current_item()
            .filter(|item| item.is_3d())
            .map(MediaItem::model_location)
    }

    /// Still images this viewer can show, current item first.
    #[must_use]
    pub fn wanted_media(&self) -> Vec<&str> {
        let current = self.current_item().and_then(MediaItem::still_url);
        current
            .into_iter()
            .chain(
                self.items
                    .iter()
                    .filter_map(MediaItem::still_url)
                    .filter(move |url| Some(*url) != current),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn images(count: usize) -> Vec<MediaItem> {
        (0..count)
            .map(|i| MediaItem::image(format!("images/{i}.png")))
            .collect()
    }

    fn zoomed_viewer() -> State {
        let mut viewer = State::inline(images(3));
        viewer.handle(Message::ZoomIn);
        viewer
    }

    #[test]
    fn index_change_resets_zoom_and_pan() {
        let mut viewer = zoomed_viewer();
        viewer.handle(Message::PointerPressed(Point::new(0.0, 0.0)));
        viewer.handle(Message::PointerMoved(Point::new(10.0, 10.0)));
        assert_eq!(viewer.handle(Message::Next), Effect::IndexChanged(1));
        assert_abs_diff_eq!(viewer.zoom(), 1.0);
        assert_eq!(viewer.pan(), Vector::ZERO);
        assert!(!viewer.is_dragging());
    }

    #[test]
    fn zoom_keys_do_nothing_on_models() {
        let mut viewer = State::inline(vec![MediaItem::model("m.glb")]);
        viewer.handle(Message::ZoomIn);
        assert_abs_diff_eq!(viewer.zoom(), 1.0);
    }

    #[test]
    fn wheel_on_model_moves_camera_not_zoom() {
        let mut viewer = State::inline(vec![MediaItem::model("m.glb")]);
        let before = viewer.camera().distance();
        viewer.handle(Message::Wheel { scroll_up: true });
        assert!(viewer.camera().distance() < before);
        assert_abs_diff_eq!(viewer.zoom(), 1.0);
    }

    #[test]
    fn pointer_leave_ends_drag() {
        let mut viewer = zoomed_viewer();
        viewer.handle(Message::PointerPressed(Point::new(5.0, 5.0)));
        assert!(viewer.is_dragging());
        viewer.handle(Message::PointerLeft);
        assert!(!viewer.is_dragging());
    }

    #[test]
    fn empty_viewer_ignores_input() {
        let mut viewer = State::modal(Vec::new(), 0);
        for message in [Message::Next, Message::ZoomIn, Message::Escape, Message::Close] {
            assert_eq!(viewer.handle(message), Effect::None);
        }
        assert!(viewer.current_item().is_none());
    }

    #[test]
    fn only_the_model_on_stage_is_wanted() {
        let items = vec![
            MediaItem::image("a.png"),
            MediaItem::model("scan.glb").with_poster(Some("scan.png".into())),
        ];
        let mut viewer = State::inline(items);
        assert_eq!(viewer.wanted_model(), None);
        viewer.handle(Message::Next);
        assert_eq!(viewer.wanted_model(), Some("scan.glb"));
        assert_eq!(viewer.wanted_media(), vec!["scan.png", "a.png"]);
    }

    #[test]
    fn wanted_media_lists_current_first() {
        let viewer = State::modal(images(3), 2);
        assert_eq!(
            viewer.wanted_media(),
            vec!["images/2.png", "images/0.png", "images/1.png"]
        );
    }
}
