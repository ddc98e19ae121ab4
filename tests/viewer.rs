// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use cabinet::domain::media::MediaItem;
use cabinet::ui::scroll_lock::ScrollGate;
use cabinet::ui::viewer::{keyboard, Effect, Message, Modal, State};
use iced::keyboard::{key::Named, Key, Modifiers};
use iced::Point;

fn images(count: usize) -> Vec<MediaItem> {
    (0..count)
        .map(|i| MediaItem::image(format!("images/page-{i}.png")))
        .collect()
}

fn press(viewer: &mut State, key: Key) -> Effect {
    match keyboard::map_key(&key, Modifiers::empty()) {
        Some(message) => viewer.handle(message),
        None => Effect::None,
    }
}

#[test]
fn three_zoom_steps_multiply() {
    let mut viewer = State::inline(images(2));
    for _ in 0..3 {
        viewer.handle(Message::ZoomIn);
    }
    assert_abs_diff_eq!(viewer.zoom(), 3.375, epsilon = 1e-5);
    assert_eq!(viewer.zoom_percent(), 338);
}

#[test]
fn zoom_is_clamped_at_both_ends() {
    let mut viewer = State::inline(images(1));
    for _ in 0..20 {
        viewer.handle(Message::ZoomIn);
    }
    assert_abs_diff_eq!(viewer.zoom(), 10.0);
    for _ in 0..40 {
        viewer.handle(Message::ZoomOut);
    }
    assert_abs_diff_eq!(viewer.zoom(), 0.5);
}

#[test]
fn drag_pans_by_pointer_delta() {
    let mut viewer = State::inline(images(1));
    viewer.handle(Message::ZoomIn);
    viewer.handle(Message::PointerPressed(Point::new(100.0, 100.0)));
    assert!(viewer.is_dragging());
    viewer.handle(Message::PointerMoved(Point::new(140.0, 130.0)));
    viewer.handle(Message::PointerReleased);

    assert!(!viewer.is_dragging());
    assert_abs_diff_eq!(viewer.pan().x, 40.0);
    assert_abs_diff_eq!(viewer.pan().y, 30.0);
}

#[test]
fn drag_at_base_zoom_does_not_pan() {
    let mut viewer = State::inline(images(1));
    viewer.handle(Message::PointerPressed(Point::new(10.0, 10.0)));
    viewer.handle(Message::PointerMoved(Point::new(60.0, 60.0)));
    assert_abs_diff_eq!(viewer.pan().x, 0.0);
    assert_abs_diff_eq!(viewer.pan().y, 0.0);
}

#[test]
fn moving_to_another_item_resets_zoom_and_pan() {
    let mut viewer = State::inline(images(3));
    viewer.handle(Message::ZoomIn);
    viewer.handle(Message::PointerPressed(Point::ORIGIN));
    viewer.handle(Message::PointerMoved(Point::new(25.0, 0.0)));
    viewer.handle(Message::PointerReleased);

    assert_eq!(viewer.handle(Message::Next), Effect::IndexChanged(1));
    assert_abs_diff_eq!(viewer.zoom(), 1.0);
    assert_abs_diff_eq!(viewer.pan().x, 0.0);
}

#[test]
fn arrows_stop_at_the_ends() {
    let mut viewer = State::inline(images(2));
    assert_eq!(press(&mut viewer, Key::Named(Named::ArrowLeft)), Effect::None);
    assert_eq!(
        press(&mut viewer, Key::Named(Named::ArrowRight)),
        Effect::IndexChanged(1)
    );
    assert_eq!(press(&mut viewer, Key::Named(Named::ArrowRight)), Effect::None);
    assert_eq!(viewer.current_index(), 1);
}

#[test]
fn escape_leaves_fullscreen_before_closing() {
    let mut viewer = State::modal(images(2), 0);
    assert_eq!(viewer.handle(Message::ToggleFullscreen), Effect::RequestFullscreen(true));
    viewer.handle(Message::FullscreenChanged(true));
    assert!(viewer.is_fullscreen());

    let escape = || Key::Named(Named::Escape);
    assert_eq!(press(&mut viewer, escape()), Effect::RequestFullscreen(false));
    viewer.handle(Message::FullscreenChanged(false));
    assert_eq!(press(&mut viewer, escape()), Effect::Close);
}

#[test]
fn escape_never_closes_an_inline_viewer() {
    let mut viewer = State::inline(images(2));
    assert_eq!(press(&mut viewer, Key::Named(Named::Escape)), Effect::None);
    assert_eq!(viewer.handle(Message::Close), Effect::None);
}

#[test]
fn refused_fullscreen_request_stays_windowed() {
    let mut viewer = State::inline(images(1));
    viewer.handle(Message::ToggleFullscreen);
    viewer.handle(Message::FullscreenChanged(false));
    assert!(!viewer.is_fullscreen());
}

#[test]
fn modal_opens_at_clamped_index() {
    let gate = ScrollGate::new();
    let modal = Modal::open(images(3), 7, &gate);
    assert_eq!(modal.viewer.current_index(), 2);
    assert!(modal.viewer.is_closable());
}

#[test]
fn dropping_the_modal_restores_scrolling() {
    let gate = ScrollGate::new();
    let modal = Modal::open(images(2), 0, &gate);
    assert!(gate.is_locked());

    drop(modal);
    assert!(!gate.is_locked());
}

#[test]
fn dropping_a_busy_modal_restores_scrolling() {
    let gate = ScrollGate::new();
    let mut modal = Modal::open(images(3), 1, &gate);
    modal.viewer.handle(Message::ZoomIn);
    modal.viewer.handle(Message::PointerPressed(Point::new(20.0, 20.0)));
    modal.viewer.handle(Message::PointerMoved(Point::new(60.0, 45.0)));
    modal.viewer.handle(Message::FullscreenChanged(true));
    assert!(modal.viewer.is_dragging());
    assert!(modal.viewer.is_fullscreen());
    assert!(gate.is_locked());

    drop(modal);
    assert!(!gate.is_locked());
}

#[test]
fn model_items_ignore_zoom_keys() {
    let items = vec![MediaItem::image("a.png"), MediaItem::model("scan.glb")];
    let mut viewer = State::inline(items);
    viewer.handle(Message::Next);
    assert!(viewer.current_is_3d());

    press(&mut viewer, Key::Character("+".into()));
    assert_abs_diff_eq!(viewer.zoom(), 1.0);
}
