// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always observed so the window id is known before the
//! first fullscreen request. Viewer shortcuts only exist while a viewer is
//! mounted (inline on a detail screen or in the modal); dropping the viewer
//! drops the subscription.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

/// Window lifecycle and the catalog reload shortcut (F5).
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::Opened { .. } | window::Event::Resized(_)) => {
            Some(Message::WindowChanged(window_id))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::F5),
            ..
        }) if status == event::Status::Ignored => Some(Message::ReloadCatalog),
        _ => None,
    })
}

/// Keyboard routing to the mounted viewer.
///
/// Key presses already captured by a focused widget (the search boxes) are
/// not forwarded.
pub fn create_viewer_subscription(viewer_mounted: bool) -> Subscription<Message> {
    if !viewer_mounted {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed { key, modifiers }),
        _ => None,
    })
}
