// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for a mounted viewer.

use crate::ui::viewer::component::Message;
use iced::keyboard::{key::Named, Key, Modifiers};

/// Maps a key press to a viewer message.
///
/// Presses with Ctrl, Alt or Logo held are left to the rest of the app.
#[must_use]
pub fn map_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        Key::Named(Named::Escape) => Some(Message::Escape),
        Key::Character("+" | "=") => Some(Message::ZoomIn),
        Key::Character("-") => Some(Message::ZoomOut),
        Key::Character("0") => Some(Message::ResetZoom),
        _ => None,
    }
}
