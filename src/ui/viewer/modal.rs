// SPDX-License-Identifier: MPL-2.0
//! Full-window viewer shown over the current page.
//!
//! A modal owns a [`ScrollLock`] for as long as it exists, so background
//! pages stay still underneath it and scroll again as soon as it is dropped.

use crate::domain::media::MediaItem;
use crate::ui::design_tokens::spacing;
use crate::ui::scroll_lock::{ScrollGate, ScrollLock};
use crate::ui::styles;
use crate::ui::viewer::component::{self, Message};
use crate::ui::viewer::pane;
use iced::widget::{container, opaque};
use iced::{Element, Length};

#[derive(Debug)]
pub struct Modal {
    pub viewer: component::State,
    _scroll: ScrollLock,
}

impl Modal {
    /// Opens a closable viewer at `start` and suspends background scrolling.
    #[must_use]
    pub fn open(items: Vec<MediaItem>, start: usize, gate: &ScrollGate) -> Self {
        tracing::debug!(items = items.len(), start, "opening viewer modal");
        Self {
            viewer: component::State::modal(items, start),
            _scroll: gate.lock(),
        }
    }
}

pub fn view<'a>(ctx: pane::ViewContext<'a>, modal: &'a Modal) -> Element<'a, Message> {
    let ctx = pane::ViewContext {
        height: Length::Fill,
        ..ctx
    };
    opaque(
        container(pane::view(ctx, &modal.viewer))
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_holds_scroll_lock_until_dropped() {
        let gate = ScrollGate::new();
        let modal = Modal::open(vec![MediaItem::image("a.png")], 0, &gate);
        assert!(gate.is_locked());
        drop(modal);
        assert!(!gate.is_locked());
    }

    #[test]
    fn modal_viewer_is_closable() {
        let gate = ScrollGate::new();
        let mut modal = Modal::open(vec![MediaItem::image("a.png")], 0, &gate);
        assert_eq!(
            modal.viewer.handle(component::Message::Escape),
            component::Effect::Close
        );
    }
}
