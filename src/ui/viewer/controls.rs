// SPDX-License-Identifier: MPL-2.0
//! Viewer toolbar: position counter, zoom buttons or the 3D hint,
//! fullscreen toggle and close.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::{Message, State};
use iced::{
    alignment::Vertical,
    widget::{button, container, Row, Space, Text},
    Element, Length,
};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

fn tool_button<'a>(label: impl Into<String>, message: Option<Message>) -> Element<'a, Message> {
    let label: String = label.into();
    let button = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_STRONG,
        ));
    match message {
        Some(message) => button.on_press(message).into(),
        None => button.into(),
    }
}

/// Text of the "current / total" indicator, or `None` for a single item.
#[must_use]
pub fn counter_label(i18n: &I18n, state: &State) -> Option<String> {
    if state.len() <= 1 {
        return None;
    }
    let current = (state.current_index() + 1).to_string();
    let total = state.len().to_string();
    Some(i18n.tr_with_args(
        "viewer-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    if let Some(counter) = counter_label(i18n, state) {
        row = row.push(
            container(Text::new(counter).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(radius::SM)),
        );
    }

    row = row.push(Space::new().width(Length::Fill));

    if state.current_is_3d() {
        row = row.push(Text::new(i18n.tr("viewer-model-hint")).size(typography::BODY_SM));
    } else {
        let zoom_out = (state.zoom() > crate::domain::ui::newtypes::zoom_bounds::MIN)
            .then_some(Message::ZoomOut);
        let zoom_in = (state.zoom() < crate::domain::ui::newtypes::zoom_bounds::MAX)
            .then_some(Message::ZoomIn);
        row = row
            .push(tool_button(i18n.tr("viewer-zoom-out"), zoom_out))
            .push(
                container(Text::new(format!("{}%", state.zoom_percent())).size(typography::BODY_SM))
                    .center_x(Length::Fixed(56.0)),
            )
            .push(tool_button(i18n.tr("viewer-zoom-in"), zoom_in))
            .push(tool_button(
                i18n.tr("viewer-zoom-reset"),
                Some(Message::ResetZoom),
            ));
    }

    let fullscreen_label = if state.is_fullscreen() {
        i18n.tr("viewer-fullscreen-exit")
    } else {
        i18n.tr("viewer-fullscreen-enter")
    };
    row = row.push(tool_button(fullscreen_label, Some(Message::ToggleFullscreen)));

    if state.is_closable() {
        row = row.push(tool_button(i18n.tr("viewer-close"), Some(Message::Close)));
    }

    container(row)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::overlay::controls_container)
        .into()
}
