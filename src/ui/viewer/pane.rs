// SPDX-License-Identifier: MPL-2.0
//! Viewer pane: the stage with navigation arrows, the toolbar, the caption
//! and the thumbnail strip.

use crate::domain::media::MediaItem;
use crate::i18n::fluent::I18n;
use crate::media::{ImageData, MediaCache, MediaSlot, ModelData};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::{Message, State};
use crate::ui::viewer::controls;
use crate::ui::viewer::stage::ImageStage;
use crate::ui::viewer::subcomponents::model_stage::OrbitGizmo;
use crate::ui::widgets::model_shader::{ModelShader, StageSlot};
use iced::widget::{
    button, canvas::Canvas, container, image, scrollable, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub media: &'a MediaCache,
    pub placeholder: &'a ImageData,
    /// Stage height; `Fill` inside a modal, fixed when inline.
    pub height: Length,
}

/// What the stage can show for a still URL right now.
enum Still<'a> {
    Ready(&'a ImageData),
    Loading,
}

fn still<'a>(ctx: &ViewContext<'a>, url: Option<&str>) -> Still<'a> {
    let Some(url) = url else {
        return Still::Ready(ctx.placeholder);
    };
    match ctx.media.peek(url) {
        Some(MediaSlot::Ready(image)) => Still::Ready(image),
        Some(MediaSlot::Failed | MediaSlot::Model(_)) => Still::Ready(ctx.placeholder),
        None => Still::Loading,
    }
}

fn loaded_model<'a>(ctx: &ViewContext<'a>, item: &MediaItem) -> Option<&'a ModelData> {
    match ctx.media.peek(item.model_location()) {
        Some(MediaSlot::Model(model)) => Some(model),
        _ => None,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let Some(item) = state.current_item() else {
        return Space::new().into();
    };

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(stage(&ctx, state, item))
        .push(controls::view(controls::ViewContext { i18n: ctx.i18n }, state));

    if let Some(caption) = caption(item) {
        column = column.push(caption);
    }

    if state.len() > 1 {
        column = column.push(thumbnails(&ctx, state));
    }

    column.into()
}

fn stage<'a>(ctx: &ViewContext<'a>, state: &'a State, item: &'a MediaItem) -> Element<'a, Message> {
    let surface: Element<'a, Message> = if item.is_3d() {
        let mut layers = Stack::new();
        let model = loaded_model(ctx, item);
        match (model, item.poster.as_deref()) {
            (Some(model), _) => {
                let slot = if state.is_closable() {
                    StageSlot::Modal
                } else {
                    StageSlot::Inline
                };
                layers = layers.push(
                    ModelShader {
                        model: model.clone(),
                        camera: *state.camera(),
                        slot,
                    }
                    .view(),
                );
            }
            (None, Some(url)) => {
                if let Still::Ready(poster) = still(ctx, Some(url)) {
                    layers = layers.push(
                        image(poster.handle.clone())
                            .width(Length::Fill)
                            .height(Length::Fill)
                            .content_fit(ContentFit::Contain)
                            .opacity(opacity::OVERLAY_MEDIUM),
                    );
                }
            }
            (None, None) => {}
        }
        if model.is_none() && ctx.media.is_pending(item.model_location()) {
            layers = layers.push(
                Container::new(
                    Text::new(ctx.i18n.tr("viewer-loading"))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_200),
                )
                .padding(spacing::SM)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
            );
        }
        layers
            .push(
                Canvas::new(OrbitGizmo {
                    camera: *state.camera(),
                    model_drawn: model.is_some(),
                })
                .width(Length::Fill)
                .height(Length::Fill),
            )
            .push(
                Container::new(
                    container(Text::new(ctx.i18n.tr("viewer-model-badge")).size(typography::CAPTION))
                        .padding([spacing::XXS, spacing::XS])
                        .style(styles::container::badge(palette::PRIMARY_600)),
                )
                .padding(spacing::SM)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
            )
            .into()
    } else {
        match still(ctx, item.still_url()) {
            Still::Ready(image) => Canvas::new(ImageStage {
                image,
                zoom: state.zoom(),
                pan: state.pan(),
                dragging: state.is_dragging(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            Still::Loading => Container::new(Text::new(ctx.i18n.tr("viewer-loading")))
                .center(Length::Fill)
                .into(),
        }
    };

    let mut layers = Stack::new().push(surface);

    if state.has_previous() {
        layers = layers.push(arrow("◀", Message::Previous, Horizontal::Left));
    }
    if state.has_next() {
        layers = layers.push(arrow("▶", Message::Next, Horizontal::Right));
    }

    container(layers)
        .width(Length::Fill)
        .height(ctx.height)
        .clip(true)
        .style(styles::container::stage)
        .into()
}

fn arrow<'a>(glyph: &'a str, message: Message, side: Horizontal) -> Element<'a, Message> {
    let button = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .on_press(message)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ));

    Container::new(button)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn caption<'a>(item: &'a MediaItem) -> Option<Element<'a, Message>> {
    if item.caption.is_none() && item.credit.is_none() {
        return None;
    }
    let mut column = Column::new().spacing(spacing::XXS);
    if let Some(caption) = &item.caption {
        column = column.push(Text::new(caption.as_str()).size(typography::BODY));
    }
    if let Some(credit) = &item.credit {
        column = column.push(
            Text::new(credit.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }
    Some(column.into())
}

fn thumbnails<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let row = state
        .items()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, item)| {
            let content: Element<'a, Message> = match still(ctx, item.still_url()) {
                Still::Ready(thumb) if item.still_url().is_some() => {
                    image(thumb.handle.clone())
                        .width(Length::Fixed(sizing::THUMBNAIL))
                        .height(Length::Fixed(sizing::THUMBNAIL))
                        .content_fit(ContentFit::Cover)
                        .into()
                }
                _ => Container::new(
                    Text::new(if item.is_3d() { "3D" } else { "…" }).size(typography::BODY_SM),
                )
                .center(Length::Fixed(sizing::THUMBNAIL))
                .into(),
            };
            row.push(
                button(content)
                    .padding(spacing::XXS)
                    .on_press(Message::Select(index))
                    .style(styles::button::thumbnail(index == state.current_index())),
            )
        });

    scrollable(row)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        ))
        .width(Length::Fill)
        .into()
}
