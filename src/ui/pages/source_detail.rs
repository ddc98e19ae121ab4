// SPDX-License-Identifier: MPL-2.0
//! Source detail screen: inline viewer, images/3D toggle, metadata and tags.

use super::{breadcrumb, chip, field, muted, not_found, page, title, Message, ViewContext, BOLD};
use crate::app::Screen;
use crate::catalog::{CatalogItem, Source};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::{self, pane};
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Element, Length,
};

pub fn view<'a>(
    ctx: ViewContext<'a>,
    slug: &str,
    viewer: Option<&'a viewer::State>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let Some(source) = ctx.catalog.source_by_slug(slug) else {
        return not_found(
            &ctx,
            "source-not-found",
            i18n.tr("source-back-to-explore"),
            Screen::Explore,
        );
    };

    let trail = breadcrumb(vec![
        (i18n.tr("nav-discover"), Some(Screen::Discover)),
        (source.paper.clone(), None),
        (source.unit.clone(), None),
        (source.title.clone(), None),
    ]);

    let media = match viewer {
        Some(viewer) if !viewer.is_empty() => media_column(&ctx, source, viewer),
        _ => Container::new(muted(i18n.tr("source-no-media")))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::THUMBNAIL * 2.0))
            .style(styles::container::panel)
            .into(),
    };

    let content = Column::new().push(trail).push(
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(media).width(Length::FillPortion(3)))
            .push(
                Container::new(details(&ctx, source)).width(Length::FillPortion(2)),
            ),
    );

    page(&ctx, content)
}

fn media_column<'a>(
    ctx: &ViewContext<'a>,
    source: &'a Source,
    viewer: &'a viewer::State,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let pane = pane::view(
        pane::ViewContext {
            i18n,
            media: ctx.media,
            placeholder: ctx.placeholder,
            height: Length::Fixed(sizing::INLINE_VIEWER_HEIGHT),
        },
        viewer,
    )
    .map(Message::Viewer);

    let mut actions = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    // The model is always the last media item.
    if source.has_3d() {
        let image_count = source.images.len();
        let on_model = viewer.current_is_3d();
        if image_count > 0 {
            actions = actions.push(
                button(Text::new(i18n.tr_with_args(
                    "source-tab-images",
                    &[("count", image_count.to_string().as_str())],
                )))
                .on_press(Message::Viewer(viewer::Message::Select(0)))
                .style(styles::button::chip(!on_model)),
            );
        }
        actions = actions.push(
            button(Text::new(i18n.tr("source-tab-model")))
                .on_press(Message::Viewer(viewer::Message::Select(viewer.len() - 1)))
                .style(styles::button::chip(on_model)),
        );
    }

    actions = actions
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("source-open-fullscreen")))
                .on_press(Message::ExpandViewer),
        );

    let hint_keys: &[&str] = if viewer.current_is_3d() {
        &["source-hint-rotate", "source-hint-model-zoom", "source-hint-fullscreen"]
    } else {
        &[
            "source-hint-zoom",
            "source-hint-pan",
            "source-hint-arrows",
            "source-hint-fullscreen",
        ]
    };
    let hints = hint_keys.iter().fold(
        Column::new().spacing(spacing::XXS).push(
            Text::new(i18n.tr(if viewer.current_is_3d() {
                "source-hints-model-title"
            } else {
                "source-hints-image-title"
            }))
            .font(BOLD)
            .size(typography::BODY_SM),
        ),
        |column, key| column.push(muted(format!("• {}", i18n.tr(key)))),
    );

    Column::new()
        .spacing(spacing::SM)
        .push(pane)
        .push(actions)
        .push(
            container(hints)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::panel),
        )
        .into()
}

fn details<'a>(ctx: &ViewContext<'a>, source: &'a Source) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut badges = Row::new()
        .spacing(spacing::XS)
        .push(chip(source.source_type.as_str()));
    if source.has_3d() {
        badges = badges.push(
            container(Text::new(i18n.tr("source-3d-available")).size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::badge(palette::PRIMARY_600)),
        );
    }

    let metadata = [
        field(i18n.tr("source-field-primary"), &source.primary_source),
        field(i18n.tr("source-field-paper"), &source.paper),
        field(i18n.tr("source-field-unit"), &source.unit),
        field(i18n.tr("source-field-date"), &source.date),
        source
            .medium
            .as_deref()
            .and_then(|v| field(i18n.tr("source-field-medium"), v)),
        source
            .dimensions
            .as_deref()
            .and_then(|v| field(i18n.tr("source-field-dimensions"), v)),
        source
            .accession_id
            .as_deref()
            .and_then(|v| field(i18n.tr("source-field-accession"), v)),
    ]
    .into_iter()
    .flatten()
    .fold(Column::new().spacing(spacing::SM), |column, item| column.push(item));

    let tags = source
        .tags
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, tag| {
            row.push(
                button(Text::new(tag.as_str()).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .on_press(Message::TagToggled(tag.clone()))
                    .style(styles::button::chip(false)),
            )
        })
        .wrap();

    Column::new()
        .spacing(spacing::MD)
        .push(title(source.title.as_str()))
        .push(badges)
        .push(Text::new(source.description.as_str()).size(typography::BODY_LG))
        .push(
            container(metadata)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::panel),
        )
        .push(tags)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, EmbeddedData};
    use crate::i18n::fluent::I18n;
    use crate::media::{placeholder, MediaCache};

    fn render(slug: &str, with_viewer: bool) {
        let catalog = Catalog::load(EmbeddedData).expect("bundled catalog loads");
        let i18n = I18n::default();
        let media = MediaCache::default();
        let placeholder = placeholder();
        let viewer = catalog
            .source_by_slug(slug)
            .map(|s| viewer::State::inline(s.media_items()));
        let ctx = ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            media: &media,
            placeholder: &placeholder,
            scroll_locked: true,
        };
        let _element = view(ctx, slug, viewer.as_ref().filter(|_| with_viewer));
    }

    #[test]
    fn source_view_renders() {
        render("flea", true);
    }

    #[test]
    fn source_with_model_renders() {
        render("camera-obscura", true);
    }

    #[test]
    fn missing_source_renders_not_found() {
        render("no-such-source", false);
    }
}
