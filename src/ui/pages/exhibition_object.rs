// SPDX-License-Identifier: MPL-2.0
//! Exhibition object: images, commentary, author and provenance.

use super::{breadcrumb, chip, field, heading, muted, not_found, page, title, Message, ViewContext, BOLD};
use crate::app::Screen;
use crate::catalog::ExhibitionObject;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::{self, pane};
use iced::{
    widget::{button, container, Column, Container, Row, Space, Text},
    Element, Length,
};

pub fn view<'a>(
    ctx: ViewContext<'a>,
    exhibition_slug: &str,
    object_slug: &str,
    viewer: Option<&'a viewer::State>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let exhibition = ctx.catalog.exhibition_by_slug(exhibition_slug);
    let object = ctx.catalog.exhibition_object_by_slug(object_slug);

    let (Some(exhibition), Some(object)) = (exhibition, object) else {
        return not_found(
            &ctx,
            "exhibition-object-not-found",
            i18n.tr("exhibition-back"),
            Screen::Exhibition(exhibition_slug.to_string()),
        );
    };

    let trail = breadcrumb(vec![
        (i18n.tr("nav-exhibitions"), Some(Screen::Exhibitions)),
        (
            exhibition.title.clone(),
            Some(Screen::Exhibition(exhibition.slug.clone())),
        ),
        (object.title.clone(), None),
    ]);

    let media: Element<'a, Message> = match viewer {
        Some(viewer) if !viewer.is_empty() => Column::new()
            .spacing(spacing::SM)
            .push(
                pane::view(
                    pane::ViewContext {
                        i18n,
                        media: ctx.media,
                        placeholder: ctx.placeholder,
                        height: Length::Fixed(sizing::INLINE_VIEWER_HEIGHT),
                    },
                    viewer,
                )
                .map(Message::Viewer),
            )
            .push(
                Row::new().push(Space::new().width(Length::Fill)).push(
                    button(Text::new(i18n.tr("source-open-fullscreen")))
                        .on_press(Message::ExpandViewer),
                ),
            )
            .into(),
        _ => Container::new(muted(i18n.tr("source-no-media")))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::THUMBNAIL * 2.0))
            .style(styles::container::panel)
            .into(),
    };

    let content = Column::new().push(trail).push(
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(media).width(Length::FillPortion(1)))
            .push(Container::new(details(&ctx, object)).width(Length::FillPortion(1))),
    );

    page(&ctx, content)
}

fn details<'a>(ctx: &ViewContext<'a>, object: &'a ExhibitionObject) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(chip(object.country.as_str()))
                .push(chip(object.object_type.as_str())),
        )
        .push(title(object.title.as_str()))
        .push(muted(object.date.as_str()));

    column = column
        .push(heading(i18n.tr("object-description")))
        .push(Text::new(object.description.as_str()).size(typography::BODY_LG));

    if !object.commentary.is_empty() {
        column = column
            .push(heading(i18n.tr("object-commentary")))
            .push(Text::new(object.commentary.as_str()).size(typography::BODY));
    }

    if !object.author.name.is_empty() {
        column = column.push(
            container(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(muted(i18n.tr("object-author")))
                    .push(Text::new(object.author.name.as_str()).font(BOLD))
                    .push(Text::new(object.author.bio.as_str()).size(typography::BODY_SM)),
            )
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::hero),
        );
    }

    if let Some(provenance) = field(i18n.tr("object-provenance"), &object.provenance) {
        column = column.push(provenance);
    }

    if !object.references.is_empty() {
        let references = object
            .references
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::XXS), |list, (index, reference)| {
                list.push(Text::new(format!("{}. {reference}", index + 1)).size(typography::BODY_SM))
            });
        column = column
            .push(heading(i18n.tr("object-references")))
            .push(references);
    }

    if !object.tags.is_empty() {
        column = column.push(heading(i18n.tr("object-tags"))).push(
            object
                .tags
                .iter()
                .fold(Row::new().spacing(spacing::XXS), |row, tag| {
                    row.push(chip(tag.as_str()))
                })
                .wrap(),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogItem, EmbeddedData};
    use crate::i18n::fluent::I18n;
    use crate::media::{placeholder, MediaCache};

    const EXHIBITION: &str = "soviet-central-asia-100-objects";

    fn render(exhibition: &str, object: &str) {
        let catalog = Catalog::load(EmbeddedData).expect("bundled catalog loads");
        let i18n = I18n::default();
        let media = MediaCache::default();
        let placeholder = placeholder();
        let viewer = catalog
            .exhibition_object_by_slug(object)
            .map(|o| viewer::State::inline(o.media_items()));
        let ctx = ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            media: &media,
            placeholder: &placeholder,
            scroll_locked: false,
        };
        let _element = view(ctx, exhibition, object, viewer.as_ref());
    }

    #[test]
    fn object_view_renders() {
        render(EXHIBITION, "gul-yaka");
    }

    #[test]
    fn missing_object_or_exhibition_renders_not_found() {
        render(EXHIBITION, "no-such-object");
        render("no-such-exhibition", "gul-yaka");
    }
}
