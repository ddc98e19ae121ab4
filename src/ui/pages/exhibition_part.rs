// SPDX-License-Identifier: MPL-2.0
//! One part of an exhibition: its objects as a card grid.

use super::{back_link, card_grid, muted, not_found, object_card, page, title, Message, ViewContext};
use crate::app::Screen;
use crate::catalog::{Catalog, ExhibitionObject};
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    Element, Length,
};

/// Objects shown for a part.
///
/// A part whose ids resolve to nothing (not yet curated) shows every object
/// of its exhibition instead. Unknown exhibition or part gives an empty list.
pub fn objects<'c>(
    catalog: &'c Catalog,
    exhibition_slug: &str,
    part_id: &str,
) -> Vec<&'c ExhibitionObject> {
    let Some(exhibition) = catalog.exhibition_by_slug(exhibition_slug) else {
        return Vec::new();
    };
    if exhibition.part(part_id).is_none() {
        return Vec::new();
    }
    let objects = catalog.exhibition_objects_by_part(&exhibition.id, part_id);
    if objects.is_empty() {
        catalog.exhibition_objects(&exhibition.id)
    } else {
        objects
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, exhibition_slug: &'a str, part_id: &str) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let back_to_exhibition = Screen::Exhibition(exhibition_slug.to_string());

    let Some((exhibition, part)) = ctx
        .catalog
        .exhibition_by_slug(exhibition_slug)
        .and_then(|e| e.part(part_id).map(|p| (e, p)))
    else {
        return not_found(
            &ctx,
            "exhibition-part-not-found",
            i18n.tr("exhibition-back"),
            back_to_exhibition,
        );
    };

    let objects = objects(ctx.catalog, exhibition_slug, part_id);
    let count = objects.len().to_string();

    let mut content = Column::new()
        .push(back_link(exhibition.title.as_str(), back_to_exhibition.clone()))
        .push(title(part.title.as_str()))
        .push(muted(
            i18n.tr_with_args("exhibition-part-section-count", &[("count", count.as_str())]),
        ));

    if objects.is_empty() {
        content = content.push(
            Container::new(
                Column::new()
                    .spacing(spacing::MD)
                    .align_x(Horizontal::Center)
                    .push(Text::new(i18n.tr("exhibition-part-empty")).size(typography::BODY_LG))
                    .push(back_link(i18n.tr("exhibition-back"), back_to_exhibition)),
            )
            .padding(spacing::XXL)
            .center_x(Length::Fill),
        );
    } else {
        let cards = objects
            .into_iter()
            .map(|object| object_card(&ctx, exhibition_slug, object, 2))
            .collect();
        content = content.push(card_grid(cards));
    }

    page(&ctx, content)
}
