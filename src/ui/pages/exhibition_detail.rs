// SPDX-License-Identifier: MPL-2.0
//! Exhibition overview: description, progress, parts, featured objects and
//! credits.

use super::{
    back_link, card_grid, chip, heading, muted, not_found, object_card, page, title, Message,
    ViewContext, BOLD,
};
use crate::app::Screen;
use crate::catalog::{Exhibition, ExhibitionPart};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    font::Style,
    widget::{button, container, Column, Container, Row, Text},
    Element, Font, Length,
};

pub fn view<'a>(ctx: ViewContext<'a>, slug: &str) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let Some(exhibition) = ctx.catalog.exhibition_by_slug(slug) else {
        return not_found(
            &ctx,
            "exhibition-not-found",
            i18n.tr("exhibition-back-to-list"),
            Screen::Exhibitions,
        );
    };
    let objects = ctx.catalog.exhibition_objects(&exhibition.id);

    let shown = objects.len().to_string();
    let target = exhibition.target_count.to_string();

    let mut header = Column::new()
        .spacing(spacing::SM)
        .push(back_link(i18n.tr("exhibition-all"), Screen::Exhibitions))
        .push(title(exhibition.title.as_str()))
        .push(Text::new(exhibition.description.as_str()).size(typography::BODY_LG));

    if let Some(russian) = exhibition.description_russian.as_deref() {
        header = header.push(
            Text::new(russian)
                .size(typography::BODY)
                .font(Font {
                    style: Style::Italic,
                    ..Font::DEFAULT
                }),
        );
    }

    header = header.push(
        Row::new()
            .spacing(spacing::XS)
            .push(chip(i18n.tr_with_args(
                "exhibition-progress",
                &[("current", shown.as_str()), ("target", target.as_str())],
            )))
            .push(chip(exhibition.languages.join(", "))),
    );

    let parts = exhibition
        .parts
        .iter()
        .map(|part| part_card(i18n, &exhibition.slug, part))
        .collect();

    let mut content = Column::new()
        .push(
            Container::new(header)
                .padding(spacing::XL)
                .width(Length::Fill)
                .style(styles::container::hero),
        )
        .push(heading(i18n.tr("exhibition-enter")))
        .push(card_grid(parts));

    if !objects.is_empty() {
        let cards = objects
            .iter()
            .map(|&object| object_card(&ctx, &exhibition.slug, object, 0))
            .collect();
        content = content
            .push(heading(i18n.tr("exhibition-featured")))
            .push(card_grid(cards));
    }

    page(&ctx, content.push(credits(i18n, exhibition)))
}

fn part_card<'a>(i18n: &I18n, exhibition_slug: &str, part: &'a ExhibitionPart) -> Element<'a, Message> {
    let count = if part.object_ids.is_empty() {
        i18n.tr("exhibition-part-coming-soon")
    } else {
        i18n.tr_with_args(
            "exhibition-part-count",
            &[("count", part.object_ids.len().to_string().as_str())],
        )
    };

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .push(muted(part.language.to_uppercase()))
        .push(Text::new(part.title.as_str()).size(typography::BODY_LG).font(BOLD))
        .push(muted(count));

    button(body)
        .padding(0)
        .on_press(Message::Open(Screen::ExhibitionPart {
            exhibition: exhibition_slug.to_string(),
            part: part.id.clone(),
        }))
        .style(styles::button::card)
        .into()
}

fn credits<'a>(i18n: &I18n, exhibition: &'a Exhibition) -> Element<'a, Message> {
    let people = |entries: Vec<(&'a str, &'a str)>| {
        entries.into_iter().fold(
            Column::new().spacing(spacing::XS),
            |column, (name, detail)| {
                let mut entry = Column::new()
                    .push(Text::new(name).size(typography::BODY).font(BOLD));
                if !detail.is_empty() {
                    entry = entry.push(muted(detail));
                }
                column.push(entry)
            },
        )
    };

    let organizers = people(
        exhibition
            .organizers
            .iter()
            .map(|o| (o.name.as_str(), o.affiliation.as_str()))
            .collect(),
    );
    let board = people(
        exhibition
            .editorial_board
            .iter()
            .map(|m| (m.name.as_str(), m.affiliation.as_str()))
            .collect(),
    );
    let translators = people(
        exhibition
            .support
            .translators
            .iter()
            .map(|t| (t.name.as_str(), t.role.as_str()))
            .collect(),
    );
    let data_input = people(
        exhibition
            .support
            .data_input
            .iter()
            .map(|name| (name.as_str(), ""))
            .collect(),
    );
    let sponsors = people(
        exhibition
            .support
            .sponsors
            .iter()
            .map(|name| (name.as_str(), ""))
            .collect(),
    );

    let panel = |label: String, body: Column<'a, Message>| {
        container(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(label).size(typography::TITLE_SM).font(BOLD))
                .push(body),
        )
        .padding(spacing::MD)
        .width(Length::FillPortion(1))
        .style(styles::container::panel)
    };

    Column::new()
        .spacing(spacing::LG)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(panel(i18n.tr("exhibition-organizers"), organizers))
                .push(panel(i18n.tr("exhibition-editorial-board"), board)),
        )
        .push(heading(i18n.tr("exhibition-support")))
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(panel(i18n.tr("exhibition-translators"), translators))
                .push(panel(i18n.tr("exhibition-data-input"), data_input))
                .push(panel(i18n.tr("exhibition-sponsors"), sponsors)),
        )
        .into()
}
