// SPDX-License-Identifier: MPL-2.0
//! Welcome screen: hero with search, section entry points and featured
//! sources.

use super::{card_grid, heading, link, page, source_card, Message, ViewContext, PREVIEW_COUNT};
use crate::app::Screen;
use crate::catalog::{Catalog, Source};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Column, Container, Row, Space, Text},
    Element, Length,
};

/// The first sources in catalog order.
pub fn featured(catalog: &Catalog) -> &[Source] {
    let all = catalog.all_sources();
    &all[..all.len().min(PREVIEW_COUNT)]
}

/// Explore query for a submitted search, or `None` when the box is blank.
#[must_use]
pub fn submitted_query(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn view<'a>(ctx: ViewContext<'a>, search: &'a str) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let site = ctx.catalog.site();

    let search_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            text_input(&i18n.tr("home-search-placeholder"), search)
                .on_input(Message::SearchInput)
                .on_submit(Message::SubmitSearch)
                .padding(spacing::SM)
                .size(typography::BODY_LG),
        )
        .push(
            button(Text::new(i18n.tr("home-search-button")))
                .padding([spacing::SM, spacing::MD])
                .on_press(Message::SubmitSearch),
        );

    let hero = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .max_width(720)
            .push(super::title(
                i18n.tr_with_args("home-welcome", &[("name", site.name.as_str())]),
            ))
            .push(Text::new(site.tagline.as_str()).size(typography::TITLE_SM))
            .push(Text::new(site.description.as_str()).size(typography::BODY))
            .push(search_row),
    )
    .padding(spacing::XXL)
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .style(styles::container::hero);

    let features = Row::new()
        .spacing(spacing::LG)
        .push(feature(
            i18n.tr("home-feature-explore-title"),
            i18n.tr("home-feature-explore-text"),
            i18n.tr("home-feature-explore-link"),
            Screen::Explore,
        ))
        .push(feature(
            i18n.tr("home-feature-discover-title"),
            i18n.tr("home-feature-discover-text"),
            i18n.tr("home-feature-discover-link"),
            Screen::Discover,
        ))
        .push(feature(
            i18n.tr("home-feature-learn-title"),
            i18n.tr("home-feature-learn-text"),
            i18n.tr("home-feature-learn-link"),
            Screen::About,
        ));

    let featured_header = Row::new()
        .align_y(Vertical::Center)
        .push(heading(i18n.tr("home-featured-title")))
        .push(Space::new().width(Length::Fill))
        .push(link(
            i18n.tr("home-view-all"),
            Message::Open(Screen::Explore),
        ));

    let cards = featured(ctx.catalog)
        .iter()
        .map(|source| source_card(&ctx, source))
        .collect();

    let content = Column::new()
        .push(hero)
        .push(features)
        .push(featured_header)
        .push(card_grid(cards));

    page(&ctx, content)
}

fn feature<'a>(
    title: String,
    body: String,
    link_label: String,
    target: Screen,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .align_x(Horizontal::Center)
        .push(super::heading(title))
        .push(Text::new(body).size(typography::BODY).center())
        .push(link(link_label, Message::Open(target)))
        .into()
}
