// SPDX-License-Identifier: MPL-2.0
//! Discover screen: curated papers with their teaching units and a preview
//! of the sources each paper gathers.

use super::{chip, cover, cover_url, heading, link, muted, page, title, Message, ViewContext, PREVIEW_COUNT};
use crate::app::Screen;
use crate::catalog::{Catalog, Paper, Source};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, Column, Container, Row, Space, Text},
    Element, Length,
};

/// First sources of a paper, shown as preview tiles.
pub fn previews<'c>(catalog: &'c Catalog, paper_title: &str) -> Vec<&'c Source> {
    let mut sources = catalog.sources_by_paper(paper_title);
    sources.truncate(PREVIEW_COUNT);
    sources
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut content = Column::new()
        .push(title(i18n.tr("discover-title")))
        .push(Text::new(i18n.tr("discover-intro")).size(typography::BODY_LG))
        .push(heading(i18n.tr("discover-papers-title")));

    for paper in ctx.catalog.papers() {
        content = content.push(paper_card(&ctx, paper));
    }

    page(&ctx, content)
}

fn paper_card<'a>(ctx: &ViewContext<'a>, paper: &'a Paper) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let sources = ctx.catalog.sources_by_paper(&paper.title);
    let count = sources.len().to_string();

    let units = paper
        .units
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, unit| {
            let in_unit = ctx.catalog.sources_by_unit(unit).len();
            row.push(chip(format!("{unit} ({in_unit})")))
        })
        .wrap();

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(heading(paper.title.as_str()))
        .push(Space::new().width(Length::Fill))
        .push(link(
            format!("{} →", i18n.tr("discover-view")),
            Message::Browse(paper.title.clone()),
        ));

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(units)
        .push(muted(
            i18n.tr_with_args("discover-source-count", &[("count", count.as_str())]),
        ));

    if !sources.is_empty() {
        let tiles = previews(ctx.catalog, &paper.title).into_iter().fold(
            Row::new().spacing(spacing::MD),
            |row, source| {
                let tile = Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fixed(sizing::PREVIEW_TILE))
                    .push(cover(
                        ctx,
                        cover_url(source),
                        sizing::PREVIEW_TILE,
                        sizing::PREVIEW_TILE,
                    ))
                    .push(muted(source.title.as_str()));
                row.push(
                    button(tile)
                        .padding(0)
                        .on_press(Message::Open(Screen::Source(source.slug.clone())))
                        .style(styles::button::link),
                )
            },
        );
        body = body.push(scrollable(tiles).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        )));
    }

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedData;

    #[test]
    fn previews_are_capped_and_in_paper() {
        let catalog = Catalog::load(EmbeddedData).expect("bundled catalog loads");
        for paper in catalog.papers() {
            let previews = previews(&catalog, &paper.title);
            assert!(previews.len() <= PREVIEW_COUNT);
            assert!(previews.iter().all(|s| s.paper == paper.title));
        }
    }

    #[test]
    fn unknown_paper_has_no_previews() {
        let catalog = Catalog::load(EmbeddedData).expect("bundled catalog loads");
        assert!(previews(&catalog, "No Such Paper").is_empty());
    }
}
