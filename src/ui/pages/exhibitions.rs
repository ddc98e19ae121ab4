// SPDX-License-Identifier: MPL-2.0
//! Exhibitions listing.

use super::{heading, muted, page, title, Message, ViewContext};
use crate::app::Screen;
use crate::catalog::{ExhibitionStatus, ExhibitionSummary};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Row, Space, Text},
    Element, Length,
};

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let exhibitions = ctx.catalog.all_exhibitions();

    let mut content = Column::new()
        .push(title(i18n.tr("exhibitions-title")))
        .push(Text::new(i18n.tr("exhibitions-intro")).size(typography::BODY_LG));

    if exhibitions.is_empty() {
        content = content.push(muted(i18n.tr("exhibitions-empty")));
    }

    for summary in exhibitions {
        content = content.push(summary_card(i18n, summary));
    }

    page(&ctx, content)
}

fn summary_card<'a>(i18n: &I18n, summary: &'a ExhibitionSummary) -> Element<'a, Message> {
    let status_color = match summary.status {
        ExhibitionStatus::Ongoing => palette::SUCCESS_500,
        ExhibitionStatus::Completed => palette::GRAY_400,
    };
    let count = summary.object_count.to_string();

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(heading(summary.title.as_str()))
        .push(Space::new().width(Length::Fill))
        .push(
            container(Text::new(i18n.tr(summary.status.i18n_key())).size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::badge(status_color)),
        );

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header)
        .push(Text::new(summary.short_description.as_str()).size(typography::BODY))
        .push(muted(
            i18n.tr_with_args("exhibitions-object-count", &[("count", count.as_str())]),
        ));

    button(body)
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::Open(Screen::Exhibition(summary.slug.clone())))
        .style(styles::button::card)
        .into()
}
