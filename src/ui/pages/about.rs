// SPDX-License-Identifier: MPL-2.0
//! About screen: mission, team, partners and application version.

use super::{heading, muted, page, title, Message, ViewContext, BOLD};
use crate::catalog::records::TeamMember;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{container, Column, Row, Text},
    Element, Length,
};

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let site = ctx.catalog.site();

    let mut content = Column::new()
        .push(title(i18n.tr_with_args("about-title", &[("name", site.name.as_str())])))
        .push(Text::new(site.tagline.as_str()).size(typography::TITLE_SM))
        .push(Text::new(site.description.as_str()).size(typography::BODY_LG));

    content = content
        .push(heading(i18n.tr("about-mission-title")))
        .push(Text::new(i18n.tr("about-mission-text")).size(typography::BODY));

    if !site.team.current.is_empty() {
        content = content.push(heading(i18n.tr("about-team-title"))).push(
            Row::with_children(site.team.current.iter().map(member_card))
                .spacing(spacing::MD)
                .wrap(),
        );
    }

    if !site.team.past.is_empty() {
        content = content
            .push(heading(i18n.tr("about-past-team-title")))
            .push(muted(site.team.past.join(", ")));
    }

    if !site.partners.is_empty() {
        content = content.push(heading(i18n.tr("about-partners-title"))).push(
            site.partners
                .iter()
                .fold(Column::new().spacing(spacing::XXS), |column, partner| {
                    column.push(Text::new(format!("• {partner}")).size(typography::BODY))
                }),
        );
    }

    content = content
        .push(heading(i18n.tr("about-standards-title")))
        .push(Text::new(i18n.tr("about-standards-text")).size(typography::BODY))
        .push(muted(i18n.tr_with_args(
            "about-version",
            &[("version", env!("CARGO_PKG_VERSION"))],
        )));

    page(&ctx, content)
}

fn member_card(member: &TeamMember) -> Element<'_, Message> {
    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(member.name.as_str()).size(typography::BODY_LG).font(BOLD))
        .push(Text::new(member.role.as_str()).size(typography::BODY_SM));
    if !member.affiliation.is_empty() {
        body = body.push(muted(member.affiliation.as_str()));
    }

    container(body)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, EmbeddedData};
    use crate::i18n::fluent::I18n;
    use crate::media::{placeholder, MediaCache};

    #[test]
    fn about_view_renders() {
        let catalog = Catalog::load(EmbeddedData).expect("bundled catalog loads");
        assert!(!catalog.site().team.current.is_empty());
        let i18n = I18n::default();
        let media = MediaCache::default();
        let placeholder = placeholder();
        let ctx = ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            media: &media,
            placeholder: &placeholder,
            scroll_locked: false,
        };
        let _element = view(ctx);
    }
}
