// SPDX-License-Identifier: MPL-2.0
//! Explore screen: text, type and tag filters over every source.

use super::{card_grid, chip, muted, page, source_card, title, Message, ViewContext, BOLD};
use crate::catalog::{Catalog, Source, SourceQuery, ALL_TYPES};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, pick_list, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Filters chosen on the Explore screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    query: SourceQuery,
}

impl Default for State {
    fn default() -> Self {
        Self {
            query: SourceQuery::new("", Some(ALL_TYPES), None),
        }
    }
}

impl State {
    /// Fresh filters with only the text preset (search box, paper links).
    #[must_use]
    pub fn searching(text: String) -> Self {
        let mut state = Self::default();
        state.set_text(text);
        state
    }

    pub fn set_text(&mut self, text: String) {
        self.query.text = text;
    }

    pub fn select_type(&mut self, source_type: String) {
        self.query.source_type = Some(source_type);
    }

    /// Selects `tag`, or clears the tag filter when it is already selected.
    pub fn toggle_tag(&mut self, tag: String) {
        if self.query.tag.as_deref() == Some(tag.as_str()) {
            self.query.tag = None;
        } else {
            self.query.tag = Some(tag);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.query.text
    }

    #[must_use]
    pub fn source_type(&self) -> &str {
        self.query.source_type.as_deref().unwrap_or(ALL_TYPES)
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.query.tag.as_deref()
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn results<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Source> {
        catalog.search(&self.query)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let results = state.results(ctx.catalog);

    let mut type_options = vec![ALL_TYPES.to_string()];
    type_options.extend(ctx.catalog.source_types().iter().cloned());

    let mut tags = Column::new().spacing(spacing::XXS).push(
        button(Text::new(i18n.tr("explore-all-tags")).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::XS])
            .on_press_maybe(state.tag().map(|tag| Message::TagToggled(tag.to_string())))
            .style(styles::button::chip(state.tag().is_none())),
    );
    for tag in ctx.catalog.tags() {
        let selected = state.tag() == Some(tag.as_str());
        tags = tags.push(
            button(Text::new(tag.as_str()).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .on_press(Message::TagToggled(tag.clone()))
                .style(styles::button::chip(selected)),
        );
    }

    let mut sidebar = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("explore-type-label")).font(BOLD))
        .push(
            pick_list(
                type_options,
                Some(state.source_type().to_string()),
                Message::TypeSelected,
            )
            .width(Length::Fill),
        )
        .push(Text::new(i18n.tr("explore-tags-label")).font(BOLD))
        .push(tags);

    if state.has_filters() {
        sidebar = sidebar.push(
            button(Text::new(i18n.tr("explore-clear-filters")).size(typography::BODY_SM))
                .on_press(Message::ClearFilters)
                .style(styles::button::link),
        );
    }

    let sidebar = Container::new(sidebar)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .style(styles::container::panel);

    let count = results.len().to_string();
    let mut summary = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(muted(
            i18n.tr_with_args("explore-count", &[("count", count.as_str())]),
        ));
    if let Some(tag) = state.tag() {
        summary = summary.push(chip(tag));
    }

    let listing: Element<'a, Message> = if results.is_empty() {
        container(muted(i18n.tr("explore-no-results")))
            .padding(spacing::XL)
            .into()
    } else {
        card_grid(
            results
                .into_iter()
                .map(|source| source_card(&ctx, source))
                .collect(),
        )
    };

    let main = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(
            text_input(&i18n.tr("explore-search-placeholder"), state.text())
                .on_input(Message::QueryChanged)
                .padding(spacing::SM),
        )
        .push(summary)
        .push(listing);

    let content = Column::new()
        .push(title(i18n.tr("explore-title")))
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(sidebar)
                .push(main),
        );

    page(&ctx, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedData;

    #[test]
    fn default_filters_are_inactive() {
        let state = State::default();
        assert!(!state.has_filters());
        assert_eq!(state.source_type(), ALL_TYPES);
    }

    #[test]
    fn toggling_selected_tag_clears_it() {
        let mut state = State::default();
        state.toggle_tag("science".into());
        assert_eq!(state.tag(), Some("science"));
        state.toggle_tag("optics".into());
        assert_eq!(state.tag(), Some("optics"));
        state.toggle_tag("optics".into());
        assert_eq!(state.tag(), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = State::searching("flea".into());
        state.select_type("Print".into());
        state.toggle_tag("science".into());
        assert!(state.has_filters());
        state.clear();
        assert_eq!(state, State::default());
    }

    #[test]
    fn results_match_catalog_search() {
        let catalog = Catalog::load(EmbeddedData).expect("bundled catalog loads");
        let mut state = State::searching("flea".into());
        state.select_type(ALL_TYPES.into());
        let direct = catalog.search_sources("flea", Some(ALL_TYPES), None);
        assert_eq!(state.results(&catalog), direct);
    }
}
