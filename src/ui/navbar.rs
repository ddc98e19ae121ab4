// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the site name (back to the welcome screen), one link per
//! entry of the site navigation list, and toggles for theme and language.

use crate::app::Screen;
use crate::catalog::records::NavLink;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site_name: &'a str,
    pub links: &'a [NavLink],
    /// Section of the current screen, highlighted in the bar.
    pub active: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Open(Screen),
    CycleTheme,
    CycleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Open(Screen),
    CycleTheme,
    CycleLanguage,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Open(screen) => Event::Open(screen),
        Message::CycleTheme => Event::CycleTheme,
        Message::CycleLanguage => Event::CycleLanguage,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                container(Text::new("C").size(typography::TITLE_SM))
                    .center(Length::Fixed(sizing::ICON_LG))
                    .style(styles::container::badge(palette::PRIMARY_500)),
            )
            .push(Text::new(ctx.site_name).size(typography::TITLE_MD)),
    )
    .padding(spacing::XXS)
    .on_press(Message::Open(Screen::Home))
    .style(styles::button::nav_link(false));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    // Paths the desktop app has no screen for (the contact form) are skipped.
    for link in ctx.links {
        let Some(screen) = Screen::from_path(&link.path) else {
            continue;
        };
        let active = screen == ctx.active;
        row = row.push(
            button(Text::new(link.label.as_str()).size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .on_press(Message::Open(screen))
                .style(styles::button::nav_link(active)),
        );
    }

    let theme_label = ctx.i18n.tr(ctx.theme_mode.i18n_key());
    let language_label = ctx.i18n.current_locale().to_string();

    row = row
        .push(
            button(Text::new(theme_label).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .on_press(Message::CycleTheme)
                .style(styles::button::chip(false)),
        )
        .push(
            button(Text::new(language_label).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .on_press(Message::CycleLanguage)
                .style(styles::button::chip(false)),
        );

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<NavLink> {
        ["/explore", "/discover", "/exhibitions", "/about", "/contact"]
            .into_iter()
            .map(|path| NavLink {
                label: path.trim_start_matches('/').to_string(),
                path: path.to_string(),
            })
            .collect()
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let links = links();
        let ctx = ViewContext {
            i18n: &i18n,
            site_name: "Cabinet",
            links: &links,
            active: Screen::Explore,
            theme_mode: ThemeMode::Dark,
        };
        let _element = view(ctx);
    }

    #[test]
    fn links_emit_open_events() {
        let event = update(Message::Open(Screen::Discover));
        assert_eq!(event, Event::Open(Screen::Discover));
    }

    #[test]
    fn toggles_emit_events() {
        assert_eq!(update(Message::CycleTheme), Event::CycleTheme);
        assert_eq!(update(Message::CycleLanguage), Event::CycleLanguage);
    }
}
