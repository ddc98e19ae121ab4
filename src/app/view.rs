// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the current page. A notice banner appears under it
//! when something went wrong loading the catalog or saving preferences, and
//! an open modal viewer covers everything. A fullscreen viewer replaces the
//! whole layout.

use super::{Message, Notice, Screen};
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::media::{ImageData, MediaCache};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::pages::{self, explore};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::{self, pane, Modal};
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub screen: &'a Screen,
    pub explore: &'a explore::State,
    pub search: &'a str,
    pub inline_viewer: Option<&'a viewer::State>,
    pub modal: Option<&'a Modal>,
    pub scroll_locked: bool,
    pub media: &'a MediaCache,
    pub placeholder: &'a ImageData,
    pub theme_mode: ThemeMode,
    pub notice: Option<&'a Notice>,
}

/// What fills the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Navbar, notice and page, with the modal on top when one is open.
    Screen,
    /// Only the modal viewer.
    FullscreenModal,
    /// Only the inline viewer, stretched to the window.
    FullscreenInline,
}

/// Picks the layout from the viewers' observed window mode. An open modal
/// always takes precedence over the inline viewer beneath it.
#[must_use]
pub fn layout(inline_viewer: Option<&viewer::State>, modal: Option<&Modal>) -> Layout {
    match (modal, inline_viewer) {
        (Some(modal), _) if modal.viewer.is_fullscreen() => Layout::FullscreenModal,
        (Some(_), _) => Layout::Screen,
        (None, Some(inline)) if inline.is_fullscreen() => Layout::FullscreenInline,
        (None, _) => Layout::Screen,
    }
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer_ctx = pane::ViewContext {
        i18n: ctx.i18n,
        media: ctx.media,
        placeholder: ctx.placeholder,
        height: Length::Fill,
    };
    match (layout(ctx.inline_viewer, ctx.modal), ctx.modal, ctx.inline_viewer) {
        (Layout::FullscreenModal, Some(modal), _) => {
            return viewer::modal::view(viewer_ctx, modal).map(Message::Modal);
        }
        (Layout::FullscreenInline, _, Some(inline)) => {
            let fullscreen: Element<'_, viewer::Message> =
                Container::new(pane::view(viewer_ctx, inline))
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::backdrop)
                    .into();
            return fullscreen.map(|message| Message::Page(pages::Message::Viewer(message)));
        }
        _ => {}
    }

    let page_ctx = pages::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        media: ctx.media,
        placeholder: ctx.placeholder,
        scroll_locked: ctx.scroll_locked,
    };

    let page = view_page(page_ctx, &ctx).map(Message::Page);

    let site = ctx.catalog.site();
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        site_name: site.name.as_str(),
        links: &site.navigation,
        active: ctx.screen.section(),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let mut column = Column::new().push(navbar_view);
    if let Some(notice) = ctx.notice {
        column = column.push(view_notice(ctx.i18n, notice));
    }
    let base = column.push(page).width(Length::Fill).height(Length::Fill);

    match ctx.modal {
        Some(modal) => Stack::new()
            .push(base)
            .push(viewer::modal::view(viewer_ctx, modal).map(Message::Modal))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => base.into(),
    }
}

fn view_page<'a>(page_ctx: pages::ViewContext<'a>, ctx: &ViewContext<'a>) -> Element<'a, pages::Message> {
    match ctx.screen {
        Screen::Home => pages::home::view(page_ctx, ctx.search),
        Screen::Explore => pages::explore::view(page_ctx, ctx.explore),
        Screen::Discover => pages::discover::view(page_ctx),
        Screen::Source(slug) => pages::source_detail::view(page_ctx, slug, ctx.inline_viewer),
        Screen::Exhibitions => pages::exhibitions::view(page_ctx),
        Screen::Exhibition(slug) => pages::exhibition_detail::view(page_ctx, slug),
        Screen::ExhibitionPart { exhibition, part } => {
            pages::exhibition_part::view(page_ctx, exhibition, part)
        }
        Screen::ExhibitionObject { exhibition, object } => {
            pages::exhibition_object::view(page_ctx, exhibition, object, ctx.inline_viewer)
        }
        Screen::About => pages::about::view(page_ctx),
    }
}

fn view_notice<'a>(i18n: &I18n, notice: &Notice) -> Element<'a, Message> {
    let text = match notice.detail.as_deref() {
        Some(detail) => i18n.tr_with_args(notice.key, &[("error", detail)]),
        None => i18n.tr(notice.key),
    };

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(text).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(i18n.tr("notice-dismiss")).size(typography::BODY_SM))
                    .on_press(Message::DismissNotice)
                    .style(styles::button::link),
            ),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::warning_banner)
    .into()
}
