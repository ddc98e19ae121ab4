// SPDX-License-Identifier: MPL-2.0
//! Catalog screens.
//!
//! Every page is a pure `view` over the catalog plus whatever small state the
//! app keeps for it (explore filters, the home search box, the inline
//! viewer). Pages emit [`Message`]s; the app routes them in
//! `app::update`.
//!
//! Card covers come from the shared [`MediaCache`]. The app asks
//! [`wanted_media`] which covers the current screen shows and fetches the
//! missing ones.

pub mod about;
pub mod discover;
pub mod exhibition_detail;
pub mod exhibition_object;
pub mod exhibition_part;
pub mod exhibitions;
pub mod explore;
pub mod home;
pub mod source_detail;

use crate::app::Screen;
use crate::catalog::{Catalog, CatalogItem, ExhibitionObject, Source};
use crate::i18n::fluent::I18n;
use crate::media::{ImageData, MediaCache, MediaSlot};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, image, scrollable, Column, Container, Row, Text},
    ContentFit, Element, Font, Length,
};

/// Messages emitted by catalog screens.
#[derive(Debug, Clone)]
pub enum Message {
    Open(Screen),
    /// Welcome screen search box edited.
    SearchInput(String),
    /// Welcome screen search submitted.
    SubmitSearch,
    /// Open Explore with the text filter preset (paper "View" links).
    Browse(String),
    QueryChanged(String),
    TypeSelected(String),
    TagToggled(String),
    ClearFilters,
    /// Inline viewer on a detail screen.
    Viewer(viewer::Message),
    /// Open the inline viewer's items in the fullscreen modal.
    ExpandViewer,
}

/// Shared data every page renders from.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub media: &'a MediaCache,
    pub placeholder: &'a ImageData,
    /// A modal viewer holds the scroll lock; pages must not scroll.
    pub scroll_locked: bool,
}

pub(crate) const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Number of items shown in preview rows (welcome, discover).
pub const PREVIEW_COUNT: usize = 4;

/// Cover image of a card: the first image, else the 3D model poster.
pub fn cover_url<T: CatalogItem + ?Sized>(item: &T) -> Option<&str> {
    item.images()
        .first()
        .map(|image| image.url.as_str())
        .or_else(|| item.model3d().and_then(|model| model.poster.as_deref()))
}

/// Cover URLs the given screen displays, in display order.
///
/// Detail screens list nothing here: their media goes through the viewer.
pub fn wanted_media(catalog: &Catalog, screen: &Screen, filters: &explore::State) -> Vec<String> {
    let urls: Vec<&str> = match screen {
        Screen::Home => home::featured(catalog)
            .iter()
            .filter_map(|s| cover_url(s))
            .collect(),
        Screen::Explore => filters
            .results(catalog)
            .into_iter()
            .filter_map(|s| cover_url(s))
            .collect(),
        Screen::Discover => catalog
            .papers()
            .iter()
            .flat_map(|paper| discover::previews(catalog, &paper.title))
            .filter_map(|s| cover_url(s))
            .collect(),
        Screen::Exhibition(slug) => catalog
            .exhibition_by_slug(slug)
            .map(|e| catalog.exhibition_objects(&e.id))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|o| cover_url(o))
            .collect(),
        Screen::ExhibitionPart { exhibition, part } => {
            exhibition_part::objects(catalog, exhibition, part)
                .into_iter()
                .filter_map(|o| cover_url(o))
                .collect()
        }
        Screen::Source(_)
        | Screen::ExhibitionObject { .. }
        | Screen::Exhibitions
        | Screen::About => Vec::new(),
    };
    urls.into_iter().map(str::to_string).collect()
}

/// Page frame: padded content, scrollable unless a modal holds the lock.
pub fn page<'a>(ctx: &ViewContext<'a>, content: Column<'a, Message>) -> Element<'a, Message> {
    let body = Container::new(
        content
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .max_width(sizing::PAGE_WIDTH),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    if ctx.scroll_locked {
        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .into()
    } else {
        scrollable(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

pub fn title<'a>(text: impl Into<String>) -> Text<'a> {
    Text::new(text.into()).size(typography::TITLE_LG).font(BOLD)
}

pub fn heading<'a>(text: impl Into<String>) -> Text<'a> {
    Text::new(text.into()).size(typography::TITLE_MD).font(BOLD)
}

pub fn muted<'a>(text: impl Into<String>) -> Text<'a> {
    Text::new(text.into())
        .size(typography::BODY_SM)
        .color(palette::GRAY_400)
}

/// A text button styled as a link.
pub fn link<'a>(label: impl Into<String>, target: Message) -> Element<'a, Message> {
    button(Text::new(label.into()).size(typography::BODY))
        .padding(0)
        .on_press(target)
        .style(styles::button::link)
        .into()
}

/// `← label` back link.
pub fn back_link<'a>(label: impl Into<String>, screen: Screen) -> Element<'a, Message> {
    link(format!("← {}", label.into()), Message::Open(screen))
}

/// Breadcrumb trail; the last entry is the current page and is not a link.
pub fn breadcrumb<'a>(entries: Vec<(String, Option<Screen>)>) -> Element<'a, Message> {
    let last = entries.len().saturating_sub(1);
    entries
        .into_iter()
        .enumerate()
        .fold(
            Row::new().spacing(spacing::XS).align_y(Vertical::Center),
            |row, (index, (label, target))| {
                let row = if index > 0 { row.push(muted("/")) } else { row };
                match target {
                    Some(screen) if index != last => row.push(link(label, Message::Open(screen))),
                    _ => row.push(muted(label)),
                }
            },
        )
        .into()
}

/// Small rounded label.
pub fn chip<'a>(label: impl Into<String>) -> Element<'a, Message> {
    container(Text::new(label.into()).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::chip)
        .into()
}

/// Wrapping row of cards.
pub fn card_grid<'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Row::with_children(cards)
        .spacing(spacing::MD)
        .wrap()
        .into()
}

/// Image for a cover URL, or the placeholder when there is none or it
/// failed. Still-loading covers show an ellipsis.
pub fn cover<'a>(
    ctx: &ViewContext<'a>,
    url: Option<&str>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let handle = match url.map(|url| ctx.media.peek(url)) {
        Some(Some(MediaSlot::Ready(image))) => image.handle.clone(),
        Some(None) => {
            return Container::new(muted("…"))
                .center_x(Length::Fixed(width))
                .center_y(Length::Fixed(height))
                .style(styles::container::panel)
                .into();
        }
        Some(Some(MediaSlot::Failed | MediaSlot::Model(_))) | None => {
            ctx.placeholder.handle.clone()
        }
    };
    image(handle)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Cover)
        .into()
}

/// Clickable card for a source: cover, title, type and up to three tags.
pub fn source_card<'a>(ctx: &ViewContext<'a>, source: &'a Source) -> Element<'a, Message> {
    let tags = source
        .tags
        .iter()
        .take(3)
        .fold(Row::new().spacing(spacing::XXS), |row, tag| {
            row.push(chip(tag.as_str()))
        });

    let body = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(Text::new(source.title.as_str()).size(typography::BODY_LG).font(BOLD))
        .push(muted(source.source_type.as_str()))
        .push(tags);

    card(
        Column::new()
            .push(cover(
                ctx,
                cover_url(source),
                sizing::CARD_WIDTH,
                sizing::CARD_IMAGE_HEIGHT,
            ))
            .push(body),
        Message::Open(Screen::Source(source.slug.clone())),
    )
}

/// Clickable card for an exhibition object.
pub fn object_card<'a>(
    ctx: &ViewContext<'a>,
    exhibition_slug: &str,
    object: &'a ExhibitionObject,
    tag_count: usize,
) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(Text::new(object.title.as_str()).size(typography::BODY_LG).font(BOLD))
        .push(muted(object.country.as_str()));

    if tag_count > 0 {
        body = body.push(
            object
                .tags
                .iter()
                .take(tag_count)
                .fold(Row::new().spacing(spacing::XXS), |row, tag| {
                    row.push(chip(tag.as_str()))
                }),
        );
    }

    card(
        Column::new()
            .push(cover(
                ctx,
                cover_url(object),
                sizing::CARD_WIDTH,
                sizing::CARD_WIDTH,
            ))
            .push(body),
        Message::Open(Screen::ExhibitionObject {
            exhibition: exhibition_slug.to_string(),
            object: object.slug.clone(),
        }),
    )
}

fn card<'a>(content: Column<'a, Message>, target: Message) -> Element<'a, Message> {
    button(content.width(Length::Fixed(sizing::CARD_WIDTH)))
        .padding(0)
        .on_press(target)
        .style(styles::button::card)
        .into()
}

/// Labelled value in a metadata list; empty values are skipped.
pub fn field<'a>(label: String, value: &'a str) -> Option<Element<'a, Message>> {
    if value.trim().is_empty() {
        return None;
    }
    Some(
        Column::new()
            .spacing(2.0)
            .push(muted(label))
            .push(Text::new(value).size(typography::BODY))
            .into(),
    )
}

/// Centered "not found" state with a way back.
pub fn not_found<'a>(
    ctx: &ViewContext<'a>,
    title_key: &str,
    back_label: String,
    back: Screen,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(heading(ctx.i18n.tr(title_key)))
        .push(back_link(back_label, back));

    Container::new(content).center(Length::Fill).into()
}
