// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler takes the [`UpdateContext`] and returns the follow-up
//! [`Task`]: media fetches for newly visible covers and viewer items, and
//! window mode requests for fullscreen.

use super::config;
use super::{Message, Notice, Screen};
use crate::catalog::{Catalog, CatalogItem};
use crate::domain::media::MediaItem;
use crate::error::MediaError;
use crate::i18n::fluent::I18n;
use crate::media::{Fetcher, ImageData, MediaCache, ModelData};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::pages::{self, explore, home};
use crate::ui::scroll_lock::ScrollGate;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::{self, keyboard, Modal};
use iced::keyboard::{Key, Modifiers};
use iced::{window, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub catalog: &'a mut Catalog,
    pub screen: &'a mut Screen,
    pub explore: &'a mut explore::State,
    pub search: &'a mut String,
    pub inline_viewer: &'a mut Option<viewer::State>,
    pub modal: &'a mut Option<Modal>,
    pub scroll_gate: &'a ScrollGate,
    pub media: &'a mut MediaCache,
    pub fetcher: &'a mut Fetcher,
    pub theme_mode: &'a mut ThemeMode,
    pub window_id: &'a mut Option<window::Id>,
    pub notice: &'a mut Option<Notice>,
}

impl UpdateContext<'_> {
    fn any_viewer_fullscreen(&self) -> bool {
        self.inline_viewer
            .as_ref()
            .is_some_and(viewer::State::is_fullscreen)
            || self
                .modal
                .as_ref()
                .is_some_and(|modal| modal.viewer.is_fullscreen())
    }
}

/// Builds the inline viewer for a detail screen.
///
/// Screens without media, and items that resolve to nothing, get no viewer.
pub fn inline_viewer_for(catalog: &Catalog, screen: &Screen) -> Option<viewer::State> {
    let items = match screen {
        Screen::Source(slug) => catalog.source_by_slug(slug)?.media_items(),
        Screen::ExhibitionObject { object, .. } => {
            catalog.exhibition_object_by_slug(object)?.media_items()
        }
        _ => return None,
    };
    (!items.is_empty()).then(|| viewer::State::inline(items))
}

/// Handles screen transitions.
///
/// Leaving a screen drops its viewers: the modal (and with it the scroll
/// lock) and the inline viewer. A fullscreen window goes back to windowed.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let leave_fullscreen = ctx.any_viewer_fullscreen();

    *ctx.modal = None;
    *ctx.inline_viewer = inline_viewer_for(ctx.catalog, &target);
    tracing::debug!(screen = ?target, "switching screen");
    *ctx.screen = target;

    let exit = if leave_fullscreen {
        request_fullscreen(*ctx.window_id, false)
    } else {
        Task::none()
    };
    Task::batch([exit, load_wanted_media(ctx)])
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Open(screen) => handle_screen_switch(ctx, screen),
        NavbarEvent::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.next();
            persist_preferences(ctx);
            Task::none()
        }
        NavbarEvent::CycleLanguage => {
            cycle_locale(ctx.i18n);
            persist_preferences(ctx);
            Task::none()
        }
        NavbarEvent::None => Task::none(),
    }
}

/// Handles messages from the catalog screens.
pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match message {
        pages::Message::Open(screen) => handle_screen_switch(ctx, screen),
        pages::Message::SearchInput(text) => {
            *ctx.search = text;
            Task::none()
        }
        pages::Message::SubmitSearch => match home::submitted_query(ctx.search.as_str()) {
            Some(query) => browse(ctx, query),
            None => Task::none(),
        },
        pages::Message::Browse(text) => browse(ctx, text),
        pages::Message::QueryChanged(text) => {
            ctx.explore.set_text(text);
            load_wanted_media(ctx)
        }
        pages::Message::TypeSelected(source_type) => {
            ctx.explore.select_type(source_type);
            load_wanted_media(ctx)
        }
        pages::Message::TagToggled(tag) => {
            if *ctx.screen == Screen::Explore {
                ctx.explore.toggle_tag(tag);
                load_wanted_media(ctx)
            } else {
                // Tags on a detail screen start a fresh tag-only search.
                *ctx.explore = explore::State::default();
                ctx.explore.toggle_tag(tag);
                handle_screen_switch(ctx, Screen::Explore)
            }
        }
        pages::Message::ClearFilters => {
            ctx.explore.clear();
            load_wanted_media(ctx)
        }
        pages::Message::Viewer(message) => {
            let Some(viewer) = ctx.inline_viewer.as_mut() else {
                return Task::none();
            };
            let effect = viewer.handle(message);
            apply_viewer_effect(ctx, effect)
        }
        pages::Message::ExpandViewer => {
            let Some(inline) = ctx.inline_viewer.as_ref() else {
                return Task::none();
            };
            let mut modal = Modal::open(
                inline.items().to_vec(),
                inline.current_index(),
                ctx.scroll_gate,
            );
            // The window may already be fullscreen; start from the last
            // observed mode and read it back in case it changed since.
            modal
                .viewer
                .handle(viewer::Message::FullscreenChanged(inline.is_fullscreen()));
            *ctx.modal = Some(modal);
            let observe = ctx.window_id.map_or_else(Task::none, observe_mode);
            Task::batch([observe, load_wanted_media(ctx)])
        }
    }
}

fn browse(ctx: &mut UpdateContext<'_>, text: String) -> Task<Message> {
    *ctx.explore = explore::State::searching(text);
    handle_screen_switch(ctx, Screen::Explore)
}

/// Handles messages for the viewer in the modal overlay.
pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    let Some(modal) = ctx.modal.as_mut() else {
        return Task::none();
    };
    let effect = modal.viewer.handle(message);
    apply_viewer_effect(ctx, effect)
}

fn apply_viewer_effect(ctx: &mut UpdateContext<'_>, effect: viewer::Effect) -> Task<Message> {
    match effect {
        viewer::Effect::None => Task::none(),
        viewer::Effect::IndexChanged(_) => load_wanted_media(ctx),
        viewer::Effect::RequestFullscreen(enter) => request_fullscreen(*ctx.window_id, enter),
        viewer::Effect::Close => {
            let was_fullscreen = ctx
                .modal
                .as_ref()
                .is_some_and(|modal| modal.viewer.is_fullscreen());
            *ctx.modal = None;
            if was_fullscreen {
                request_fullscreen(*ctx.window_id, false)
            } else {
                Task::none()
            }
        }
    }
}

/// Routes an uncaptured key press to the modal viewer, else the inline one.
pub fn handle_key_pressed(
    ctx: &mut UpdateContext<'_>,
    key: &Key,
    modifiers: Modifiers,
) -> Task<Message> {
    let Some(message) = keyboard::map_key(key, modifiers) else {
        return Task::none();
    };
    if ctx.modal.is_some() {
        handle_modal_message(ctx, message)
    } else {
        handle_page_message(ctx, pages::Message::Viewer(message))
    }
}

/// Records the window id and re-reads the window mode, so exits the
/// platform performed on its own reach the viewers.
pub fn handle_window_changed(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    *ctx.window_id = Some(id);
    if ctx.inline_viewer.is_some() || ctx.modal.is_some() {
        observe_mode(id)
    } else {
        Task::none()
    }
}

/// Feeds the observed window mode to every mounted viewer.
pub fn handle_window_mode(ctx: &mut UpdateContext<'_>, mode: window::Mode) -> Task<Message> {
    let is_fullscreen = mode == window::Mode::Fullscreen;
    if let Some(viewer) = ctx.inline_viewer.as_mut() {
        viewer.handle(viewer::Message::FullscreenChanged(is_fullscreen));
    }
    if let Some(modal) = ctx.modal.as_mut() {
        modal
            .viewer
            .handle(viewer::Message::FullscreenChanged(is_fullscreen));
    }
    Task::none()
}

/// Asks the platform for a window mode, then reads back what it applied.
fn request_fullscreen(window_id: Option<window::Id>, enter: bool) -> Task<Message> {
    let Some(id) = window_id else {
        tracing::debug!(enter, "fullscreen request before the window was observed");
        return Task::none();
    };
    let mode = if enter {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(id, mode).chain(observe_mode(id))
}

fn observe_mode(id: window::Id) -> Task<Message> {
    window::mode(id).map(Message::WindowModeObserved)
}

/// Something a screen or viewer wants in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Wanted {
    Still(String),
    Model(String),
}

impl Wanted {
    fn url(&self) -> &str {
        match self {
            Wanted::Still(url) | Wanted::Model(url) => url,
        }
    }
}

fn mounted_viewers<'a>(ctx: &'a UpdateContext<'_>) -> impl Iterator<Item = &'a viewer::State> {
    ctx.inline_viewer
        .as_ref()
        .into_iter()
        .chain(ctx.modal.as_ref().map(|modal| &modal.viewer))
}

/// What the viewers have on stage right now: the current still and, for a
/// 3D item, its model.
fn shown_media(ctx: &UpdateContext<'_>) -> Vec<Wanted> {
    mounted_viewers(ctx)
        .flat_map(|viewer| {
            let still = viewer
                .current_item()
                .and_then(MediaItem::still_url)
                .map(|url| Wanted::Still(url.to_string()));
            let model = viewer.wanted_model().map(|url| Wanted::Model(url.to_string()));
            still.into_iter().chain(model)
        })
        .collect()
}

/// Stores a finished fetch in the cache. Results for items the viewer has
/// moved away from only fill the cache.
pub fn handle_media_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<ImageData, MediaError>,
) -> Task<Message> {
    ctx.media.finish(url, result);
    keep_shown_media(ctx)
}

/// Stores a finished model fetch in the cache.
pub fn handle_model_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<ModelData, MediaError>,
) -> Task<Message> {
    ctx.media.finish_model(url, result);
    keep_shown_media(ctx)
}

/// Keeps whatever is on stage ahead of later results in the cache, and
/// fetches it again if an earlier result already pushed it out.
fn keep_shown_media(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let lost: Vec<Wanted> = shown_media(ctx)
        .into_iter()
        .filter(|wanted| !ctx.media.pin(wanted.url()))
        .collect();
    fetch(ctx, lost)
}

/// Starts fetches for every cover and viewer item the current screen shows
/// that is neither cached nor already in flight, plus the model on stage.
pub fn load_wanted_media(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut wanted: Vec<Wanted> = pages::wanted_media(ctx.catalog, ctx.screen, ctx.explore)
        .into_iter()
        .map(Wanted::Still)
        .collect();
    let from_viewers: Vec<Wanted> = mounted_viewers(ctx)
        .flat_map(|viewer| {
            let stills = viewer
                .wanted_media()
                .into_iter()
                .map(|url| Wanted::Still(url.to_string()));
            let model = viewer.wanted_model().map(|url| Wanted::Model(url.to_string()));
            model.into_iter().chain(stills).collect::<Vec<_>>()
        })
        .collect();
    wanted.extend(from_viewers);
    fetch(ctx, wanted)
}

fn fetch(ctx: &mut UpdateContext<'_>, wanted: Vec<Wanted>) -> Task<Message> {
    let mut tasks = Vec::new();
    for wanted in wanted {
        if !ctx.media.begin(wanted.url()) {
            continue;
        }
        let fetcher = ctx.fetcher.clone();
        tasks.push(match wanted {
            Wanted::Still(url) => Task::perform(fetcher.load(url.clone()), move |result| {
                Message::MediaLoaded { url, result }
            }),
            Wanted::Model(url) => {
                tracing::debug!(%url, "fetching model");
                Task::perform(fetcher.load_model(url.clone()), move |result| {
                    Message::ModelLoaded { url, result }
                })
            }
        });
    }
    if !tasks.is_empty() {
        tracing::debug!(count = tasks.len(), "fetching media");
    }
    Task::batch(tasks)
}

/// Re-reads the catalog. On failure the current content stays and a
/// banner explains why.
pub fn handle_reload(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.catalog.reload() {
        Ok(()) => {
            ctx.fetcher.set_data_source(ctx.catalog.data_source());
            ctx.media.clear();
            *ctx.notice = None;
            let screen = ctx.screen.clone();
            handle_screen_switch(ctx, screen)
        }
        Err(err) => {
            *ctx.notice = Some(Notice::with_detail(
                "notification-catalog-reload-error",
                err.to_string(),
            ));
            Task::none()
        }
    }
}

fn cycle_locale(i18n: &mut I18n) {
    let locales = &i18n.available_locales;
    if locales.is_empty() {
        return;
    }
    let next = locales
        .iter()
        .position(|locale| locale == i18n.current_locale())
        .map_or(0, |index| (index + 1) % locales.len());
    let locale = locales[next].clone();
    tracing::info!(%locale, "switching language");
    i18n.set_locale(locale);
}

/// Writes the theme and language back to `settings.toml`, keeping every
/// other setting as it is on disk.
fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    let (mut config, _) = config::load();
    config.general.theme_mode = *ctx.theme_mode;
    config.general.language = Some(ctx.i18n.current_locale().to_string());
    if let Err(err) = config::save(&config) {
        tracing::warn!(error = %err, "failed to save preferences");
        *ctx.notice = Some(Notice::new("notification-config-save-error"));
    }
}
