// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog screens and
//! the media viewer.
//!
//! The `App` struct wires together the domains (catalog, viewer, media
//! cache, localization, preferences) and translates messages into side
//! effects like media fetches, window mode requests or config persistence.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{Catalog, CatalogItem, DataSource, DirectoryData, EmbeddedData};
use crate::i18n::fluent::I18n;
use crate::media::{self, Fetcher, ImageData, MediaCache};
use crate::ui::pages::explore;
use crate::ui::scroll_lock::ScrollGate;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::{self, Modal};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// A banner shown under the navbar until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Fluent message key.
    pub key: &'static str,
    /// Passed to the message as `$error`.
    pub detail: Option<String>,
}

impl Notice {
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self { key, detail: None }
    }

    #[must_use]
    pub fn with_detail(key: &'static str, detail: String) -> Self {
        Self {
            key,
            detail: Some(detail),
        }
    }
}

/// Root Iced application state that bridges the catalog, the viewers,
/// localization and persisted preferences.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    screen: Screen,
    /// Explore filters; kept while browsing detail screens.
    explore: explore::State,
    /// Welcome screen search box.
    search: String,
    /// Viewer embedded in the current detail screen.
    inline_viewer: Option<viewer::State>,
    /// Fullscreen viewer over the current screen.
    modal: Option<Modal>,
    scroll_gate: ScrollGate,
    media: MediaCache,
    fetcher: Fetcher,
    placeholder: ImageData,
    theme_mode: ThemeMode,
    window_id: Option<window::Id>,
    notice: Option<Notice>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_inline_viewer", &self.inline_viewer.is_some())
            .field("modal_open", &self.modal.is_some())
            .field("cached_media", &self.media.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Opens the catalog the configuration points at.
///
/// A failed load still yields a (empty) catalog so the window comes up,
/// together with the notice explaining what happened.
fn open_catalog(configured: Option<std::path::PathBuf>) -> (Catalog, Option<Notice>) {
    match paths::get_catalog_data_dir(configured) {
        Some(dir) => open_from(DirectoryData::new(dir)),
        None => open_from(EmbeddedData),
    }
}

fn open_from<D: DataSource + Clone + 'static>(data: D) -> (Catalog, Option<Notice>) {
    match Catalog::load(data.clone()) {
        Ok(catalog) => (catalog, None),
        Err(err) => {
            tracing::error!(origin = %data.describe(), error = %err, "catalog failed to load");
            (
                Catalog::empty(data),
                Some(Notice::with_detail("notification-catalog-load-error", err.to_string())),
            )
        }
    }
}

impl Default for App {
    fn default() -> Self {
        let catalog = Catalog::empty(EmbeddedData);
        let fetcher = Fetcher::new(
            catalog.data_source(),
            config::ViewerConfig::default().fetch_timeout(),
        );
        Self {
            i18n: I18n::default(),
            catalog,
            screen: Screen::Home,
            explore: explore::State::default(),
            search: String::new(),
            inline_viewer: None,
            modal: None,
            scroll_gate: ScrollGate::new(),
            media: MediaCache::default(),
            fetcher,
            placeholder: media::placeholder(),
            theme_mode: ThemeMode::System,
            window_id: None,
            notice: None,
        }
    }
}

impl App {
    /// Initializes application state from the configuration and the `Flags`
    /// received from the launcher, and starts fetching the first screen's
    /// media.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (catalog, catalog_notice) = open_catalog(config.catalog.data_dir.clone());

        let fetcher = Fetcher::new(catalog.data_source(), config.viewer.fetch_timeout());

        // A broken catalog matters more than a broken settings file.
        let notice = catalog_notice
            .or_else(|| config_warning.map(|_| Notice::new("notification-config-load-error")));

        let mut app = App {
            i18n,
            catalog,
            fetcher,
            media: MediaCache::new(config.viewer.cache_entries()),
            theme_mode: config.general.theme_mode,
            notice,
            ..Self::default()
        };

        let start = flags.slug.map_or(Screen::Home, Screen::Source);
        tracing::info!(screen = ?start, locale = %app.i18n.current_locale(), "starting");
        let task = app.switch_to(start);
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            catalog: &mut self.catalog,
            screen: &mut self.screen,
            explore: &mut self.explore,
            search: &mut self.search,
            inline_viewer: &mut self.inline_viewer,
            modal: &mut self.modal,
            scroll_gate: &self.scroll_gate,
            media: &mut self.media,
            fetcher: &mut self.fetcher,
            theme_mode: &mut self.theme_mode,
            window_id: &mut self.window_id,
            notice: &mut self.notice,
        }
    }

    fn switch_to(&mut self, screen: Screen) -> Task<Message> {
        update::handle_screen_switch(&mut self.update_context(), screen)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let item_title = match &self.screen {
            Screen::Source(slug) => self.catalog.source_by_slug(slug).map(CatalogItem::title),
            Screen::ExhibitionObject { object, .. } => self
                .catalog
                .exhibition_object_by_slug(object)
                .map(CatalogItem::title),
            Screen::Exhibition(slug) | Screen::ExhibitionPart { exhibition: slug, .. } => self
                .catalog
                .exhibition_by_slug(slug)
                .map(|exhibition| exhibition.title.as_str()),
            _ => None,
        };
        match item_title {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        let name = if self.theme_mode.is_dark() {
            "Cabinet Dark"
        } else {
            "Cabinet Light"
        };
        self.theme_mode.colors().to_iced_theme(name)
    }

    fn subscription(&self) -> Subscription<Message> {
        let viewer_mounted = self.inline_viewer.is_some() || self.modal.is_some();
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_viewer_subscription(viewer_mounted),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Modal(viewer_message) => {
                update::handle_modal_message(&mut ctx, viewer_message)
            }
            Message::MediaLoaded { url, result } => {
                update::handle_media_loaded(&mut ctx, url, result)
            }
            Message::ModelLoaded { url, result } => {
                update::handle_model_loaded(&mut ctx, url, result)
            }
            Message::KeyPressed { key, modifiers } => {
                update::handle_key_pressed(&mut ctx, &key, modifiers)
            }
            Message::WindowChanged(id) => update::handle_window_changed(&mut ctx, id),
            Message::WindowModeObserved(mode) => update::handle_window_mode(&mut ctx, mode),
            Message::ReloadCatalog => update::handle_reload(&mut ctx),
            Message::DismissNotice => {
                *ctx.notice = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            screen: &self.screen,
            explore: &self.explore,
            search: &self.search,
            inline_viewer: self.inline_viewer.as_ref(),
            modal: self.modal.as_ref(),
            scroll_locked: self.scroll_gate.is_locked(),
            media: &self.media,
            placeholder: &self.placeholder,
            theme_mode: self.theme_mode,
            notice: self.notice.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaItem;
    use crate::error::MediaError;
    use crate::ui::pages;
    use iced::keyboard::{key::Named, Key, Modifiers};

    fn app() -> App {
        let catalog = Catalog::load(EmbeddedData).expect("bundled catalog loads");
        App {
            catalog,
            ..App::default()
        }
    }

    fn open(app: &mut App, screen: Screen) {
        let _ = app.update(Message::Page(pages::Message::Open(screen)));
    }

    fn press(app: &mut App, key: Key) {
        let _ = app.update(Message::KeyPressed {
            key,
            modifiers: Modifiers::empty(),
        });
    }

    #[test]
    fn opening_a_source_mounts_an_inline_viewer() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        assert!(app.inline_viewer.is_some());
        assert!(app.modal.is_none());
    }

    #[test]
    fn expanding_locks_scroll_and_escape_releases_it() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        let _ = app.update(Message::Page(pages::Message::ExpandViewer));
        assert!(app.modal.is_some());
        assert!(app.scroll_gate.is_locked());

        press(&mut app, Key::Named(Named::Escape));
        assert!(app.modal.is_none());
        assert!(!app.scroll_gate.is_locked());
    }

    #[test]
    fn leaving_the_screen_drops_modal_and_lock() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        let _ = app.update(Message::Page(pages::Message::ExpandViewer));
        press(&mut app, Key::Named(Named::ArrowRight));
        assert_eq!(app.modal.as_ref().map(|m| m.viewer.current_index()), Some(1));

        open(&mut app, Screen::Explore);
        assert!(app.modal.is_none());
        assert!(app.inline_viewer.is_none());
        assert!(!app.scroll_gate.is_locked());
    }

    #[test]
    fn keys_go_to_the_inline_viewer_without_modal() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        press(&mut app, Key::Named(Named::ArrowRight));
        assert_eq!(
            app.inline_viewer.as_ref().map(viewer::State::current_index),
            Some(1)
        );
        // Escape never closes an inline viewer.
        press(&mut app, Key::Named(Named::Escape));
        assert!(app.inline_viewer.is_some());
    }

    #[test]
    fn fullscreen_request_without_window_keeps_windowed() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        let _ = app.update(Message::Page(pages::Message::Viewer(
            viewer::Message::ToggleFullscreen,
        )));
        assert_eq!(
            app.inline_viewer.as_ref().map(viewer::State::is_fullscreen),
            Some(false)
        );
    }

    #[test]
    fn observed_window_mode_reaches_the_viewer() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        let _ = app.update(Message::WindowModeObserved(window::Mode::Fullscreen));
        assert_eq!(
            app.inline_viewer.as_ref().map(viewer::State::is_fullscreen),
            Some(true)
        );
    }

    #[test]
    fn modal_opened_in_fullscreen_exits_fullscreen_before_closing() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        let _ = app.update(Message::WindowModeObserved(window::Mode::Fullscreen));
        let _ = app.update(Message::Page(pages::Message::ExpandViewer));
        assert_eq!(
            app.modal.as_ref().map(|modal| modal.viewer.is_fullscreen()),
            Some(true)
        );

        press(&mut app, Key::Named(Named::Escape));
        assert!(app.modal.is_some());
        assert!(app.scroll_gate.is_locked());

        let _ = app.update(Message::WindowModeObserved(window::Mode::Windowed));
        press(&mut app, Key::Named(Named::Escape));
        assert!(app.modal.is_none());
    }

    #[test]
    fn tag_from_detail_screen_opens_explore_filtered_by_it() {
        let mut app = app();
        open(&mut app, Screen::Source("flea".into()));
        let tag = app
            .catalog
            .source_by_slug("flea")
            .and_then(|s| s.tags.first().cloned())
            .expect("flea has tags");
        let _ = app.update(Message::Page(pages::Message::TagToggled(tag.clone())));
        assert_eq!(app.screen, Screen::Explore);
        assert_eq!(app.explore.tag(), Some(tag.as_str()));
        assert_eq!(app.explore.text(), "");
    }

    #[test]
    fn blank_search_stays_on_home() {
        let mut app = app();
        let _ = app.update(Message::Page(pages::Message::SearchInput("   ".into())));
        let _ = app.update(Message::Page(pages::Message::SubmitSearch));
        assert_eq!(app.screen, Screen::Home);

        let _ = app.update(Message::Page(pages::Message::SearchInput(" flea ".into())));
        let _ = app.update(Message::Page(pages::Message::SubmitSearch));
        assert_eq!(app.screen, Screen::Explore);
        assert_eq!(app.explore.text(), "flea");
    }

    #[test]
    fn media_results_fill_the_cache() {
        let mut app = app();
        let url = "images/sources/flea-plate.png".to_string();
        let _ = app.update(Message::MediaLoaded {
            url: url.clone(),
            result: Err(MediaError::Decode("bad".into())),
        });
        assert!(matches!(
            app.media.peek(&url),
            Some(media::MediaSlot::Failed)
        ));
    }

    fn pixel() -> Result<ImageData, MediaError> {
        Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]))
    }

    fn shown_still(app: &App) -> String {
        app.inline_viewer
            .as_ref()
            .and_then(viewer::State::current_item)
            .and_then(MediaItem::still_url)
            .map(str::to_string)
            .expect("current item has a still")
    }

    #[test]
    fn shown_image_outlives_later_results_in_a_small_cache() {
        let mut app = App {
            media: MediaCache::new(media::cache::MIN_CACHE_ENTRIES),
            ..app()
        };
        open(&mut app, Screen::Source("camera-obscura".into()));
        let shown = shown_still(&app);
        let _ = app.update(Message::MediaLoaded {
            url: shown.clone(),
            result: pixel(),
        });
        for i in 0..10 {
            let _ = app.update(Message::MediaLoaded {
                url: format!("images/elsewhere-{i}.png"),
                result: pixel(),
            });
        }
        assert!(matches!(
            app.media.peek(&shown),
            Some(media::MediaSlot::Ready(_))
        ));
    }

    #[test]
    fn lost_shown_image_is_fetched_again() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        let shown = shown_still(&app);
        app.media.clear();
        assert!(!app.media.is_pending(&shown));

        let _ = app.update(Message::MediaLoaded {
            url: "images/elsewhere.png".into(),
            result: pixel(),
        });
        assert!(app.media.is_pending(&shown));
    }

    #[test]
    fn model_on_stage_is_fetched_and_cached() {
        let mut app = app();
        open(&mut app, Screen::Source("camera-obscura".into()));
        let url = "models/camera-obscura.glb";
        assert!(!app.media.is_pending(url));

        let last = app.inline_viewer.as_ref().map_or(0, |v| v.len() - 1);
        let _ = app.update(Message::Page(pages::Message::Viewer(
            viewer::Message::Select(last),
        )));
        assert!(app
            .inline_viewer
            .as_ref()
            .is_some_and(viewer::State::current_is_3d));
        assert!(app.media.is_pending(url));

        let _ = app.update(Message::ModelLoaded {
            url: url.into(),
            result: Err(MediaError::Decode("truncated".into())),
        });
        assert!(matches!(app.media.peek(url), Some(media::MediaSlot::Failed)));
    }
}
