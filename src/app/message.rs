// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::MediaError;
use crate::media::{ImageData, ModelData};
use crate::ui::navbar;
use crate::ui::pages;
use crate::ui::viewer;
use iced::keyboard::{Key, Modifiers};
use iced::window;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(pages::Message),
    /// Viewer hosted in the modal overlay.
    Modal(viewer::Message),
    /// A media fetch finished, successfully or not.
    MediaLoaded {
        url: String,
        result: Result<ImageData, MediaError>,
    },
    /// A 3D model fetch finished.
    ModelLoaded {
        url: String,
        result: Result<ModelData, MediaError>,
    },
    /// Uncaptured key press while a viewer is mounted.
    KeyPressed { key: Key, modifiers: Modifiers },
    /// The window opened or was resized.
    WindowChanged(window::Id),
    /// Window mode read back from the platform.
    WindowModeObserved(window::Mode),
    ReloadCatalog,
    DismissNotice,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog directory override.
    /// Takes precedence over `CABINET_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CABINET_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Source slug to open on startup.
    pub slug: Option<String>,
}
