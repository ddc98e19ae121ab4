// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Config directory (where `settings.toml` lives):
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** `--config-dir` - set via [`init_cli_overrides`]
//! 3. **Environment variable** `CABINET_CONFIG_DIR`
//! 4. **Platform default** - via `dirs` crate
//!
//! Catalog data directory (replaces the bundled dataset):
//! 1. **Explicit override**
//! 2. **CLI argument** `--data-dir`
//! 3. **Environment variable** `CABINET_DATA_DIR`
//! 4. **`[catalog] data_dir`** from `settings.toml`
//! 5. None: the bundled dataset is used
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.data_dir, flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Cabinet";

/// Environment variable to override the catalog data directory.
pub const ENV_DATA_DIR: &str = "CABINET_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CABINET_CONFIG_DIR";

/// Global CLI override for data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// Only the first call takes effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI path overrides already initialized, ignoring");
    }
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the catalog data directory, or `None` for the bundled dataset.
pub fn get_catalog_data_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    get_catalog_data_dir_with_override(None, configured)
}

/// Returns the catalog data directory with an optional override.
///
/// # Arguments
///
/// * `override_path` - Highest priority, for tests.
/// * `configured` - `[catalog] data_dir` from the settings file, lowest priority.
pub fn get_catalog_data_dir_with_override(
    override_path: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_data_dir)
        .or_else(|| env_path(ENV_DATA_DIR))
        .or(configured)
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/Cabinet/`
/// - macOS: `~/Library/Application Support/Cabinet/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Cabinet\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Some(path) = env_path(ENV_CONFIG_DIR) {
        return Some(path);
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn data_dir_defaults_to_bundled() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        assert_eq!(get_catalog_data_dir(None), None);
    }

    #[test]
    fn env_var_beats_configured_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/data");

        let result = get_catalog_data_dir(Some(PathBuf::from("/configured/data")));
        assert_eq!(result, Some(PathBuf::from("/env/data")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn configured_data_dir_used_when_nothing_else_set() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        let result = get_catalog_data_dir(Some(PathBuf::from("/configured/data")));
        assert_eq!(result, Some(PathBuf::from("/configured/data")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_catalog_data_dir_with_override(Some(override_path.clone()), None);
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }
}
