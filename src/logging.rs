// SPDX-License-Identifier: MPL-2.0
//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The filter comes from `RUST_LOG` when set, for example
//! `RUST_LOG=cabinet=debug` to follow viewer transitions and media fetches.
//! Without it only this crate's `info` and above are printed.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "cabinet=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Calling it twice (tests, embedding) keeps the first subscriber.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(false))
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
