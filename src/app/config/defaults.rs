// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Viewer**: Image cache size and fetch timeout
//! - **Window**: Initial window geometry

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = crate::media::cache::DEFAULT_CACHE_ENTRIES;

/// Minimum number of decoded images kept in memory.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = crate::media::cache::MIN_CACHE_ENTRIES;

/// Maximum number of decoded images kept in memory.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = crate::media::cache::MAX_CACHE_ENTRIES;

/// Default timeout for fetching a remote image (seconds).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;

/// Minimum fetch timeout (seconds).
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 2;

/// Maximum fetch timeout (seconds).
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest window the layout supports.
pub const MIN_WINDOW_WIDTH: f32 = 720.0;

/// Smallest window the layout supports.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_IMAGE_CACHE_ENTRIES > 0);
    assert!(MIN_IMAGE_CACHE_ENTRIES <= DEFAULT_IMAGE_CACHE_ENTRIES);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES <= MAX_IMAGE_CACHE_ENTRIES);
    assert!(MIN_FETCH_TIMEOUT_SECS <= DEFAULT_FETCH_TIMEOUT_SECS);
    assert!(DEFAULT_FETCH_TIMEOUT_SECS <= MAX_FETCH_TIMEOUT_SECS);
};
