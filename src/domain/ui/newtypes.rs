// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom factor bounds (0.5× to 10×).
pub mod zoom_bounds {
    /// Minimum zoom factor.
    pub const MIN: f32 = 0.5;
    /// Maximum zoom factor.
    pub const MAX: f32 = 10.0;
    /// Default zoom factor (image fitted to the viewport).
    pub const DEFAULT: f32 = 1.0;
    /// Multiplier applied by one zoom-in step (divisor for zoom-out).
    pub const STEP_MULTIPLIER: f32 = 1.5;
    /// Multiplier applied per wheel notch when scrolling down.
    pub const WHEEL_OUT_MULTIPLIER: f32 = 0.9;
    /// Multiplier applied per wheel notch when scrolling up.
    pub const WHEEL_IN_MULTIPLIER: f32 = 1.1;
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Zoom factor relative to the fitted image, guaranteed to be within
/// `[0.5, 10]`.
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        Self(factor.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a rounded percentage for display (1.0 → 100).
    #[must_use]
    pub fn as_percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    /// Returns whether panning is meaningful at this zoom level.
    #[must_use]
    pub fn allows_pan(self) -> bool {
        self.0 > zoom_bounds::DEFAULT
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX
    }

    /// One zoom-in step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 * zoom_bounds::STEP_MULTIPLIER)
    }

    /// One zoom-out step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 / zoom_bounds::STEP_MULTIPLIER)
    }

    /// Applies one wheel notch. Scrolling up zooms in.
    #[must_use]
    pub fn wheel(self, scroll_up: bool) -> Self {
        let multiplier = if scroll_up {
            zoom_bounds::WHEEL_IN_MULTIPLIER
        } else {
            zoom_bounds::WHEEL_OUT_MULTIPLIER
        };
        Self::new(self.0 * multiplier)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT)
    }
}

// =============================================================================
// Camera Distance Bounds
// =============================================================================

/// Orbit camera distance bounds for the 3D model stage.
pub mod camera_bounds {
    /// Closest allowed distance.
    pub const MIN_DISTANCE: f32 = 1.5;
    /// Farthest allowed distance.
    pub const MAX_DISTANCE: f32 = 12.0;
    /// Default distance.
    pub const DEFAULT_DISTANCE: f32 = 4.0;
    /// Pitch limit in radians (just under 90°) so the camera never flips.
    pub const MAX_PITCH: f32 = 1.55;
}

// =============================================================================
// CameraDistance
// =============================================================================

/// Distance of the orbit camera from the model centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDistance(f32);

impl CameraDistance {
    /// Creates a new distance, clamping to the valid range.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        if !distance.is_finite() {
            return Self::default();
        }
        Self(distance.clamp(camera_bounds::MIN_DISTANCE, camera_bounds::MAX_DISTANCE))
    }

    /// Returns the raw distance.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Moves the camera by a multiplicative factor (< 1 moves closer).
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for CameraDistance {
    fn default() -> Self {
        Self(camera_bounds::DEFAULT_DISTANCE)
    }
}
