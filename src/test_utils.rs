// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Zoom factors and pan offsets go through repeated multiplication, so tests
//! compare them with the `approx` macros rather than `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for zoom and pan comparisons.
pub const F32_EPSILON: f32 = 1e-5;
