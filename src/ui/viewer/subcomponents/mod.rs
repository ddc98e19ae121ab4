// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── navigation   - Active index, clamped prev/next/select
//!     ├── zoom         - Encapsulates ZoomState (factor + pan)
//!     ├── drag         - Encapsulates DragState, mouse and touch
//!     ├── fullscreen   - Mirror of the observed window mode
//!     └── model_stage  - Orbit camera for 3D items
//! ```

pub mod drag;
pub mod fullscreen;
pub mod model_stage;
pub mod navigation;
pub mod zoom;
