// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": views borrow the gallery controller
//! and its in-memory surfaces and emit gallery messages.
//!
//! - [`gallery`] - Main image, previous/next controls, counter and thumbnail strip
//! - [`empty_state`] - Shown when the directory has no image or cannot be read
//! - [`styles`] - Button styles for thumbnails and controls
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod empty_state;
pub mod gallery;
pub mod styles;
