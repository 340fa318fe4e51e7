// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Transition**: Fade delay between fade-out and image swap
//! - **Thumbnails**: Thumbnail strip sizing

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay between the fade-out and the image swap (in milliseconds).
pub const DEFAULT_FADE_DELAY_MS: u32 = 150;

/// Minimum fade delay. Zero swaps on the next event-loop turn.
pub const MIN_FADE_DELAY_MS: u32 = 0;

/// Maximum fade delay.
pub const MAX_FADE_DELAY_MS: u32 = 2_000;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default edge length of a thumbnail in the strip (logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: u16 = 96;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u16 = 32;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u16 = 256;
