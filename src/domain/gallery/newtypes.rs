// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for transition timing, display opacity and image
//! references, ensuring they are always within valid ranges.

use crate::config::{DEFAULT_FADE_DELAY_MS, MAX_FADE_DELAY_MS, MIN_FADE_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// FadeDelay
// =============================================================================

/// Delay between fading the main display out and swapping its image.
///
/// # Example
///
/// ```
/// use iced_gallery::domain::gallery::FadeDelay;
///
/// assert_eq!(FadeDelay::default().as_millis(), 150);
/// assert_eq!(FadeDelay::new(60_000).as_millis(), 2_000); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDelay(u32);

impl FadeDelay {
    /// Creates a new fade delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_FADE_DELAY_MS, MAX_FADE_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for FadeDelay {
    fn default() -> Self {
        Self(DEFAULT_FADE_DELAY_MS)
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// Opacity of the main display, in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent (faded out).
    pub const TRANSPARENT: Self = Self(0.0);
    /// Fully opaque (visible).
    pub const OPAQUE: Self = Self(1.0);

    /// Creates an opacity value, clamping to `[0.0, 1.0]`. NaN maps to opaque.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::OPAQUE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when nothing of the display is visible.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

// =============================================================================
// ImageSource
// =============================================================================

/// Reference to the image a thumbnail represents and the main display shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource(PathBuf);

impl ImageSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// File name for labels and tooltips, falling back to the full path.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// =============================================================================
// TransitionPolicy
// =============================================================================

/// How a new selection treats swaps still waiting for their fade delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionPolicy {
    /// Every selection schedules its own swap and none are cancelled.
    /// Rapid input can flash an intermediate image.
    #[default]
    Overlap,
    /// A single pending slot: a new selection cancels the in-flight swap.
    CancelPending,
}
