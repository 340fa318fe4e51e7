// SPDX-License-Identifier: MPL-2.0
//! In-memory element adapters.
//!
//! These hold exactly the state the ports expose. The Iced view reads them
//! every frame, so mutating an adapter is all it takes to update the screen.

use crate::application::port::{CounterDisplay, MainDisplay, Thumbnail};
use crate::domain::gallery::{ImageSource, Opacity};

/// Main image surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySurface {
    source: ImageSource,
    opacity: Opacity,
}

impl DisplaySurface {
    /// Creates a fully visible surface showing `source`.
    #[must_use]
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            opacity: Opacity::OPAQUE,
        }
    }
}

impl MainDisplay for DisplaySurface {
    fn source(&self) -> &ImageSource {
        &self.source
    }

    fn set_source(&mut self, source: ImageSource) {
        self.source = source;
    }

    fn opacity(&self) -> Opacity {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: Opacity) {
        self.opacity = opacity;
    }
}

/// Thumbnail strip entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSlot {
    source: ImageSource,
    active: bool,
}

impl ThumbnailSlot {
    #[must_use]
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            active: false,
        }
    }
}

impl Thumbnail for ThumbnailSlot {
    fn source(&self) -> &ImageSource {
        &self.source
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Counter text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterLabel {
    text: String,
}

impl CounterDisplay for CounterLabel {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// Builds one slot per image plus a display showing the first image.
///
/// Returns `None` for an empty list: there is nothing to display.
#[must_use]
pub fn build_surfaces(images: &[ImageSource]) -> Option<(DisplaySurface, Vec<ThumbnailSlot>)> {
    let first = images.first()?.clone();
    let slots = images.iter().cloned().map(ThumbnailSlot::new).collect();
    Some((DisplaySurface::new(first), slots))
}
