// SPDX-License-Identifier: MPL-2.0
//! Element ports for the surfaces the gallery mutates.

use crate::domain::gallery::{ImageSource, Opacity};

/// The single surface showing the current image.
pub trait MainDisplay {
    /// Image currently shown.
    fn source(&self) -> &ImageSource;

    /// Replaces the shown image.
    fn set_source(&mut self, source: ImageSource);

    /// Current opacity.
    fn opacity(&self) -> Opacity;

    /// Sets the opacity used by the fade transition.
    fn set_opacity(&mut self, opacity: Opacity);
}

/// One entry of the thumbnail strip.
pub trait Thumbnail {
    /// Image this thumbnail represents.
    fn source(&self) -> &ImageSource;

    /// Whether the thumbnail carries the active highlight.
    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);
}

/// Optional "current / total" text display.
pub trait CounterDisplay {
    fn text(&self) -> &str;

    fn set_text(&mut self, text: String);
}
