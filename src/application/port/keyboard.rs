// SPDX-License-Identifier: MPL-2.0
//! Keyboard listener port.
//!
//! Key presses reach the gallery from a window-global stream, not from a
//! focused widget. Registration is explicit so that a controller which is
//! torn down stops receiving keys and no listener outlives its gallery.

use std::fmt;

/// Handle returned by [`KeyboardHub::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Key identifiers as seen by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    /// Any other key; ignored by the gallery.
    Other,
}

/// Source of window-global keydown notifications.
pub trait KeyboardHub {
    /// Registers a new keydown listener.
    fn register(&mut self) -> ListenerId;

    /// Removes a listener. Returns false if it was not registered.
    fn deregister(&mut self, id: ListenerId) -> bool;

    fn is_registered(&self, id: ListenerId) -> bool;
}
